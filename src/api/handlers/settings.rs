//! Setting request handlers. There is no update endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SETTING_TAG;
use crate::api::dto::{CreateSettingRequest, ErrorResponse, MessageResponse, SettingResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn setting_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_settings, create_setting))
        .routes(routes!(delete_setting))
}

/// GET /settings - List all settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "All settings in insertion order", body = Vec<SettingResponse>)
    )
)]
async fn list_settings(State(state): State<AppState>) -> AppResult<Json<Vec<SettingResponse>>> {
    let settings = state.services.settings.list_settings().await?;
    Ok(Json(settings.into_iter().map(SettingResponse::from).collect()))
}

/// POST /settings - Add a setting
///
/// Names are not unique; posting an existing name adds another row.
#[utoipa::path(
    post,
    path = "/settings",
    tag = SETTING_TAG,
    request_body = CreateSettingRequest,
    responses(
        (status = 201, description = "Setting added", body = MessageResponse),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse)
    )
)]
async fn create_setting(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateSettingRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let new_setting = req.into_new_setting()?;
    state.services.settings.create_setting(new_setting).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Setting added"))))
}

/// DELETE /settings/:id - Delete a setting
#[utoipa::path(
    delete,
    path = "/settings/{id}",
    tag = SETTING_TAG,
    params(
        ("id" = i32, Path, description = "Setting ID")
    ),
    responses(
        (status = 200, description = "Setting deleted", body = MessageResponse),
        (status = 404, description = "Setting not found", body = ErrorResponse)
    )
)]
async fn delete_setting(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.settings.delete_setting(id).await?;
    Ok(Json(MessageResponse::new("Setting deleted")))
}
