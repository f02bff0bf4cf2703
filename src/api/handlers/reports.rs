//! Report handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::REPORT_TAG;
use crate::api::dto::ReportResponse;
use crate::error::AppResult;
use crate::state::AppState;

pub fn report_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_report))
}

/// GET /reports - Product and task counts
///
/// A record counts as completed only when its status is exactly "Completed".
#[utoipa::path(
    get,
    path = "/reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Totals and completed counts", body = ReportResponse)
    )
)]
async fn get_report(State(state): State<AppState>) -> AppResult<Json<ReportResponse>> {
    let report = state.services.reports.summary().await?;
    Ok(Json(ReportResponse::from(report)))
}
