//! Task request handlers.

use axum::{
    Json,
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::TASK_TAG;
use crate::api::dto::{
    CreateTaskRequest, ErrorResponse, MessageResponse, TaskResponse, UpdateStatusRequest,
};
use crate::error::{AppError, AppResult};
use crate::models::DEFAULT_PRIORITY;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn task_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_tasks, create_task))
        .routes(routes!(update_task, delete_task))
}

/// GET /tasks - List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "All tasks in insertion order", body = Vec<TaskResponse>)
    )
)]
async fn list_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<TaskResponse>>> {
    let tasks = state.services.tasks.list_tasks().await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /tasks - Add a task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task added", body = MessageResponse),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse)
    )
)]
async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let title = req.title.ok_or_else(|| AppError::missing_field("title"))?;
    let priority = req
        .priority
        .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());

    state
        .services
        .tasks
        .create_task(title, req.description, priority)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Task added successfully")),
    ))
}

/// PATCH /tasks/:id - Update task status
#[utoipa::path(
    patch,
    path = "/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated, or nothing to update", body = MessageResponse),
        (status = 400, description = "Malformed body or null status", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Request,
) -> AppResult<Json<MessageResponse>> {
    // An unknown id is 404 whatever the body looks like
    state.services.tasks.get_task(id).await?;

    let ValidatedJson(req) =
        ValidatedJson::<UpdateStatusRequest>::from_request(request, &state).await?;
    state
        .services
        .tasks
        .update_status(id, req.status()?)
        .await?;
    Ok(Json(MessageResponse::new("Task updated successfully")))
}

/// DELETE /tasks/:id - Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.tasks.delete_task(id).await?;
    Ok(Json(MessageResponse::new("Task deleted")))
}
