use utoipa::OpenApi;

pub const HEALTH_TAG: &str = "Health";
pub const PRODUCT_TAG: &str = "Products";
pub const TASK_TAG: &str = "Tasks";
pub const SETTING_TAG: &str = "Settings";
pub const REPORT_TAG: &str = "Reports";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workbench",
        description = "CRUD API for products, tasks and settings",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::MessageResponse,
        )
    ),
    tags(
        (name = HEALTH_TAG, description = "Liveness and readiness endpoints"),
        (name = PRODUCT_TAG, description = "Product inventory endpoints"),
        (name = TASK_TAG, description = "Task tracking endpoints"),
        (name = SETTING_TAG, description = "Free-form name/value settings"),
        (name = REPORT_TAG, description = "Completion counts"),
    )
)]
pub struct ApiDoc;
