//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `product`, `task`, `setting`, `report` - resource DTOs
//! - `health` - health check responses
//! - `error` - error and acknowledgement bodies

mod error;
mod health;
mod product;
mod report;
mod setting;
mod task;

pub use error::{ErrorResponse, MessageResponse};
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use product::{CreateProductRequest, ProductResponse, UpdateStatusRequest};
pub use report::ReportResponse;
pub use setting::{CreateSettingRequest, SettingResponse};
pub use task::{CREATED_AT_FORMAT, CreateTaskRequest, TaskResponse};
