//! Report DTO.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::Report;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(example = json!({
    "total_products": 3,
    "completed_products": 1,
    "total_tasks": 5,
    "completed_tasks": 2
}))]
pub struct ReportResponse {
    pub total_products: i64,
    pub completed_products: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            total_products: report.total_products,
            completed_products: report.completed_products,
            total_tasks: report.total_tasks,
            completed_tasks: report.completed_tasks,
        }
    }
}
