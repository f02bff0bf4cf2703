//! Task DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Task;

/// Display format for `created_at`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "title": "Restock shelves",
    "description": "Aisle 4",
    "priority": "Low"
}))]
pub struct CreateTaskRequest {
    #[validate(required(message = "title is required"))]
    #[schema(required = true, value_type = String)]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to "Medium"
    pub priority: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TaskResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    /// UTC, formatted `YYYY-MM-DD HH:MM:SS`
    #[schema(example = "2024-05-17 09:30:05")]
    pub created_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            status: task.status,
            created_at: task.created_at.to_jiff().strftime(CREATED_AT_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff_diesel::ToDiesel;

    use super::*;

    #[test]
    fn test_created_at_is_formatted_to_seconds() {
        let task = Task {
            id: 1,
            title: "Restock".to_string(),
            description: None,
            priority: "Medium".to_string(),
            status: "Pending".to_string(),
            created_at: date(2024, 5, 17).at(9, 30, 5, 123_456_789).to_diesel(),
        };

        let response = TaskResponse::from(task);
        assert_eq!(response.created_at, "2024-05-17 09:30:05");
    }
}
