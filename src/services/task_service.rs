//! Task service for business logic operations.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use jiff_diesel::ToDiesel;

use crate::error::{AppError, AppResult};
use crate::models::{NewTask, Task};
use crate::repositories::TaskRepository;

#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    /// Creates a task stamped with the current UTC time.
    pub async fn create_task(
        &self,
        title: String,
        description: Option<String>,
        priority: String,
    ) -> AppResult<Task> {
        let created_at = Timestamp::now().to_zoned(TimeZone::UTC).datetime();
        let task = self
            .repo
            .create(NewTask {
                title,
                description,
                priority,
                created_at: created_at.to_diesel(),
            })
            .await?;
        tracing::debug!(task_id = task.id, "Task created");
        Ok(task)
    }

    /// Lists all tasks in insertion order.
    pub async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        self.repo.list_all().await
    }

    pub async fn get_task(&self, id: i32) -> AppResult<Task> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found_by_id("task", id))
    }

    /// Sets the status of a task when one is given; otherwise only checks it exists.
    pub async fn update_status(&self, id: i32, status: Option<&str>) -> AppResult<()> {
        match status {
            Some(status) => {
                if self.repo.update_status(id, status).await? == 0 {
                    return Err(AppError::not_found_by_id("task", id));
                }
                tracing::debug!(task_id = id, status, "Task status updated");
            }
            None => {
                self.get_task(id).await?;
            }
        }
        Ok(())
    }

    pub async fn delete_task(&self, id: i32) -> AppResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(AppError::not_found_by_id("task", id));
        }
        Ok(())
    }
}
