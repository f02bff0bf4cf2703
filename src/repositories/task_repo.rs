//! Task repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTask, Task};

#[derive(Clone)]
pub struct TaskRepository {
    pool: AsyncDbPool,
}

impl TaskRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_task: NewTask) -> Result<Task, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(tasks)
            .values(&new_task)
            .returning(Task::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all tasks in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Task>, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        tasks
            .order(id.asc())
            .select(Task::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, task_id: i32) -> Result<Option<Task>, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        tasks
            .filter(id.eq(task_id))
            .select(Task::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Returns the number of affected rows (0 or 1).
    pub async fn update_status(&self, task_id: i32, new_status: &str) -> Result<usize, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(tasks.filter(id.eq(task_id)))
            .set(status.eq(new_status))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Returns the number of affected rows (0 or 1).
    pub async fn delete(&self, task_id: i32) -> Result<usize, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(tasks.filter(id.eq(task_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        tasks
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn count_by_status(&self, wanted: &str) -> Result<i64, AppError> {
        use crate::schema::tasks::dsl::*;
        let mut conn = self.pool.get().await?;

        tasks
            .filter(status.eq(wanted))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
