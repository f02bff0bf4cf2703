//! Report service: status counts across products and tasks.

use crate::error::AppResult;
use crate::models::COMPLETED_STATUS;
use crate::repositories::{ProductRepository, TaskRepository};

/// Totals and completed counts, each taken independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub total_products: i64,
    pub completed_products: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

#[derive(Clone)]
pub struct ReportService {
    products: ProductRepository,
    tasks: TaskRepository,
}

impl ReportService {
    pub fn new(products: ProductRepository, tasks: TaskRepository) -> Self {
        Self { products, tasks }
    }

    /// Runs the four counts concurrently.
    pub async fn summary(&self) -> AppResult<Report> {
        let (total_products, completed_products, total_tasks, completed_tasks) = tokio::try_join!(
            self.products.count_all(),
            self.products.count_by_status(COMPLETED_STATUS),
            self.tasks.count_all(),
            self.tasks.count_by_status(COMPLETED_STATUS),
        )?;

        Ok(Report {
            total_products,
            completed_products,
            total_tasks,
            completed_tasks,
        })
    }
}
