//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod product_service;
mod report_service;
mod setting_service;
mod task_service;

pub use product_service::ProductService;
pub use report_service::{Report, ReportService};
pub use setting_service::SettingService;
pub use task_service::TaskService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub products: ProductService,
    pub tasks: TaskService,
    pub settings: SettingService,
    pub reports: ReportService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            reports: ReportService::new(repos.products.clone(), repos.tasks.clone()),
            products: ProductService::new(repos.products),
            tasks: TaskService::new(repos.tasks),
            settings: SettingService::new(repos.settings),
        }
    }
}
