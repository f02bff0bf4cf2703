//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod product_repo;
mod setting_repo;
mod task_repo;

pub use product_repo::ProductRepository;
pub use setting_repo::SettingRepository;
pub use task_repo::TaskRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub products: ProductRepository,
    pub tasks: TaskRepository,
    pub settings: SettingRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            products: ProductRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            settings: SettingRepository::new(pool),
        }
    }
}
