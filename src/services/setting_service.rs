//! Setting service. Settings can be added, listed and deleted, never updated.

use crate::error::{AppError, AppResult};
use crate::models::{NewSetting, Setting};
use crate::repositories::SettingRepository;

#[derive(Clone)]
pub struct SettingService {
    repo: SettingRepository,
}

impl SettingService {
    pub fn new(repo: SettingRepository) -> Self {
        Self { repo }
    }

    /// Stores a setting. An existing setting with the same name is left alone.
    pub async fn create_setting(&self, new_setting: NewSetting) -> AppResult<Setting> {
        self.repo.create(new_setting).await
    }

    pub async fn list_settings(&self) -> AppResult<Vec<Setting>> {
        self.repo.list_all().await
    }

    pub async fn delete_setting(&self, id: i32) -> AppResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(AppError::not_found_by_id("setting", id));
        }
        Ok(())
    }
}
