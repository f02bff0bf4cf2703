//! Setting repository for async database operations.
//!
//! Settings are insert and delete only. Names are not unique.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewSetting, Setting};

#[derive(Clone)]
pub struct SettingRepository {
    pool: AsyncDbPool,
}

impl SettingRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_setting: NewSetting) -> Result<Setting, AppError> {
        use crate::schema::settings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(settings)
            .values(&new_setting)
            .returning(Setting::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists all settings in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Setting>, AppError> {
        use crate::schema::settings::dsl::*;
        let mut conn = self.pool.get().await?;

        settings
            .order(id.asc())
            .select(Setting::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Returns the number of affected rows (0 or 1).
    pub async fn delete(&self, setting_id: i32) -> Result<usize, AppError> {
        use crate::schema::settings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(settings.filter(id.eq(setting_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
