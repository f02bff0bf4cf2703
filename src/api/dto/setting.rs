//! Setting DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NewSetting, Setting};

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({"name": "currency", "value": "EUR"}))]
pub struct CreateSettingRequest {
    #[validate(required(message = "name is required"))]
    #[schema(required = true, value_type = String)]
    pub name: Option<String>,
    #[validate(required(message = "value is required"))]
    #[schema(required = true, value_type = String)]
    pub value: Option<String>,
}

impl CreateSettingRequest {
    pub fn into_new_setting(self) -> AppResult<NewSetting> {
        Ok(NewSetting {
            name: self.name.ok_or_else(|| AppError::missing_field("name"))?,
            value: self.value.ok_or_else(|| AppError::missing_field("value"))?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SettingResponse {
    pub id: i32,
    pub name: String,
    pub value: String,
}

impl From<Setting> for SettingResponse {
    fn from(setting: Setting) -> Self {
        Self {
            id: setting.id,
            name: setting.name,
            value: setting.value,
        }
    }
}
