use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::util::double_option;

/// A game save as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Current row version, send it back on update to guard against lost updates
    pub version: i32,
    pub name: String,
    pub notes: Option<String>,
    pub mining_speed: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSaveDto {
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Mining speed in percent, at least 100
    pub mining_speed: i32,
}

/// Partial update of a save, absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSaveDto {
    /// Version the client last saw; the update fails if the save has changed since
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    /// `null` clears the notes
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub mining_speed: Option<i32>,
}

impl From<entity::save::Model> for SaveDto {
    fn from(model: entity::save::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            version: model.version,
            name: model.name,
            notes: model.notes,
            mining_speed: model.mining_speed,
        }
    }
}
