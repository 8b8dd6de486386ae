use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::SpectralClass;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StarDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub version: i32,
    pub solar_system_id: Uuid,
    /// One of `class_a`, `class_b`, `class_f`, `class_g`, `class_k`, `class_m`, `class_o`,
    /// `red_giant`, `yellow_giant`, `white_giant`, `blue_giant`, `white_dwarf`,
    /// `black_hole`, `neutron`
    #[schema(value_type = String)]
    pub spectral_class: SpectralClass,
    pub luminosity: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStarDto {
    #[schema(value_type = String)]
    pub spectral_class: SpectralClass,
    /// Must be greater than 0
    pub luminosity: f32,
    /// Must be greater than 0
    pub radius: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStarDto {
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub spectral_class: Option<SpectralClass>,
    #[serde(default)]
    pub luminosity: Option<f32>,
    #[serde(default)]
    pub radius: Option<f32>,
}

impl From<entity::star::Model> for StarDto {
    fn from(model: entity::star::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            version: model.version,
            solar_system_id: model.solar_system_id,
            spectral_class: model.spectral_class,
            luminosity: model.luminosity,
            radius: model.radius,
        }
    }
}
