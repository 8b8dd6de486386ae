//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of pure functions such as DTO conversions.

use chrono::Utc;
use entity::sea_orm_active_enums::SpectralClass;
use uuid::Uuid;

/// Mining speed used for every mock save; the lowest value the schema accepts.
pub const MOCK_MINING_SPEED: i32 = 100;

/// Create a mock save model.
///
/// # Arguments
/// - `name` - The save name
///
/// # Returns
/// - `entity::save::Model` - A freshly created save at version 0
pub fn mock_save_model(name: &str) -> entity::save::Model {
    entity::save::Model {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        updated_at: None,
        version: 0,
        name: name.to_string(),
        notes: None,
        mining_speed: MOCK_MINING_SPEED,
    }
}

/// Create a mock solar system model owned by `save_id`.
pub fn mock_solar_system_model(save_id: Uuid, name: &str) -> entity::solar_system::Model {
    entity::solar_system::Model {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        updated_at: None,
        version: 0,
        save_id,
        name: name.to_string(),
        notes: None,
    }
}

/// Create a mock star model with sun-like values.
pub fn mock_star_model(
    solar_system_id: Uuid,
    spectral_class: SpectralClass,
) -> entity::star::Model {
    entity::star::Model {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        updated_at: None,
        version: 0,
        solar_system_id,
        spectral_class,
        luminosity: 1.0,
        radius: 1.0,
    }
}
