//! Field checks applied before a write.
//!
//! They mirror the database check constraints so a bad value is reported as
//! `InvalidFieldValue` with the accepted range instead of surfacing as a failed query.

use crate::{
    model::field::{AllowedValues, Bound, FieldValue},
    server::error::tracker::TrackerError,
};

/// Lowest mining speed a save accepts, in percent.
pub const MIN_MINING_SPEED: i32 = 100;

/// Names must contain at least one non-whitespace character.
pub fn name(field: &str, value: &str) -> Result<(), TrackerError> {
    if value.trim().is_empty() {
        return Err(TrackerError::invalid_field(
            FieldValue::new(field, value),
            AllowedValues::string_len_min(1),
        ));
    }

    Ok(())
}

/// Mining speed must be at least [`MIN_MINING_SPEED`].
pub fn mining_speed(value: i32) -> Result<(), TrackerError> {
    if value < MIN_MINING_SPEED {
        return Err(TrackerError::invalid_field(
            FieldValue::new("mining_speed", value),
            AllowedValues::integer_min(Bound::inclusive(MIN_MINING_SPEED)),
        ));
    }

    Ok(())
}

/// Rejects zero, negative and NaN values.
pub fn positive(field: &str, value: f32) -> Result<(), TrackerError> {
    if !(value > 0.0) {
        return Err(TrackerError::invalid_field(
            FieldValue::new(field, value),
            AllowedValues::float_min(Bound::exclusive(0.0)),
        ));
    }

    Ok(())
}
