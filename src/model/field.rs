//! Field descriptions used in error bodies.
//!
//! A [`FieldValue`] names a field and the value the client sent (or the key of an
//! object), while [`AllowedValues`] tells the client what would have been accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A scalar value echoed back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Value {
    Uuid(Uuid),
    Integer(i64),
    Float(f64),
    String(String),
}

/// A named field and the value it held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
}

/// Key fields identifying an object, e.g. `save_id` + `name` for a solar system.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValues(pub Vec<FieldValue>);

/// Lower or upper limit of a numeric range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bound {
    pub value: Value,
    pub inclusive: bool,
}

/// Description of the values a field accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum AllowedValues {
    Choice {
        values: Vec<Value>,
    },
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<Bound>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<Bound>,
    },
    Float {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<Bound>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<Bound>,
    },
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{}", v),
        }
    }
}

impl FieldValue {
    pub fn new<F: Into<String>, V: Into<Value>>(name: F, value: V) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn null_value<F: Into<String>>(name: F) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Render the value for messages, `null` when absent.
    pub fn format_value(&self) -> String {
        self.value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "null".to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.name, self.format_value())
    }
}

impl From<FieldValue> for FieldValues {
    fn from(value: FieldValue) -> Self {
        Self(vec![value])
    }
}

impl<const N: usize> From<[FieldValue; N]> for FieldValues {
    fn from(value: [FieldValue; N]) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<String>>()
            .join(" and ");

        write!(f, "{}", joined)
    }
}

impl Bound {
    pub fn inclusive<T: Into<Value>>(value: T) -> Self {
        Self {
            value: value.into(),
            inclusive: true,
        }
    }

    pub fn exclusive<T: Into<Value>>(value: T) -> Self {
        Self {
            value: value.into(),
            inclusive: false,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inclusive {
            write!(f, ">= {}", self.value)
        } else {
            write!(f, "> {}", self.value)
        }
    }
}

/// Renders a bound used as the upper end of a range.
struct UpperBound<'a>(&'a Bound);

impl fmt::Display for UpperBound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.inclusive {
            write!(f, "<= {}", self.0.value)
        } else {
            write!(f, "< {}", self.0.value)
        }
    }
}

impl AllowedValues {
    pub fn choice<T: Into<Value>, I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::Choice {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn integer_min(min: Bound) -> Self {
        Self::Integer {
            min: Some(min),
            max: None,
        }
    }

    pub fn integer_range(min: Bound, max: Bound) -> Self {
        Self::Integer {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn float_min(min: Bound) -> Self {
        Self::Float {
            min: Some(min),
            max: None,
        }
    }

    pub fn string_len_min(min_length: usize) -> Self {
        Self::String {
            min_length: Some(min_length),
            max_length: None,
        }
    }
}

impl fmt::Display for AllowedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice { values } => {
                let joined = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");

                write!(f, "Allowed values are: {}.", joined)
            }
            Self::Integer { min, max } => match (min, max) {
                (Some(min), Some(max)) => {
                    write!(f, "Value must be an integer {} and {}.", min, UpperBound(max))
                }
                (Some(bound), None) => write!(f, "Value must be an integer {}.", bound),
                (None, Some(bound)) => {
                    write!(f, "Value must be an integer {}.", UpperBound(bound))
                }
                (None, None) => write!(f, "Value must be an integer."),
            },
            Self::Float { min, max } => match (min, max) {
                (Some(min), Some(max)) => {
                    write!(f, "Value must be a number {} and {}.", min, UpperBound(max))
                }
                (Some(bound), None) => write!(f, "Value must be a number {}.", bound),
                (None, Some(bound)) => write!(f, "Value must be a number {}.", UpperBound(bound)),
                (None, None) => write!(f, "Value must be a number."),
            },
            Self::String {
                min_length,
                max_length,
            } => match (min_length, max_length) {
                (Some(min), Some(max)) => write!(
                    f,
                    "Value must be between {} and {} characters long.",
                    min, max
                ),
                (Some(min), None) => write!(f, "Value must be at least {} characters long.", min),
                (None, Some(max)) => write!(f, "Value must be at most {} characters long.", max),
                (None, None) => write!(f, "Value must be a string."),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values_join_keys() {
        let keys = FieldValues::from([
            FieldValue::new("save_id", "a"),
            FieldValue::new("name", "Sol"),
        ]);

        assert_eq!(keys.to_string(), "save_id `a` and name `Sol`");
    }

    #[test]
    fn null_field_value_formats_as_null() {
        assert_eq!(FieldValue::null_value("notes").to_string(), "notes `null`");
    }

    #[test]
    fn allowed_values_serialize_with_type_tag() {
        let allowed = AllowedValues::integer_min(Bound::inclusive(100));
        let json = serde_json::to_value(&allowed).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"type": "Integer", "min": {"value": 100, "inclusive": true}})
        );
        assert_eq!(allowed.to_string(), "Value must be an integer >= 100.");
    }

    #[test]
    fn choice_lists_every_value() {
        let allowed = AllowedValues::choice(["asc", "desc"]);

        assert_eq!(allowed.to_string(), "Allowed values are: asc, desc.");
    }

    #[test]
    fn integer_range_renders_upper_bound() {
        let allowed = AllowedValues::integer_range(Bound::inclusive(1), Bound::inclusive(500));

        assert_eq!(allowed.to_string(), "Value must be an integer >= 1 and <= 500.");
    }
}
