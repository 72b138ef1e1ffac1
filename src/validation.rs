//! Shared input checks used by the request DTOs.
//!
//! Everything here is a pure function from a deserialized payload to
//! either `()` or a [`ValidationError`]; nothing touches storage.

use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

/// Deserializer for patch fields that must distinguish "absent" from
/// "explicitly null". Combined with `#[serde(default)]`:
/// missing key => `None`, `null` => `Some(None)`, value => `Some(Some(v))`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

pub fn require_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(field, "is required"));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub fn check_max_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    if let Some(v) = value {
        if v.chars().count() > max {
            return Err(ValidationError::new(
                field,
                format!("must be at most {max} characters"),
            ));
        }
    }
    Ok(())
}

pub fn check_range(
    field: &'static str,
    value: Option<i32>,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    if let Some(v) = value {
        if v < min || v > max {
            return Err(ValidationError::new(
                field,
                format!("must be between {min} and {max}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        note: Option<Option<String>>,
    }

    #[test]
    fn double_option_distinguishes_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.note, None);

        let null: Patch = serde_json::from_str(r#"{"note":null}"#).unwrap();
        assert_eq!(null.note, Some(None));

        let value: Patch = serde_json::from_str(r#"{"note":"x"}"#).unwrap();
        assert_eq!(value.note, Some(Some("x".to_string())));
    }

    #[test]
    fn require_len_rejects_empty_and_oversized() {
        assert!(require_len("name", "", 1, 100).is_err());
        assert!(require_len("name", &"x".repeat(101), 1, 100).is_err());
        assert!(require_len("name", "Widget", 1, 100).is_ok());
    }

    #[test]
    fn require_len_counts_chars_not_bytes() {
        // 100 multibyte characters are within a 100-char bound.
        assert!(require_len("name", &"ä".repeat(100), 1, 100).is_ok());
    }

    #[test]
    fn check_max_len_ignores_absent_values() {
        assert!(check_max_len("evidence", None, 5).is_ok());
        assert!(check_max_len("evidence", Some("123456"), 5).is_err());
    }

    #[test]
    fn check_range_bounds_are_inclusive() {
        assert!(check_range("impact", Some(1), 1, 10).is_ok());
        assert!(check_range("impact", Some(10), 1, 10).is_ok());
        assert!(check_range("impact", Some(0), 1, 10).is_err());
        assert!(check_range("impact", Some(11), 1, 10).is_err());
        assert!(check_range("impact", None, 1, 10).is_ok());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = check_range("ease", Some(42), 1, 10).unwrap_err();
        assert_eq!(err.field, "ease");
        assert!(err.message.contains("between 1 and 10"));
    }
}
