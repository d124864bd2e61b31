//! Declarative field rules.
//!
//! Each rule is a pure predicate over one field, returning the violation to
//! report. Validators evaluate rules independently and aggregate the results;
//! no rule short-circuits another.

use std::fmt::Display;

use crate::error::{CommonError, FieldError};

/// Maximum length of display-name fields on form contracts.
pub const MAX_NAME_LENGTH: usize = 200;

/// Checks that a text field does not exceed `max` characters.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns a [`CommonError::LengthExceeded`] violation for the field.
pub fn validate_length<F: Display>(field: F, value: &str, max: usize) -> Result<(), FieldError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(FieldError {
            field: field.to_string(),
            error: CommonError::LengthExceeded { max, actual },
        });
    }
    Ok(())
}

/// Checks that a required field has a value.
///
/// # Errors
///
/// Returns a [`CommonError::RequiredFieldMissing`] violation for the field.
pub fn validate_required<F, T>(field: F, value: &Option<T>) -> Result<(), FieldError>
where
    F: Display,
{
    if value.is_none() {
        return Err(FieldError {
            field: field.to_string(),
            error: CommonError::RequiredFieldMissing,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_boundaries() {
        assert!(validate_length("name", "", MAX_NAME_LENGTH).is_ok());
        assert!(validate_length("name", &"a".repeat(200), MAX_NAME_LENGTH).is_ok());
        assert_eq!(
            validate_length("name", &"a".repeat(201), MAX_NAME_LENGTH).unwrap_err(),
            FieldError {
                field: "name".into(),
                error: CommonError::LengthExceeded {
                    max: 200,
                    actual: 201,
                },
            }
        );
    }

    #[test]
    fn length_counts_characters() {
        // 200 multibyte characters are within the limit even though the
        // UTF-8 encoding is longer.
        assert!(validate_length("name", &"ž".repeat(200), MAX_NAME_LENGTH).is_ok());
        assert!(validate_length("name", &"ž".repeat(201), MAX_NAME_LENGTH).is_err());
    }

    #[test]
    fn required_value() {
        assert!(validate_required("birthDate", &Some(42)).is_ok());
        assert_eq!(
            validate_required::<_, i32>("birthDate", &None).unwrap_err(),
            FieldError {
                field: "birthDate".into(),
                error: CommonError::RequiredFieldMissing,
            }
        );
    }
}
