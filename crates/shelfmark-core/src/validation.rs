//! Validation utilities.

use crate::{FieldError, ShelfmarkError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ShelfmarkError` on failure.
    fn validate_request(&self) -> Result<(), ShelfmarkError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `ShelfmarkError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> ShelfmarkError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    ShelfmarkError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates an ISBN-10 or ISBN-13: optional 978/979 prefix, nine
    /// digits, and a final digit or X check character.
    pub fn valid_isbn(isbn: &str) -> Result<(), ValidationError> {
        if !isbn.is_ascii() {
            return Err(ValidationError::new("isbn_invalid_characters"));
        }
        let digits: &str = match isbn.len() {
            10 => isbn,
            13 if isbn.starts_with("978") || isbn.starts_with("979") => &isbn[3..],
            _ => return Err(ValidationError::new("isbn_invalid_length")),
        };

        let (body, check) = digits.split_at(9);
        if !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new("isbn_invalid_characters"));
        }
        if !check.chars().all(|c| c.is_ascii_digit() || c == 'X') {
            return Err(ValidationError::new("isbn_invalid_check_character"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_valid_isbn() {
        assert!(valid_isbn("9780441013593").is_ok());
        assert!(valid_isbn("044101359X").is_ok());
        assert!(valid_isbn("0441013593").is_ok());
        assert!(valid_isbn("12345").is_err());
        assert!(valid_isbn("978044101359Y").is_err());
        assert!(valid_isbn("97804410135AB").is_err());
    }

    #[test]
    fn test_valid_isbn_rejects_non_ascii() {
        // 13 bytes, "978" prefix, multi-byte tail
        assert!(valid_isbn("978ééééé").is_err());
        // 10 bytes, all multi-byte
        assert!(valid_isbn("ééééé").is_err());
    }
}
