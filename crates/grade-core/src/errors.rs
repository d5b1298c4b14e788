//! Cross-cutting error types for the gradebook.
//!
//! Storage-specific errors (`DatabaseError`) live in `grade-db`; configuration
//! errors live in `grade-config`. The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors raised by the domain checks shared across gradebook crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value violates a domain constraint (negative weight, non-finite grade).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Reject weights that would corrupt a weighted average.
///
/// ECTS and coefficients must be finite and non-negative.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` when `value` is negative,
/// NaN, or infinite.
pub fn check_weight(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Reject grades that are NaN or infinite.
///
/// # Errors
///
/// Returns `CoreError::Validation` when `value` is not finite.
pub fn check_grade(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "grade must be a finite number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_accept_zero_and_positive() {
        assert!(check_weight("ects", 0.0).is_ok());
        assert!(check_weight("ects", 6.5).is_ok());
    }

    #[test]
    fn weights_reject_negative_and_nan() {
        assert!(check_weight("coefficient", -1.0).is_err());
        assert!(check_weight("coefficient", f64::NAN).is_err());
        assert!(check_weight("coefficient", f64::INFINITY).is_err());
    }

    #[test]
    fn grades_reject_non_finite() {
        assert!(check_grade(-2.0).is_ok());
        assert!(check_grade(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn validation_message_names_field() {
        let err = check_weight("ects", -3.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: ects must be a finite non-negative number, got -3"
        );
    }
}
