// Numeric input validation shared by the estimators
use crate::error::EstimateError;

/// Validates a benchmark score: finite and on the 0-100 scale
pub(crate) fn ensure_score(name: &str, value: f64) -> Result<(), EstimateError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(EstimateError::InvalidInput(format!(
            "{} must be a finite number between 0 and 100 (got {})",
            name, value
        )));
    }
    Ok(())
}

/// Validates a wattage or projection figure: finite and non-negative
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), EstimateError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EstimateError::InvalidInput(format!(
            "{} must be a finite non-negative number (got {})",
            name, value
        )));
    }
    Ok(())
}
