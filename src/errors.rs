// ============================================================================
// Decimal Errors
// Error types for scaled decimal conversion and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during scaled decimal operations.
///
/// Every variant is a deterministic validation failure on malformed input or
/// an undefined mathematical operation. None are transient or retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Parse input has more fractional digits than the declared precision
    FractionalComponentExceedsDecimals,
    /// A target or output decimal count is negative
    NegativePower,
    /// Divisor's numeric value is zero
    DivisionByZero,
    /// Input string could not be parsed as a base-10 decimal
    InvalidInput,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::FractionalComponentExceedsDecimals => {
                write!(f, "fractional component exceeds decimals")
            },
            DecimalError::NegativePower => {
                write!(f, "negative power: decimal count must be non-negative")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::InvalidInput => {
                write!(f, "invalid input: could not parse decimal string")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
