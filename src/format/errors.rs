// ============================================================================
// Format Errors
// Error types for N(m,k) rule configuration
// ============================================================================

use std::fmt;

/// Errors raised when constructing a number format rule.
///
/// Validation itself never errors: a non-conforming input is an expected
/// outcome and is reported as `false` by `NumberFormat::is_valid`. Only a
/// structurally invalid rule configuration reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Precision was zero or negative
    InvalidPrecision { precision: i32 },
    /// Scale was negative or not strictly less than precision
    InvalidScale { scale: i32, precision: i32 },
    /// An N(m,k) notation string could not be read
    InvalidNotation,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidPrecision { precision } => {
                write!(f, "precision must be a positive number, got {}", precision)
            },
            FormatError::InvalidScale { scale, precision } => write!(
                f,
                "scale must be non-negative and less than precision, got scale {} for precision {}",
                scale, precision
            ),
            FormatError::InvalidNotation => {
                write!(f, "invalid notation: expected N(m) or N(m,k)")
            },
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for rule construction
pub type FormatResult<T> = Result<T, FormatError>;
