// ============================================================================
// Number Format Library
// N(m,k) conformance checking for numeric fields in interchange records
// ============================================================================

//! # Number Format
//!
//! Validation of decimal text against fixed `N(m,k)` format rules.
//!
//! Interchange formats for regulatory and tax-style documents describe
//! numeric fields as `N(m,k)`: at most `m` significant characters in the
//! value (the sign plus every digit, the decimal separator excluded), of
//! which at most `k` may be fractional digits. This crate answers the
//! yes/no question "does this string fit that field" without ever
//! parsing the string into a number.
//!
//! ## Features
//!
//! - **Immutable rules** validated once at construction
//! - **Explicit decomposition** into sign, integer and fraction (no
//!   pattern-matching engine)
//! - **Interchangeable separators**: `.` and `,` both accepted
//! - **`N(m,k)` notation** parsing and display
//! - **Thread-safe by construction**: rules are `Copy` and carry no state
//!
//! ## Example
//!
//! ```rust
//! use number_format::prelude::*;
//!
//! // Amount field: at most 17 characters, 2 of them fractional, no minus
//! let rule = NumberFormat::new(17, 2, true)?;
//!
//! assert!(rule.is_valid("0.0"));
//! assert!(rule.is_valid("1,23"));      // comma separator accepted
//! assert!(!rule.is_valid("0.000"));    // three fractional digits
//! assert!(!rule.is_valid("-1.23"));    // negative
//! assert!(!rule.is_valid("1e2"));      // not a plain decimal
//!
//! // Rules can also be read from interchange notation
//! let parsed: NumberFormat = "N(4,2)".parse()?;
//! assert!(parsed.is_valid("+1.23"));
//! # Ok::<(), number_format::format::FormatError>(())
//! ```

pub mod format;

// Re-exports for convenience
pub mod prelude {
    pub use crate::format::{
        decompose, DecomposedNumber, FormatError, FormatResult, NumberFormat, Sign,
    };
}
