// ============================================================================
// Format Module
// N(m,k) decimal format rules and conformance checking
// ============================================================================
//
// This module provides:
// - NumberFormat: immutable N(m,k) rule with a single is_valid predicate
// - decompose/DecomposedNumber: sign | integer | fraction splitting
// - FormatError: construction-time configuration errors
//
// Design principles:
// - Conformance is a yes/no answer; values are never parsed into numbers
// - Rules are validated once at construction, immutable afterwards
// - Explicit scanning decomposition, no pattern-matching engine

mod decompose;
mod errors;
mod validator;

pub use decompose::{decompose, DecomposedNumber, Sign};
pub use errors::{FormatError, FormatResult};
pub use validator::NumberFormat;
