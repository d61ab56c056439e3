// ============================================================================
// Number Format Rule
// Immutable N(m,k) rule with a single conformance predicate
// ============================================================================

use super::decompose::decompose;
use super::errors::{FormatError, FormatResult};
use std::fmt;
use std::str::FromStr;

/// An immutable N(m,k) number format rule.
///
/// `N(m,k)` is the notation used by document interchange formats for
/// numeric fields: `m` is the maximum count of significant characters in
/// the value (the sign, if any, plus every integer and fractional digit,
/// the decimal separator excluded), and `k` is the maximum count of
/// fractional digits. `N(m)` is shorthand for `k = 0`.
///
/// The rule is validated once at construction and never changes
/// afterwards. It is `Copy`, `Send` and `Sync`; calling
/// [`is_valid`](Self::is_valid) concurrently requires no coordination.
///
/// # Example
/// ```
/// use number_format::format::NumberFormat;
///
/// let rule = NumberFormat::new(17, 2, true)?;
/// assert!(rule.is_valid("1234.56"));
/// assert!(!rule.is_valid("0.005"));
/// assert!(!rule.is_valid("-1"));
/// # Ok::<(), number_format::format::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberFormat {
    precision: u32,
    scale: u32,
    only_positive: bool,
}

impl NumberFormat {
    /// Create a rule from precision, scale and sign policy.
    ///
    /// # Arguments
    /// - `precision`: maximum significant characters (sign + all digits), > 0
    /// - `scale`: maximum fractional digits, in `0..precision`
    /// - `only_positive`: when true, values with a leading minus are rejected
    ///
    /// # Errors
    /// - `InvalidPrecision` when `precision <= 0`
    /// - `InvalidScale` when `scale < 0` or `scale >= precision`
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> FormatResult<Self> {
        if precision <= 0 {
            return Err(FormatError::InvalidPrecision { precision });
        }
        if scale < 0 || scale >= precision {
            return Err(FormatError::InvalidScale { scale, precision });
        }
        tracing::debug!(
            "number format rule created: precision {}, scale {}, only_positive {}",
            precision,
            scale,
            only_positive
        );
        Ok(Self {
            precision: precision as u32,
            scale: scale as u32,
            only_positive,
        })
    }

    /// Maximum count of significant characters.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Maximum count of fractional digits.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Whether values with a leading minus are rejected.
    #[inline]
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// Check whether `value` conforms to this rule.
    ///
    /// The value must be a plain decimal: an optional `+` or `-`, one or
    /// more digits, then optionally a `.` or `,` separator followed by
    /// one or more digits. Both separators are accepted interchangeably
    /// and neither counts toward any length.
    ///
    /// Non-conformance is an expected outcome and is reported as `false`,
    /// never as an error. The call is pure: it has no side effects beyond
    /// trace logging and repeated calls always agree.
    pub fn is_valid(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        let Some(parts) = decompose(value) else {
            tracing::trace!("{:?} rejected by {}: not a plain decimal", value, self);
            return false;
        };

        let significant = parts.significant_len();
        let fraction = parts.fraction_len();

        if significant + fraction > self.precision as usize {
            tracing::trace!(
                "{:?} rejected by {}: {} significant characters",
                value,
                self,
                significant + fraction
            );
            return false;
        }
        if fraction > self.scale as usize {
            tracing::trace!(
                "{:?} rejected by {}: {} fractional digits",
                value,
                self,
                fraction
            );
            return false;
        }
        if self.only_positive && parts.sign.is_minus() {
            tracing::trace!("{:?} rejected by {}: negative value", value, self);
            return false;
        }

        true
    }
}

// ============================================================================
// Preset Rules (Factory Methods)
// ============================================================================

impl NumberFormat {
    /// Monetary amount field: `N(17,2)`, non-negative.
    ///
    /// The common format for amount fields in interchange records.
    pub fn amount() -> Self {
        Self {
            precision: 17,
            scale: 2,
            only_positive: true,
        }
    }

    /// Signed monetary amount: `N(17,2)` allowing a minus.
    ///
    /// Used for correction records where negative amounts are legal.
    pub fn signed_amount() -> Self {
        Self {
            precision: 17,
            scale: 2,
            only_positive: false,
        }
    }

    /// Tax or interest rate field: `N(5,4)`, non-negative.
    pub fn rate() -> Self {
        Self {
            precision: 5,
            scale: 4,
            only_positive: true,
        }
    }

    /// Whole-number field: `N(m)`, non-negative.
    ///
    /// For counts and document sequence numbers.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` when `precision <= 0`.
    pub fn integer(precision: i32) -> FormatResult<Self> {
        Self::new(precision, 0, true)
    }
}

// ============================================================================
// N(m,k) Notation
// ============================================================================

impl fmt::Display for NumberFormat {
    /// Render the rule in interchange notation: `N(m,k)`, or `N(m)` when
    /// the scale is zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}

impl FromStr for NumberFormat {
    type Err = FormatError;

    /// Parse interchange notation.
    ///
    /// Accepts `N(m)` and `N(m,k)` with a case-insensitive leading `N`.
    /// The notation carries no sign policy, so parsed rules allow signed
    /// values.
    ///
    /// # Examples
    /// - "N(17,2)" -> precision 17, scale 2
    /// - "n(5)" -> precision 5, scale 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s
            .strip_prefix('N')
            .or_else(|| s.strip_prefix('n'))
            .ok_or(FormatError::InvalidNotation)?;
        let inner = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or(FormatError::InvalidNotation)?;

        let (m, k) = match inner.split_once(',') {
            Some((m, k)) => (m, Some(k)),
            None => (inner, None),
        };

        let precision: i32 = m.trim().parse().map_err(|_| FormatError::InvalidNotation)?;
        let scale: i32 = match k {
            Some(k) => k.trim().parse().map_err(|_| FormatError::InvalidNotation)?,
            None => 0,
        };

        Self::new(precision, scale, false)
    }
}

// ============================================================================
// Deserialization (routed through the checked constructor)
// ============================================================================

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NumberFormat {
    /// Deserialize a rule from its field representation.
    ///
    /// Goes through [`NumberFormat::new`], so a rule read from a
    /// configuration file can never violate the construction invariant.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            precision: i32,
            #[serde(default)]
            scale: i32,
            #[serde(default)]
            only_positive: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        NumberFormat::new(raw.precision, raw.scale, raw.only_positive)
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
