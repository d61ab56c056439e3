// ============================================================================
// Decimal Text Decomposition
// Splits candidate text into sign, integer digits and fractional digits
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Leading sign of a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    /// No sign character present
    None,
    /// Leading `+`
    Plus,
    /// Leading `-`
    Minus,
}

impl Sign {
    /// Number of characters the sign occupies in the source text (0 or 1).
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Sign::None => 0,
            Sign::Plus | Sign::Minus => 1,
        }
    }

    /// Check if the sign is a minus.
    #[inline]
    pub const fn is_minus(self) -> bool {
        matches!(self, Sign::Minus)
    }
}

/// A decimal string split into its components.
///
/// Borrows from the input; produced per validation call and never stored.
/// `integer` is always at least one digit, `fraction` is empty when the
/// input had no separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposedNumber<'a> {
    pub sign: Sign,
    pub integer: &'a str,
    pub fraction: &'a str,
}

impl DecomposedNumber<'_> {
    /// Significant length: sign character count plus integer digit count.
    ///
    /// The fractional separator is never counted.
    #[inline]
    pub fn significant_len(&self) -> usize {
        self.sign.len() + self.integer.len()
    }

    /// Number of fractional digits (0 when no fractional part matched).
    #[inline]
    pub fn fraction_len(&self) -> usize {
        self.fraction.len()
    }
}

/// Decompose a string into `(sign, integer digits, fraction digits)`.
///
/// The whole input must match; there is no partial match. Grammar:
/// an optional `+` or `-`, one or more ASCII digits, then optionally a
/// `.` or `,` separator followed by one or more ASCII digits. The
/// separator group is all-or-nothing: a trailing separator with no
/// digits after it fails the match.
///
/// Returns `None` for anything else: empty input, a lone sign, exponent
/// notation, grouping punctuation, a second separator, or any non-ASCII
/// digit character.
///
/// # Examples
/// - `"-12.34"` -> sign `Minus`, integer `"12"`, fraction `"34"`
/// - `"7"` -> sign `None`, integer `"7"`, fraction `""`
/// - `"1."` -> `None`
pub fn decompose(value: &str) -> Option<DecomposedNumber<'_>> {
    let (sign, rest) = match value.as_bytes().first() {
        Some(b'+') => (Sign::Plus, &value[1..]),
        Some(b'-') => (Sign::Minus, &value[1..]),
        _ => (Sign::None, value),
    };

    // Integer part is mandatory
    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 {
        return None;
    }
    let integer = &rest[..int_len];
    let tail = &rest[int_len..];

    if tail.is_empty() {
        return Some(DecomposedNumber {
            sign,
            integer,
            fraction: "",
        });
    }

    // Anything after the integer digits must be a separator plus digits
    let fraction = match tail.as_bytes()[0] {
        b'.' | b',' => &tail[1..],
        _ => return None,
    };
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(DecomposedNumber {
        sign,
        integer,
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_plain_integer() {
        let parts = decompose("42").unwrap();
        assert_eq!(parts.sign, Sign::None);
        assert_eq!(parts.integer, "42");
        assert_eq!(parts.fraction, "");
        assert_eq!(parts.significant_len(), 2);
        assert_eq!(parts.fraction_len(), 0);
    }

    #[test]
    fn test_signed_decimal() {
        let parts = decompose("-12.34").unwrap();
        assert_eq!(parts.sign, Sign::Minus);
        assert_eq!(parts.integer, "12");
        assert_eq!(parts.fraction, "34");
        assert_eq!(parts.significant_len(), 3);
        assert_eq!(parts.fraction_len(), 2);

        let parts = decompose("+0.5").unwrap();
        assert_eq!(parts.sign, Sign::Plus);
        assert_eq!(parts.significant_len(), 2);
    }

    #[test]
    fn test_comma_separator() {
        let dot = decompose("1.23").unwrap();
        let comma = decompose("1,23").unwrap();
        assert_eq!(dot, comma);
    }

    #[test]
    fn test_empty_and_sign_only() {
        assert_eq!(decompose(""), None);
        assert_eq!(decompose("+"), None);
        assert_eq!(decompose("-"), None);
    }

    #[test]
    fn test_trailing_separator_rejected() {
        // Separator with no digits after it fails the whole match
        assert_eq!(decompose("1."), None);
        assert_eq!(decompose("1,"), None);
        assert_eq!(decompose("-1."), None);
    }

    #[test]
    fn test_missing_integer_part_rejected() {
        assert_eq!(decompose(".5"), None);
        assert_eq!(decompose("-.5"), None);
        assert_eq!(decompose(","), None);
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(decompose("a.sd"), None);
        assert_eq!(decompose("1e5"), None);
        assert_eq!(decompose("1.2.3"), None);
        assert_eq!(decompose("1 000"), None);
        assert_eq!(decompose("12-"), None);
        assert_eq!(decompose("--1"), None);
        assert_eq!(decompose("+-1"), None);
    }

    #[test]
    fn test_unicode_digits_rejected() {
        // Only ASCII digits qualify
        assert_eq!(decompose("١٢٣"), None);
        assert_eq!(decompose("1.٢"), None);
    }

    quickcheck! {
        fn unsigned_integers_always_decompose(n: u64) -> bool {
            let text = n.to_string();
            match decompose(&text) {
                Some(parts) => {
                    parts.sign == Sign::None
                        && parts.integer == text
                        && parts.fraction.is_empty()
                }
                None => false,
            }
        }

        fn fraction_pairs_always_decompose(int_part: u32, frac_part: u16) -> bool {
            let text = format!("{}.{}", int_part, frac_part);
            match decompose(&text) {
                Some(parts) => {
                    parts.significant_len() == int_part.to_string().len()
                        && parts.fraction_len() == frac_part.to_string().len()
                }
                None => false,
            }
        }

        fn arbitrary_text_never_panics(value: String) -> bool {
            let _ = decompose(&value);
            true
        }
    }
}
