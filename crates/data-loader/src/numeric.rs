//! Integer fields that may hold a not-a-number marker.
//!
//! Release years and box-office figures arrive as loosely typed JSON
//! (strings, integers, sometimes floats or null). They are coerced with
//! base-10 prefix parsing: `"2001 (restored)"` becomes 2001, `"unknown"`
//! becomes NaN. NaN is kept rather than replaced with zero so that it can
//! be excluded by range checks and shown as `NaN` in the table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An integer parsed from source data, or the not-a-number marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Numeric(Option<i64>);

impl Numeric {
    /// The not-a-number marker
    pub const NAN: Numeric = Numeric(None);

    pub fn new(value: i64) -> Self {
        Numeric(Some(value))
    }

    /// Parse with base-10 prefix semantics.
    ///
    /// Leading whitespace is skipped, one optional sign is accepted, then
    /// the longest run of ASCII digits is used. Anything after the digits
    /// is ignored. No digits, or a value outside `i64`, gives NaN.
    pub fn parse(s: &str) -> Self {
        Numeric(parse_int_prefix(s))
    }

    pub fn value(self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }

    /// `lower <= self <= upper`. Always false for NaN.
    pub fn within(self, lower: i64, upper: i64) -> bool {
        match self.0 {
            Some(v) => lower <= v && v <= upper,
            None => false,
        }
    }

    /// Total order used for sorting: numbers ascending, NaN after all of them.
    pub fn sort_cmp(self, other: Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::new(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("NaN"),
        }
    }
}

/// NaN serializes as `null`.
impl Serialize for Numeric {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(v) => serializer.serialize_i64(v),
            None => serializer.serialize_none(),
        }
    }
}

/// Raw shape of a numeric field in the source file.
///
/// The data file is hand-maintained, so the same column shows up as
/// `"1999"`, `1999` or `1999.0` depending on who edited it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Coerce to a [`Numeric`]. Floats truncate toward zero.
    pub fn to_numeric(&self) -> Numeric {
        match self {
            RawNumber::Integer(v) => Numeric::new(*v),
            RawNumber::Float(v) if v.is_finite() => {
                let t = v.trunc();
                if t >= i64::MIN as f64 && t < i64::MAX as f64 {
                    Numeric::new(t as i64)
                } else {
                    Numeric::NAN
                }
            }
            RawNumber::Float(_) => Numeric::NAN,
            RawNumber::Text(s) => Numeric::parse(s),
        }
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let d = (b - b'0') as i64;
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_signed() {
        assert_eq!(Numeric::parse("1995").value(), Some(1995));
        assert_eq!(Numeric::parse("  -42").value(), Some(-42));
        assert_eq!(Numeric::parse("+7").value(), Some(7));
        assert_eq!(Numeric::parse("007").value(), Some(7));
    }

    #[test]
    fn test_parse_prefix_ignores_trailing_text() {
        assert_eq!(Numeric::parse("2001 (restored)").value(), Some(2001));
        assert_eq!(Numeric::parse("12.9").value(), Some(12));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(Numeric::parse("unknown").is_nan());
        assert!(Numeric::parse("").is_nan());
        assert!(Numeric::parse("-").is_nan());
        assert!(Numeric::parse("$100").is_nan());
        assert!(Numeric::parse("99999999999999999999").is_nan());
    }

    #[test]
    fn test_raw_number_coercion() {
        let parsed: Vec<RawNumber> = serde_json::from_str(r#"[1999, "2004", 1500.7, -2.5, "n/a"]"#).unwrap();
        let values: Vec<Option<i64>> = parsed.iter().map(|r| r.to_numeric().value()).collect();
        assert_eq!(values, vec![Some(1999), Some(2004), Some(1500), Some(-2), None]);
    }

    #[test]
    fn test_within_excludes_nan() {
        assert!(Numeric::new(2000).within(1900, 2100));
        assert!(Numeric::new(1900).within(1900, 2100));
        assert!(!Numeric::new(1899).within(1900, 2100));
        assert!(!Numeric::NAN.within(i64::MIN, i64::MAX));
    }

    #[test]
    fn test_display_and_sort_order() {
        assert_eq!(Numeric::new(100).to_string(), "100");
        assert_eq!(Numeric::NAN.to_string(), "NaN");

        let mut values = vec![Numeric::NAN, Numeric::new(5), Numeric::new(-1)];
        values.sort_by(|a, b| a.sort_cmp(*b));
        assert_eq!(values, vec![Numeric::new(-1), Numeric::new(5), Numeric::NAN]);
    }
}
