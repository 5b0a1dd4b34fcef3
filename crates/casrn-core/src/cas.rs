//! # CAS Registry Number
//!
//! Defines [`CasNumber`], a validated CAS Registry Number. Instances are
//! built from an unformatted integer (`58082`) or from the hyphenated
//! notation (`"58-08-2"`), and every instance that exists has passed all
//! three checks:
//!
//! 1. **Notation** — string input must match `^\d{2,7}-\d{2}-\d$` exactly.
//!    No whitespace, no other separators, ASCII digits only.
//! 2. **Range** — the digits read as one integer lie in
//!    [`MIN_VALUE`]`..=`[`MAX_VALUE`].
//! 3. **Check digit** — the last digit equals the weighted checksum of the
//!    preceding digits (see [`crate::checksum`]).
//!
//! There are no setters. Equality, ordering and hashing all go through the
//! numeric value alone.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::checksum::{check_digit_for, split_check_digit};
use crate::error::CasError;

/// Lowest theoretical CAS Registry Number, `10-00-4`.
pub const MIN_VALUE: u64 = 10_004;

/// Highest representable CAS Registry Number, `9999999-99-5`.
pub const MAX_VALUE: u64 = 9_999_999_995;

/// Accepted digit count of the leading group.
const LEADING_DIGITS: std::ops::RangeInclusive<usize> = 2..=7;

/// A validated CAS Registry Number.
///
/// Holds the numeric value and the hyphenated text. When built from a
/// string, the text is the input exactly as given (leading zeros in the first
/// group are kept); when built from an integer, the text is derived by digit
/// grouping.
///
/// # Construction
///
/// - [`CasNumber::new()`] / `TryFrom<{integer}>` — from the unformatted value.
/// - [`CasNumber::parse()`] / [`FromStr`] / `TryFrom<&str>` — from the notation.
/// - [`CasNumber::from_json()`] / [`Deserialize`] — from a dynamically typed
///   value, rejecting anything that is neither an integer nor a string.
///
/// ```
/// use casrn_core::CasNumber;
///
/// let caffeine = CasNumber::new(58082).unwrap();
/// let theine: CasNumber = "58-08-2".parse().unwrap();
/// assert_eq!(caffeine, theine);
/// assert_eq!(caffeine.check_digit(), 2);
/// assert_eq!(format!("{caffeine:>9}"), "  58-08-2");
/// ```
#[derive(Clone)]
pub struct CasNumber {
    value: u64,
    text: String,
}

impl CasNumber {
    /// Create a CAS Registry Number from its unformatted integer value.
    ///
    /// # Errors
    ///
    /// - [`CasError::Range`] if `value` is outside [`MIN_VALUE`]`..=`[`MAX_VALUE`].
    /// - [`CasError::Checksum`] if the last digit is not the check digit.
    pub fn new(value: u64) -> Result<Self, CasError> {
        check_range(value)?;
        Self::validated(value, group_digits(value))
    }

    /// Parse a CAS Registry Number from its hyphenated notation.
    ///
    /// # Errors
    ///
    /// - [`CasError::Format`] if `s` does not match `^\d{2,7}-\d{2}-\d$`.
    /// - [`CasError::Range`] if the digits form a value below [`MIN_VALUE`].
    /// - [`CasError::Checksum`] if the last digit is not the check digit.
    pub fn parse(s: &str) -> Result<Self, CasError> {
        let value = parse_notation(s).ok_or_else(|| CasError::Format {
            input: s.to_string(),
        })?;
        check_range(value)?;
        Self::validated(value, s.to_string())
    }

    /// Build a CAS Registry Number from a JSON value.
    ///
    /// Strings go through [`CasNumber::parse()`], non-negative integers
    /// through [`CasNumber::new()`]. Floats are rejected even when they have
    /// no fractional part.
    ///
    /// # Errors
    ///
    /// - [`CasError::UnsupportedType`] for floats, booleans, null, arrays and objects.
    /// - [`CasError::Range`] for negative integers, and for integer literals
    ///   too wide for 64 bits, which `serde_json` hands over as integral floats.
    /// - Any error from [`CasNumber::parse()`] or [`CasNumber::new()`].
    pub fn from_json(value: &Value) -> Result<Self, CasError> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Self::new(u)
                } else if let Some(i) = n.as_i64() {
                    Err(CasError::Range {
                        value: i128::from(i),
                    })
                } else {
                    Err(n
                        .as_f64()
                        .map_or_else(|| unsupported(n.to_string(), "float"), float_error))
                }
            }
            Value::Null => Err(unsupported("null", "null")),
            Value::Bool(b) => Err(unsupported(b.to_string(), "boolean")),
            Value::Array(_) => Err(unsupported(value.to_string(), "array")),
            Value::Object(_) => Err(unsupported(value.to_string(), "object")),
        }
    }

    /// Final check step shared by every constructor. `value` is already range-checked.
    fn validated(value: u64, text: String) -> Result<Self, CasError> {
        let (body, found) = split_check_digit(value);
        let expected = check_digit_for(body);
        if found != expected {
            return Err(CasError::Checksum {
                cas: text,
                found,
                expected,
            });
        }
        Ok(Self { value, text })
    }

    /// The digits without separators, e.g. `58082`.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The hyphenated notation, e.g. `"58-08-2"`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The trailing check digit, e.g. `2` for `58-08-2`.
    pub fn check_digit(&self) -> u8 {
        (self.value % 10) as u8
    }

    /// Equality against a value of any type.
    ///
    /// Comparing with something that is not a `CasNumber` is an error rather
    /// than `false`.
    ///
    /// # Errors
    ///
    /// Returns [`CasError::Incomparable`] if `other` is not a `CasNumber`.
    pub fn try_eq<T: Any>(&self, other: &T) -> Result<bool, CasError> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// Ordering against a value of any type.
    ///
    /// # Errors
    ///
    /// Returns [`CasError::Incomparable`] if `other` is not a `CasNumber`.
    pub fn try_cmp<T: Any>(&self, other: &T) -> Result<Ordering, CasError> {
        let other: &dyn Any = other;
        other
            .downcast_ref::<CasNumber>()
            .map(|o| self.cmp(o))
            .ok_or(CasError::Incomparable {
                found: std::any::type_name::<T>(),
            })
    }
}

fn unsupported(input: impl Into<String>, found: &'static str) -> CasError {
    CasError::UnsupportedType {
        input: input.into(),
        found,
    }
}

/// `serde_json` stores an integer literal that overflows 64 bits as an `f64`.
/// An integral float outside the 64-bit integer range is treated as such a
/// literal and reported as out of range. Every other float is a type error.
fn float_error(v: f64) -> CasError {
    const U64_END: f64 = 18_446_744_073_709_551_616.0;
    const I64_START: f64 = -9_223_372_036_854_775_808.0;
    if v.is_finite() && v.fract() == 0.0 && (v >= U64_END || v <= I64_START) {
        // Saturating cast; the exact digits are already lost in the f64.
        CasError::Range { value: v as i128 }
    } else {
        unsupported(v.to_string(), "float")
    }
}

fn check_range(value: u64) -> Result<(), CasError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(CasError::Range {
            value: i128::from(value),
        });
    }
    Ok(())
}

/// Render `value` as `leading-middle-check`. Requires at least 5 digits.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let n = digits.len();
    format!("{}-{}-{}", &digits[..n - 3], &digits[n - 3..n - 1], &digits[n - 1..])
}

/// Match `^\d{2,7}-\d{2}-\d$` and return the concatenated digits as an integer.
fn parse_notation(s: &str) -> Option<u64> {
    let mut groups = s.split('-');
    let leading = groups.next()?;
    let middle = groups.next()?;
    let check = groups.next()?;
    if groups.next().is_some()
        || !LEADING_DIGITS.contains(&leading.len())
        || middle.len() != 2
        || check.len() != 1
    {
        return None;
    }

    // At most 10 digits, so this cannot overflow a u64.
    let mut value: u64 = 0;
    for b in leading.bytes().chain(middle.bytes()).chain(check.bytes()) {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u64::from(b - b'0');
    }
    Some(value)
}

impl PartialEq for CasNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CasNumber {}

impl PartialOrd for CasNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CasNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for CasNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for CasNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.text)
    }
}

impl std::fmt::Debug for CasNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CasNumber").field(&self.text).finish()
    }
}

impl FromStr for CasNumber {
    type Err = CasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CasNumber {
    type Error = CasError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CasNumber {
    type Error = CasError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CasNumber> for u64 {
    fn from(cas: CasNumber) -> Self {
        cas.value
    }
}

/// `TryFrom` for the primitive integer types. Negative values fail the range check.
macro_rules! impl_try_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<$ty> for CasNumber {
                type Error = CasError;

                fn try_from(n: $ty) -> Result<Self, Self::Error> {
                    let value = u64::try_from(n).map_err(|_| CasError::Range {
                        value: n as i128,
                    })?;
                    Self::new(value)
                }
            }
        )*
    };
}

impl_try_from_int!(u32, u64, usize, i32, i64, isize);

/// Human-readable formats (JSON, YAML) carry the notation as a string.
/// Compact binary formats carry the bare `u64`, so the notation of a number
/// parsed with leading zeros comes back unpadded.
impl Serialize for CasNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.text)
        } else {
            serializer.serialize_u64(self.value)
        }
    }
}

/// Self-describing human-readable formats accept either a string or an
/// integer. Binary formats are not self-describing and read the `u64` written
/// by [`Serialize`].
impl<'de> Deserialize<'de> for CasNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(CasNumberVisitor)
        } else {
            deserializer.deserialize_u64(CasNumberVisitor)
        }
    }
}

struct CasNumberVisitor;

impl<'de> Visitor<'de> for CasNumberVisitor {
    type Value = CasNumber;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a CAS Registry Number as an integer or a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        CasNumber::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        CasNumber::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        CasNumber::try_from(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::custom(float_error(v)))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Err(E::custom(unsupported(v.to_string(), "boolean")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(unsupported("null", "null")))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::checksum::check_digit_for;
    use proptest::prelude::*;

    fn append_check_digit(body: u64) -> Option<u64> {
        body.checked_mul(10)?
            .checked_add(u64::from(check_digit_for(body)))
    }

    /// Body values whose checked form lands in range.
    fn valid_value() -> impl Strategy<Value = u64> {
        (MIN_VALUE / 10..=MAX_VALUE / 10)
            .prop_filter_map("out of range", |body| {
                append_check_digit(body).filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
            })
    }

    proptest! {
        /// Integer and notation constructors agree.
        #[test]
        fn integer_string_roundtrip(value in valid_value()) {
            let from_int = CasNumber::new(value).unwrap();
            let from_str = CasNumber::parse(from_int.as_str()).unwrap();
            prop_assert_eq!(&from_int, &from_str);
            prop_assert_eq!(from_int.as_str(), from_str.as_str());
        }

        /// Stripping hyphens from the notation gives the value back.
        #[test]
        fn notation_strips_to_value(value in valid_value()) {
            let cas = CasNumber::new(value).unwrap();
            let stripped: String = cas.as_str().chars().filter(|c| *c != '-').collect();
            prop_assert_eq!(stripped.parse::<u64>().unwrap(), cas.value());
            prop_assert_eq!(u64::from(cas.check_digit()), value % 10);
        }

        /// Every wrong check digit is caught.
        #[test]
        fn wrong_digit_always_rejected(value in valid_value(), delta in 1u64..10) {
            let wrong = value - value % 10 + (value % 10 + delta) % 10;
            prop_assert!(CasNumber::new(wrong).is_err());
        }

        /// Ordering of instances matches ordering of values.
        #[test]
        fn ordering_matches_values(a in valid_value(), b in valid_value()) {
            let x = CasNumber::new(a).unwrap();
            let y = CasNumber::new(b).unwrap();
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!(x == y, a == b);
        }

        /// Arbitrary strings never panic the parser.
        #[test]
        fn parse_never_panics(s in "\\PC{0,16}") {
            let _ = CasNumber::parse(&s);
        }
    }
}
