//! [`Value`] — the closed value model for DBOR conformance level 2.

/// Smallest integer representable at conformance level 2 (−2⁶³).
pub const INTEGER_MIN: i128 = -(1i128 << 63);

/// Largest integer representable at conformance level 2 (2⁶⁴ − 1).
pub const INTEGER_MAX: i128 = u64::MAX as i128;

/// A DBOR conformance level 2 value.
///
/// The value model is a tree: sequences own their elements exclusively and
/// cycles cannot be expressed. Values are immutable once constructed; the
/// encoder never mutates its input and the decoder builds each node exactly
/// once.
///
/// `Integer` carries an `i128` so the full asymmetric range
/// `[−2⁶³, 2⁶⁴−1]` fits in a single variant. The range is enforced at
/// encode time; out-of-range integers fail with
/// [`DborError::Range`](crate::DborError::Range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The absent value (DBOR `NoneValue`).
    None,
    /// Integer in `[−2⁶³, 2⁶⁴−1]`.
    Integer(i128),
    /// Byte string of arbitrary octets.
    Bytes(Vec<u8>),
    /// Well-formed UTF-8 text.
    Str(String),
    /// Ordered, nestable container; insertion order is preserved.
    Sequence(Vec<Value>),
}

impl Value {
    /// Returns `true` if an integer value lies inside the conformance
    /// level 2 range.
    #[inline]
    pub fn integer_in_range(v: i128) -> bool {
        (INTEGER_MIN..=INTEGER_MAX).contains(&v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v as i128)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Integer(v as i128)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i128)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v as i128)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}
