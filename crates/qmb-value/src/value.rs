//! The canonical [`Value`] sum type.

use num_bigint::BigInt;
use num_rational::BigRational;

/// An immutable algebraic value.
///
/// Equality is structural and recursive, and agrees with content-address
/// equality: `equal(a, b) <=> qgid(a) == qgid(b)` (see [`crate::qgid`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Arbitrary-precision signed integer.
    Integer(BigInt),
    /// Arbitrary-precision signed rational, always carried in lowest terms
    /// with a positive denominator (guaranteed by [`BigRational`] itself).
    Rational(BigRational),
    /// Finite byte sequence.
    Bytes(Vec<u8>),
    /// Finite sequence of Unicode scalars, carried as UTF-8 bytes.
    Text(String),
    /// Ordered finite list of values; order significant, duplicates allowed.
    Sequence(Vec<Value>),
    /// A discriminated constructor: a (label, payload) pair.
    Tag(Box<Value>, Box<Value>),
    /// A boolean.
    Boolean(bool),
    /// The nil/empty value.
    Unit,
}

impl Value {
    /// Build an `Integer` from anything convertible to [`BigInt`].
    pub fn int(v: impl Into<BigInt>) -> Self {
        Value::Integer(v.into())
    }

    /// Build a `Rational` from anything convertible to [`BigRational`].
    pub fn rational(v: impl Into<BigRational>) -> Self {
        Value::Rational(v.into())
    }

    /// Build a `Bytes` value.
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(v.into())
    }

    /// Build a `Text` value.
    pub fn text(v: impl Into<String>) -> Self {
        Value::Text(v.into())
    }

    /// Build a `Sequence` value.
    pub fn sequence(v: impl Into<Vec<Value>>) -> Self {
        Value::Sequence(v.into())
    }

    /// Build a `Tag` value from a label and payload.
    pub fn tag(label: Value, payload: Value) -> Self {
        Value::Tag(Box::new(label), Box::new(payload))
    }

    /// Build a `Tag` whose label is a [`Value::Text`], a common shape in
    /// this crate (`"matrix"`, `"qi"`, `"object"`, `"circuit"`, ...).
    pub fn tagged(label: impl Into<String>, payload: Value) -> Self {
        Value::tag(Value::text(label), payload)
    }

    /// Build a `Boolean` value.
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// The `Unit` value.
    pub fn unit() -> Self {
        Value::Unit
    }

    /// If this is a `Tag(Text(label), payload)` with the given label,
    /// return the payload.
    pub fn as_tagged(&self, label: &str) -> Option<&Value> {
        match self {
            Value::Tag(l, p) => match l.as_ref() {
                Value::Text(s) if s == label => Some(p),
                _ => None,
            },
            _ => None,
        }
    }

    /// If this is a `Sequence`, return its elements.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// If this is an `Integer`, return it.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// If this is a `Rational`, return it.
    pub fn as_rational(&self) -> Option<&BigRational> {
        match self {
            Value::Rational(r) => Some(r),
            _ => None,
        }
    }
}
