//! The block-algebra object (type) model: `Object = [n_1, ..., n_k]`
//! represents ⊕_i M_{n_i}(ℂ).

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use qmb_value::Value;

use crate::error::{IrError, IrResult};

const OBJECT_LABEL: &str = "object";

/// An ordered list of positive block sizes. The empty list is the unit
/// object `I` (dimension 1), matching the `QubitId`/`ClbitId` newtype idiom
/// in the teacher workspace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Object(Vec<u32>);

impl Object {
    /// Build an object from block sizes. Fails with
    /// [`IrError::ZeroBlockSize`] if any block is zero.
    pub fn new(blocks: Vec<u32>) -> IrResult<Self> {
        if blocks.iter().any(|&b| b == 0) {
            return Err(IrError::ZeroBlockSize);
        }
        Ok(Object(blocks))
    }

    /// The unit object `I` (empty block list, dimension 1).
    pub fn unit() -> Self {
        Object(Vec::new())
    }

    /// This object's block sizes.
    pub fn blocks(&self) -> &[u32] {
        &self.0
    }

    /// Total matrix dimension: `Σ n_i^2`, 1 for the empty list.
    pub fn dimension(&self) -> u64 {
        if self.0.is_empty() {
            1
        } else {
            self.0.iter().map(|&n| u64::from(n) * u64::from(n)).sum()
        }
    }

    /// Encode as `Tag("object", Sequence[Int b_1, ..., Int b_k])`.
    pub fn to_value(&self) -> Value {
        Value::tagged(
            OBJECT_LABEL,
            Value::sequence(self.0.iter().map(|&b| Value::int(BigInt::from(b))).collect()),
        )
    }

    /// Decode from the canonical `Value` shape.
    pub fn from_value(v: &Value) -> IrResult<Self> {
        let payload = v.as_tagged(OBJECT_LABEL).ok_or_else(|| IrError::MalformedValue {
            kind: "object",
            detail: format!("expected Tag(\"{OBJECT_LABEL}\", _)"),
        })?;
        let items = payload.as_sequence().ok_or_else(|| IrError::MalformedValue {
            kind: "object",
            detail: "payload is not a Sequence".into(),
        })?;
        let blocks = items
            .iter()
            .map(|item| {
                let i = item.as_integer().ok_or_else(|| IrError::MalformedValue {
                    kind: "object",
                    detail: "block size is not an Integer".into(),
                })?;
                i.to_u32().ok_or_else(|| IrError::MalformedValue {
                    kind: "object",
                    detail: format!("block size {i} out of u32 range"),
                })
            })
            .collect::<IrResult<Vec<u32>>>()?;
        Object::new(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_object_has_dimension_one() {
        assert_eq!(Object::unit().dimension(), 1);
    }

    #[test]
    fn single_block_dimension_is_n_squared() {
        // "Object{Blocks: [2]} has dimension 4" (spec.md §8 boundary conditions)
        let o = Object::new(vec![2]).unwrap();
        assert_eq!(o.dimension(), 4);
    }

    #[test]
    fn multi_block_dimension_sums_squares() {
        let o = Object::new(vec![2, 3]).unwrap();
        assert_eq!(o.dimension(), 4 + 9);
    }

    #[test]
    fn zero_block_size_is_rejected() {
        assert!(matches!(Object::new(vec![2, 0]), Err(IrError::ZeroBlockSize)));
    }

    #[test]
    fn round_trip_through_value() {
        let o = Object::new(vec![2, 3, 1]).unwrap();
        let v = o.to_value();
        assert_eq!(Object::from_value(&v).unwrap(), o);
    }
}
