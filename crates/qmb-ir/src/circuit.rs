//! Circuit records and their canonical `Value` encoding.

use qmb_value::{Qgid, Value};

use crate::error::{IrError, IrResult};
use crate::object::Object;
use crate::primitive::PrimitiveTag;

const CIRCUIT_LABEL: &str = "circuit";

/// A single typed morphism node: `(domain, codomain, prim, data, children)`.
///
/// `data` holds primitive-specific auxiliary information (e.g. a matrix
/// value for `Unitary`/`Choi`/`Prepare`, a rational for `Scale`). `children`
/// references other circuits by [`Qgid`]; the referenced circuits live in
/// the [`crate::Store`] (`spec.md` §3).
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    pub domain: Object,
    pub codomain: Object,
    pub prim: PrimitiveTag,
    pub data: Value,
    pub children: Vec<Qgid>,
}

impl Circuit {
    pub fn new(
        domain: Object,
        codomain: Object,
        prim: PrimitiveTag,
        data: Value,
        children: Vec<Qgid>,
    ) -> Self {
        Self {
            domain,
            codomain,
            prim,
            data,
            children,
        }
    }

    /// Encode as `Tag("circuit", Sequence[ObjectValue, ObjectValue,
    /// Int(prim_ordinal), data_value, Sequence(Bytes children)])`
    /// (`spec.md` §6).
    pub fn to_value(&self) -> Value {
        Value::tagged(
            CIRCUIT_LABEL,
            Value::sequence(vec![
                self.domain.to_value(),
                self.codomain.to_value(),
                Value::int(i64::from(self.prim.ordinal())),
                self.data.clone(),
                Value::sequence(
                    self.children
                        .iter()
                        .map(|id| Value::bytes(id.as_bytes().to_vec()))
                        .collect(),
                ),
            ]),
        )
    }

    /// Decode from the canonical `Value` shape. Reversible inverse of
    /// [`Circuit::to_value`] (circuit round-trip, `spec.md` §8.4).
    pub fn from_value(v: &Value) -> IrResult<Self> {
        let payload = v.as_tagged(CIRCUIT_LABEL).ok_or_else(|| IrError::MalformedValue {
            kind: "circuit",
            detail: format!("expected Tag(\"{CIRCUIT_LABEL}\", _)"),
        })?;
        let parts = payload.as_sequence().ok_or_else(|| IrError::MalformedValue {
            kind: "circuit",
            detail: "payload is not a Sequence".into(),
        })?;
        let [domain, codomain, prim, data, children] = parts else {
            return Err(IrError::MalformedValue {
                kind: "circuit",
                detail: format!("payload has {} elements, expected 5", parts.len()),
            });
        };
        let domain = Object::from_value(domain)?;
        let codomain = Object::from_value(codomain)?;
        let prim_ordinal = prim
            .as_integer()
            .and_then(num_traits::ToPrimitive::to_u8)
            .ok_or_else(|| IrError::MalformedValue {
                kind: "circuit",
                detail: "prim is not a u8-range Integer".into(),
            })?;
        let prim = PrimitiveTag::try_from(prim_ordinal)?;
        let children = children
            .as_sequence()
            .ok_or_else(|| IrError::MalformedValue {
                kind: "circuit",
                detail: "children is not a Sequence".into(),
            })?
            .iter()
            .map(|v| match v {
                Value::Bytes(b) => {
                    Qgid::from_slice(b).map_err(IrError::Value)
                }
                _ => Err(IrError::MalformedValue {
                    kind: "circuit",
                    detail: "child reference is not Bytes".into(),
                }),
            })
            .collect::<IrResult<Vec<_>>>()?;
        Ok(Circuit::new(domain, codomain, prim, data.clone(), children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_value() {
        let c = Circuit::new(
            Object::new(vec![2]).unwrap(),
            Object::new(vec![2]).unwrap(),
            PrimitiveTag::Id,
            Value::unit(),
            vec![],
        );
        let v = c.to_value();
        assert_eq!(Circuit::from_value(&v).unwrap(), c);
    }

    #[test]
    fn round_trip_with_children_and_data() {
        let child_id = Qgid::from_bytes([7u8; 32]);
        let c = Circuit::new(
            Object::new(vec![2]).unwrap(),
            Object::new(vec![2]).unwrap(),
            PrimitiveTag::Scale,
            Value::rational(num_rational::BigRational::new(1.into(), 2.into())),
            vec![child_id],
        );
        let v = c.to_value();
        let back = Circuit::from_value(&v).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.children, vec![child_id]);
    }
}
