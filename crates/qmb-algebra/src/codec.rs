//! Matrix <-> [`Value`] codec.
//!
//! A matrix is the sole channel for carrying matrices through circuit `data`
//! fields (`SPEC_FULL.md` §4.3): `Tag("matrix", Sequence[Int rows, Int cols,
//! Sequence(entries)])`, each entry `Tag("qi", Sequence[Rat re, Rat im])`.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use qmb_value::Value;

use crate::error::{AlgebraError, AlgebraResult};
use crate::gaussian::GaussianRational;
use crate::matrix::Matrix;

const MATRIX_LABEL: &str = "matrix";
const QI_LABEL: &str = "qi";

/// Encode a Gaussian rational as `Tag("qi", Sequence[Rat re, Rat im])`.
pub fn qi_to_value(q: &GaussianRational) -> Value {
    Value::tagged(
        QI_LABEL,
        Value::sequence(vec![
            Value::Rational(q.re.clone()),
            Value::Rational(q.im.clone()),
        ]),
    )
}

/// Decode a Gaussian rational from its canonical `Value` shape.
pub fn qi_from_value(v: &Value) -> AlgebraResult<GaussianRational> {
    let payload = v
        .as_tagged(QI_LABEL)
        .ok_or_else(|| AlgebraError::MalformedValue(format!("expected Tag(\"{QI_LABEL}\", _)")))?;
    let parts = payload
        .as_sequence()
        .ok_or_else(|| AlgebraError::MalformedValue("qi payload is not a Sequence".into()))?;
    let [re, im] = parts else {
        return Err(AlgebraError::MalformedValue(format!(
            "qi payload has {} elements, expected 2",
            parts.len()
        )));
    };
    let re = re
        .as_rational()
        .ok_or_else(|| AlgebraError::MalformedValue("qi.re is not a Rational".into()))?
        .clone();
    let im = im
        .as_rational()
        .ok_or_else(|| AlgebraError::MalformedValue("qi.im is not a Rational".into()))?
        .clone();
    Ok(GaussianRational::new(re, im))
}

/// Encode a matrix as `Tag("matrix", Sequence[Int rows, Int cols,
/// Sequence(entries)])`.
pub fn matrix_to_value(m: &Matrix) -> Value {
    let entries = m.entries().iter().map(qi_to_value).collect::<Vec<_>>();
    Value::tagged(
        MATRIX_LABEL,
        Value::sequence(vec![
            Value::int(BigInt::from(m.rows() as u64)),
            Value::int(BigInt::from(m.cols() as u64)),
            Value::sequence(entries),
        ]),
    )
}

/// Decode a matrix from its canonical `Value` shape. Reversible inverse of
/// [`matrix_to_value`] (round-trip is a tested invariant, `spec.md` §8.3).
pub fn matrix_from_value(v: &Value) -> AlgebraResult<Matrix> {
    let payload = v.as_tagged(MATRIX_LABEL).ok_or_else(|| {
        AlgebraError::MalformedValue(format!("expected Tag(\"{MATRIX_LABEL}\", _)"))
    })?;
    let parts = payload
        .as_sequence()
        .ok_or_else(|| AlgebraError::MalformedValue("matrix payload is not a Sequence".into()))?;
    let [rows, cols, entries] = parts else {
        return Err(AlgebraError::MalformedValue(format!(
            "matrix payload has {} elements, expected 3",
            parts.len()
        )));
    };
    let rows = as_usize(rows)?;
    let cols = as_usize(cols)?;
    let entries = entries
        .as_sequence()
        .ok_or_else(|| AlgebraError::MalformedValue("matrix entries is not a Sequence".into()))?;
    if entries.len() != rows * cols {
        return Err(AlgebraError::MalformedValue(format!(
            "matrix declares {rows}x{cols} ({} entries) but has {} entries",
            rows * cols,
            entries.len()
        )));
    }
    let data = entries.iter().map(qi_from_value).collect::<AlgebraResult<Vec<_>>>()?;
    Ok(Matrix::from_row_major(rows, cols, data))
}

fn as_usize(v: &Value) -> AlgebraResult<usize> {
    let i = v
        .as_integer()
        .ok_or_else(|| AlgebraError::MalformedValue("expected an Integer".into()))?;
    i.to_usize()
        .ok_or_else(|| AlgebraError::MalformedValue(format!("integer {i} out of usize range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_round_trip() {
        let mut m = Matrix::zero(2, 2);
        m.set(0, 0, GaussianRational::from_ints(1, 2));
        m.set(1, 1, GaussianRational::from_ints(-3, 4));
        let v = matrix_to_value(&m);
        let back = matrix_from_value(&v).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn identity_round_trip() {
        let id = Matrix::identity(4);
        let v = matrix_to_value(&id);
        assert_eq!(matrix_from_value(&v).unwrap(), id);
    }

    #[test]
    fn malformed_value_is_rejected() {
        assert!(matrix_from_value(&Value::unit()).is_err());
        assert!(matrix_from_value(&Value::tagged("matrix", Value::int(0))).is_err());
    }
}
