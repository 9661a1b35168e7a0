//! Inverse of [`crate::encode`]: parse a canonical value encoding back into
//! a [`Value`].
//!
//! `spec.md` frames decoding as not strictly required by the value layer
//! (the store is usually populated from an externally assembled blob), but
//! the container loader still needs *some* component that can turn store
//! bytes back into values without knowing about discriminator bytes or
//! varints — that component belongs here, at the crate boundary the spec
//! itself draws. See `SPEC_FULL.md` §4.1.

use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;

use crate::error::ValueError;
use crate::value::Value;

/// Decode one value from the front of `bytes`, returning the value and the
/// number of bytes it consumed. Any trailing bytes are left for the caller
/// (e.g. to decode the next value in a back-to-back sequence).
pub fn decode(bytes: &[u8]) -> Result<(Value, usize), ValueError> {
    let disc = read_u8(bytes, 0)?;
    match disc {
        0x00 => Ok((Value::int(0), 1)),
        b @ 0x01..=0x7F => Ok((Value::int(b), 1)),
        0x40 => decode_large_integer(bytes, false),
        0x80 => decode_large_integer(bytes, true),
        0x90 => decode_rational(bytes),
        0xA0 => decode_bytes(bytes),
        0xB0 => decode_text(bytes),
        0xC0 => decode_sequence(bytes),
        0xD0 => decode_tag(bytes),
        0xE0 => Ok((Value::Boolean(false), 1)),
        0xE1 => Ok((Value::Boolean(true), 1)),
        0xF0 => Ok((Value::Unit, 1)),
        other => Err(ValueError::InvalidDiscriminator(other)),
    }
}

fn read_u8(bytes: &[u8], at: usize) -> Result<u8, ValueError> {
    bytes
        .get(at)
        .copied()
        .ok_or(ValueError::Truncated {
            expected: at + 1,
            found: bytes.len(),
        })
}

fn read_len_prefixed_magnitude(bytes: &[u8], at: usize) -> Result<(BigUint, usize), ValueError> {
    let len = read_u8(bytes, at)? as usize;
    let start = at + 1;
    let end = start + len;
    if end > bytes.len() {
        return Err(ValueError::Truncated {
            expected: end,
            found: bytes.len(),
        });
    }
    let magnitude = BigUint::from_bytes_be(&bytes[start..end]);
    Ok((magnitude, 1 + len))
}

fn decode_large_integer(bytes: &[u8], negative: bool) -> Result<(Value, usize), ValueError> {
    let (magnitude, consumed) = read_len_prefixed_magnitude(bytes, 1)?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok((Value::Integer(BigInt::from_biguint(sign, magnitude)), 1 + consumed))
}

fn decode_rational(bytes: &[u8]) -> Result<(Value, usize), ValueError> {
    let sign_byte = read_u8(bytes, 1)?;
    let negative = sign_byte == 0x80;
    let (numer_mag, numer_consumed) = read_len_prefixed_magnitude(bytes, 2)?;
    let denom_at = 2 + numer_consumed;
    let (denom_mag, denom_consumed) = read_len_prefixed_magnitude(bytes, denom_at)?;

    let numer_sign = if negative { Sign::Minus } else { Sign::Plus };
    let numer = BigInt::from_biguint(numer_sign, numer_mag);
    let denom = BigInt::from_biguint(Sign::Plus, denom_mag);
    let value = BigRational::new(numer, denom);
    Ok((Value::Rational(value), denom_at + denom_consumed))
}

fn read_varint(bytes: &[u8], at: usize) -> Result<(u64, usize), ValueError> {
    let mut result: u64 = 0;
    let mut shift = 0u32;
    let mut offset = at;
    loop {
        let byte = read_u8(bytes, offset)?;
        offset += 1;
        if shift >= 64 {
            return Err(ValueError::VarintOverflow);
        }
        result |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
    }
    Ok((result, offset - at))
}

fn decode_bytes(bytes: &[u8]) -> Result<(Value, usize), ValueError> {
    let (len, len_consumed) = read_varint(bytes, 1)?;
    let start = 1 + len_consumed;
    let end = start + len as usize;
    if end > bytes.len() {
        return Err(ValueError::Truncated {
            expected: end,
            found: bytes.len(),
        });
    }
    Ok((Value::Bytes(bytes[start..end].to_vec()), end))
}

fn decode_text(bytes: &[u8]) -> Result<(Value, usize), ValueError> {
    let (len, len_consumed) = read_varint(bytes, 1)?;
    let start = 1 + len_consumed;
    let end = start + len as usize;
    if end > bytes.len() {
        return Err(ValueError::Truncated {
            expected: end,
            found: bytes.len(),
        });
    }
    let s = String::from_utf8(bytes[start..end].to_vec())?;
    Ok((Value::Text(s), end))
}

fn decode_sequence(bytes: &[u8]) -> Result<(Value, usize), ValueError> {
    let (count, count_consumed) = read_varint(bytes, 1)?;
    let mut offset = 1 + count_consumed;
    let mut items = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (item, consumed) = decode(&bytes[offset..])?;
        items.push(item);
        offset += consumed;
    }
    Ok((Value::Sequence(items), offset))
}

fn decode_tag(bytes: &[u8]) -> Result<(Value, usize), ValueError> {
    let (label, label_consumed) = decode(&bytes[1..])?;
    let payload_at = 1 + label_consumed;
    let (payload, payload_consumed) = decode(&bytes[payload_at..])?;
    Ok((
        Value::tag(label, payload),
        payload_at + payload_consumed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    fn roundtrip(v: Value) {
        let bytes = encode(&v).unwrap();
        let (decoded, consumed) = decode(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(decoded, v);
    }

    #[test]
    fn roundtrip_primitives() {
        roundtrip(Value::unit());
        roundtrip(Value::boolean(true));
        roundtrip(Value::boolean(false));
        roundtrip(Value::int(0));
        roundtrip(Value::int(1));
        roundtrip(Value::int(127));
        roundtrip(Value::int(128));
        roundtrip(Value::int(-1));
        roundtrip(Value::int(-300));
        roundtrip(Value::bytes(vec![1, 2, 3]));
        roundtrip(Value::bytes(Vec::<u8>::new()));
        roundtrip(Value::text("hello, qmb"));
        roundtrip(Value::text(""));
    }

    #[test]
    fn roundtrip_rational() {
        roundtrip(Value::rational(BigRational::new(0.into(), 1.into())));
        roundtrip(Value::rational(BigRational::new(3.into(), 4.into())));
        roundtrip(Value::rational(BigRational::new((-7).into(), 11.into())));
    }

    #[test]
    fn roundtrip_nested() {
        let seq = Value::sequence(vec![Value::int(1), Value::int(2), Value::text("x")]);
        roundtrip(seq.clone());
        roundtrip(Value::tagged("wrapper", seq));
    }

    #[test]
    fn sequence_consumes_only_its_own_bytes() {
        let a = Value::int(5);
        let b = Value::int(6);
        let mut bytes = encode(&a).unwrap();
        bytes.extend(encode(&b).unwrap());
        let (decoded_a, consumed) = decode(&bytes).unwrap();
        assert_eq!(decoded_a, a);
        let (decoded_b, _) = decode(&bytes[consumed..]).unwrap();
        assert_eq!(decoded_b, b);
    }

    #[test]
    fn truncated_buffer_is_an_error() {
        assert!(decode(&[]).is_err());
        assert!(decode(&[0xA0, 0x05, 1, 2]).is_err());
    }

    #[test]
    fn invalid_discriminator_is_an_error() {
        assert!(matches!(
            decode(&[0x50]),
            Err(ValueError::InvalidDiscriminator(0x50))
        ));
    }
}
