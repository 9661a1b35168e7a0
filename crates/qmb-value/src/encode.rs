//! Canonical byte encoding of [`Value`] and content addressing.
//!
//! The byte layout below is part of the on-wire contract: it participates
//! in every QGID. Do not change a discriminator, a field order, or the
//! varint format without breaking every content address that depends on it.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use sha2::{Digest, Sha256};

use crate::error::ValueError;
use crate::qgid::Qgid;
use crate::value::Value;

const TAG_INT_LARGE_POS: u8 = 0x40;
const TAG_INT_LARGE_NEG: u8 = 0x80;
const TAG_RATIONAL: u8 = 0x90;
const TAG_BYTES: u8 = 0xA0;
const TAG_TEXT: u8 = 0xB0;
const TAG_SEQUENCE: u8 = 0xC0;
const TAG_TAG: u8 = 0xD0;
const TAG_FALSE: u8 = 0xE0;
const TAG_TRUE: u8 = 0xE1;
const TAG_UNIT: u8 = 0xF0;

/// Encode a value into its canonical byte representation.
///
/// Total except for the (practically unreachable) case of an integer or
/// rational magnitude wider than 255 bytes, which the single-byte
/// length-prefix field cannot represent; see [`ValueError::MagnitudeTooLarge`].
pub fn encode(value: &Value) -> Result<Vec<u8>, ValueError> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf)?;
    Ok(buf)
}

/// The content address of a value: `sha256(encode(value))`.
pub fn qgid(value: &Value) -> Result<Qgid, ValueError> {
    let bytes = encode(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(Qgid::from_bytes(digest.into()))
}

fn encode_into(value: &Value, buf: &mut Vec<u8>) -> Result<(), ValueError> {
    match value {
        Value::Integer(i) => encode_integer(i, buf),
        Value::Rational(r) => encode_rational(r, buf),
        Value::Bytes(b) => {
            buf.push(TAG_BYTES);
            write_varint(buf, b.len() as u64);
            buf.extend_from_slice(b);
            Ok(())
        }
        Value::Text(s) => {
            buf.push(TAG_TEXT);
            let bytes = s.as_bytes();
            write_varint(buf, bytes.len() as u64);
            buf.extend_from_slice(bytes);
            Ok(())
        }
        Value::Sequence(items) => {
            buf.push(TAG_SEQUENCE);
            write_varint(buf, items.len() as u64);
            for item in items {
                encode_into(item, buf)?;
            }
            Ok(())
        }
        Value::Tag(label, payload) => {
            buf.push(TAG_TAG);
            encode_into(label, buf)?;
            encode_into(payload, buf)
        }
        Value::Boolean(false) => {
            buf.push(TAG_FALSE);
            Ok(())
        }
        Value::Boolean(true) => {
            buf.push(TAG_TRUE);
            Ok(())
        }
        Value::Unit => {
            buf.push(TAG_UNIT);
            Ok(())
        }
    }
}

fn encode_integer(i: &BigInt, buf: &mut Vec<u8>) -> Result<(), ValueError> {
    if i.is_zero() {
        buf.push(0x00);
        return Ok(());
    }
    if let Some(small) = i.to_u8_if_small_positive() {
        buf.push(small);
        return Ok(());
    }
    let tag = if i.sign() == Sign::Minus {
        TAG_INT_LARGE_NEG
    } else {
        TAG_INT_LARGE_POS
    };
    buf.push(tag);
    push_len_prefixed_magnitude(buf, i.magnitude())
}

fn encode_rational(r: &num_rational::BigRational, buf: &mut Vec<u8>) -> Result<(), ValueError> {
    buf.push(TAG_RATIONAL);
    let numer = r.numer();
    let sign_byte = if numer.is_negative() { 0x80 } else { 0x00 };
    buf.push(sign_byte);
    push_len_prefixed_magnitude(buf, numer.magnitude())?;
    // Denominators are always positive by construction of `BigRational`.
    push_len_prefixed_magnitude(buf, r.denom().magnitude())
}

fn push_len_prefixed_magnitude(buf: &mut Vec<u8>, magnitude: &BigUint) -> Result<(), ValueError> {
    let bytes = if magnitude.is_zero() {
        Vec::new()
    } else {
        magnitude.to_bytes_be()
    };
    let len: u8 = bytes
        .len()
        .try_into()
        .map_err(|_| ValueError::MagnitudeTooLarge)?;
    buf.push(len);
    buf.extend_from_slice(&bytes);
    Ok(())
}

/// Write an unsigned integer as a little-endian base-128 varint, with the
/// continuation bit set on every non-final byte.
pub(crate) fn write_varint(buf: &mut Vec<u8>, mut v: u64) {
    loop {
        let mut byte = (v & 0x7f) as u8;
        v >>= 7;
        if v != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if v == 0 {
            break;
        }
    }
}

trait SmallPositive {
    fn to_u8_if_small_positive(&self) -> Option<u8>;
}

impl SmallPositive for BigInt {
    fn to_u8_if_small_positive(&self) -> Option<u8> {
        if self.sign() == Sign::Plus {
            if let Some(v) = self.to_u8() {
                if v <= 127 {
                    return Some(v);
                }
            }
        }
        None
    }
}
