//! Property tests for the universal invariants in `spec.md` §8:
//! QGID determinism (1), equality-digest agreement (2), and the value
//! round-trip through the canonical encoding (used to cross-check 3/4 at
//! this layer).

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use qmb_value::{decode, encode, qgid, Value};

/// Bounded-depth arbitrary `Value` generator: primitives at the leaves,
/// `Sequence`/`Tag` recursing with shrinking size, matching the `prop_oneof!`
/// + `prop_recursive!` idiom used for tree-shaped values elsewhere in the
/// corpus.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::unit()),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(Value::int),
        (any::<i64>(), 1i64..=1000).prop_map(|(n, d)| {
            Value::Rational(BigRational::new(BigInt::from(n), BigInt::from(d)))
        }),
        proptest::collection::vec(any::<u8>(), 0..8).prop_map(Value::bytes),
        "[a-z]{0,8}".prop_map(Value::text),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::sequence),
            (inner.clone(), inner).prop_map(|(l, p)| Value::tag(l, p)),
        ]
    })
}

proptest! {
    /// Invariant 1: QGID determinism.
    #[test]
    fn qgid_is_deterministic(v in arb_value()) {
        let a = qgid(&v).unwrap();
        let b = qgid(&v).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Invariant 2: equality-digest agreement, `equal(a,b) <=> qgid(a) == qgid(b)`.
    /// Checked against the derived structural `PartialEq`, which is exactly
    /// `equal` for this sum type (`SPEC_FULL.md` §4.1).
    #[test]
    fn equality_agrees_with_qgid(a in arb_value(), b in arb_value()) {
        let structurally_equal = a == b;
        let digests_equal = qgid(&a).unwrap() == qgid(&b).unwrap();
        prop_assert_eq!(structurally_equal, digests_equal);
    }

    /// Canonical encoding round-trips through decode for any generated value.
    #[test]
    fn encode_decode_round_trips(v in arb_value()) {
        let bytes = encode(&v).unwrap();
        let (decoded, consumed) = decode(&bytes).unwrap();
        prop_assert_eq!(consumed, bytes.len());
        prop_assert_eq!(decoded, v);
    }
}
