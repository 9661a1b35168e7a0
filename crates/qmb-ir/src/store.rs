//! The content-addressed, grow-only store of circuits and values.

use std::collections::HashMap;

use qmb_value::{Qgid, Value};

use crate::circuit::Circuit;
use crate::error::IrResult;

/// `QGID -> Circuit` and `QGID -> Value` maps.
///
/// Invariant: for every stored entry, the key equals the QGID of the
/// canonical encoding of the entry (including a circuit's canonical
/// encoding-as-value; `spec.md` §3). Entries are never mutated or evicted
/// once inserted.
#[derive(Debug, Default)]
pub struct Store {
    circuits: HashMap<Qgid, Circuit>,
    values: HashMap<Qgid, Value>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize `c` as a value, hash it, and insert if not already
    /// present. Insertion is idempotent: the same circuit always maps to
    /// the same digest, so a repeat insert is a no-op (`spec.md` §4.4).
    pub fn put_circuit(&mut self, c: Circuit) -> IrResult<Qgid> {
        let id = qmb_value::qgid(&c.to_value())?;
        self.circuits.entry(id).or_insert(c);
        Ok(id)
    }

    /// Look up a circuit by its QGID.
    pub fn get_circuit(&self, id: &Qgid) -> Option<&Circuit> {
        self.circuits.get(id)
    }

    /// Canonicalize `v`, hash it, and insert if not already present.
    pub fn put_value(&mut self, v: Value) -> IrResult<Qgid> {
        let id = qmb_value::qgid(&v)?;
        self.values.entry(id).or_insert(v);
        Ok(id)
    }

    /// Look up a plain (non-circuit) value by its QGID.
    pub fn get_value(&self, id: &Qgid) -> Option<&Value> {
        self.values.get(id)
    }

    /// Number of distinct circuits stored.
    pub fn circuit_count(&self) -> usize {
        self.circuits.len()
    }

    /// Number of distinct plain values stored.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;
    use crate::primitive::PrimitiveTag;

    fn id_circuit() -> Circuit {
        Circuit::new(
            Object::new(vec![2]).unwrap(),
            Object::new(vec![2]).unwrap(),
            PrimitiveTag::Id,
            Value::unit(),
            vec![],
        )
    }

    #[test]
    fn insertion_is_idempotent() {
        let mut store = Store::new();
        let a = store.put_circuit(id_circuit()).unwrap();
        let b = store.put_circuit(id_circuit()).unwrap();
        assert_eq!(a, b);
        assert_eq!(store.circuit_count(), 1);
    }

    #[test]
    fn get_circuit_round_trips() {
        let mut store = Store::new();
        let id = store.put_circuit(id_circuit()).unwrap();
        assert_eq!(store.get_circuit(&id), Some(&id_circuit()));
    }

    #[test]
    fn missing_reference_is_none() {
        let store = Store::new();
        let id = Qgid::from_bytes([0u8; 32]);
        assert!(store.get_circuit(&id).is_none());
        assert!(store.get_value(&id).is_none());
    }

    #[test]
    fn put_value_is_idempotent() {
        let mut store = Store::new();
        let a = store.put_value(Value::int(42)).unwrap();
        let b = store.put_value(Value::int(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(store.value_count(), 1);
    }
}
