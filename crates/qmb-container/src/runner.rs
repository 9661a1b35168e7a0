//! Loads a `.qmb` container into a populated [`Store`] and dispatches its
//! entrypoint circuit.

use qmb_algebra::Matrix;
use qmb_exec::Executor;
use qmb_ir::{Circuit, Store};
use qmb_value::Qgid;
use tracing::debug;

use crate::container::{self, Container};
use crate::error::{ContainerError, ContainerResult};

/// A loaded `.qmb` binary: a populated [`Store`] plus the container's
/// metadata, ready to execute its entrypoint.
pub struct Runner {
    container: Container,
    store: Store,
}

impl Runner {
    /// Decode `bytes` as a container, ingest its store payload, and verify
    /// the entrypoint is resolvable (`spec.md` §4.6).
    ///
    /// The payload is treated as a back-to-back sequence of canonical
    /// `Value` encodings with no outer framing (the loader choice that
    /// resolves spec.md §9's open question on store-payload format): each
    /// is decoded with [`qmb_value::decode`] in turn, classified as a
    /// circuit iff it is `Tag("circuit", _)`, and inserted under the QGID
    /// of its own canonical encoding.
    pub fn load(bytes: &[u8]) -> ContainerResult<Self> {
        let container = container::decode(bytes)?;
        let mut store = Store::new();

        let mut offset = 0;
        while offset < container.store_payload.len() {
            let (value, consumed) = qmb_value::decode(&container.store_payload[offset..])?;
            offset += consumed;
            if value.as_tagged("circuit").is_some() {
                let circuit = Circuit::from_value(&value)?;
                store.put_circuit(circuit)?;
            } else {
                store.put_value(value)?;
            }
        }
        debug!(
            circuits = store.circuit_count(),
            values = store.value_count(),
            "ingested store payload"
        );

        if store.get_circuit(&container.entrypoint).is_none() {
            return Err(ContainerError::EntrypointUnresolved);
        }

        Ok(Runner { container, store })
    }

    /// The entrypoint QGID this binary declares.
    pub fn entrypoint(&self) -> Qgid {
        self.container.entrypoint
    }

    /// The resolved entrypoint circuit.
    pub fn entrypoint_circuit(&self) -> &Circuit {
        self.store
            .get_circuit(&self.container.entrypoint)
            .expect("Runner::load guarantees the entrypoint is resolvable")
    }

    /// The binary's declared name.
    pub fn name(&self) -> &str {
        &self.container.name
    }

    /// The binary's declared version.
    pub fn version(&self) -> &str {
        &self.container.version
    }

    /// Length of the raw, undecoded store payload, in bytes.
    pub fn store_payload_len(&self) -> usize {
        self.container.store_payload.len()
    }

    /// Number of distinct circuits resolved from the store payload.
    pub fn circuit_count(&self) -> usize {
        self.store.circuit_count()
    }

    /// Number of distinct plain values resolved from the store payload.
    pub fn value_count(&self) -> usize {
        self.store.value_count()
    }

    /// Fetch the entrypoint circuit and execute it against `input`.
    pub fn run(&self, input: &Matrix) -> ContainerResult<Matrix> {
        let entrypoint = self
            .store
            .get_circuit(&self.container.entrypoint)
            .expect("Runner::load guarantees the entrypoint is resolvable");
        Ok(Executor::new(&self.store).execute(entrypoint, input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmb_ir::{Object, PrimitiveTag};
    use qmb_value::Value;

    fn qubit() -> Object {
        Object::new(vec![2]).unwrap()
    }

    #[test]
    fn load_then_run_identity() {
        let mut store = Store::new();
        let id_circuit = Circuit::new(qubit(), qubit(), PrimitiveTag::Id, Value::unit(), vec![]);
        let entry_value = id_circuit.to_value();
        let entrypoint = qmb_value::qgid(&entry_value).unwrap();
        let payload = qmb_value::encode(&entry_value).unwrap();

        let container = Container::new(entrypoint, "test", "0.1.0", payload);
        let bytes = container::encode(&container);

        let runner = Runner::load(&bytes).unwrap();
        assert_eq!(runner.entrypoint(), entrypoint);
        assert_eq!(runner.circuit_count(), 1);

        let input = Matrix::identity(4);
        let out = runner.run(&input).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn unresolved_entrypoint_is_rejected() {
        let dangling = Qgid::from_bytes([1u8; 32]);
        let container = Container::new(dangling, "empty", "0.1.0", Vec::new());
        let bytes = container::encode(&container);
        assert!(matches!(
            Runner::load(&bytes),
            Err(ContainerError::EntrypointUnresolved)
        ));
    }
}
