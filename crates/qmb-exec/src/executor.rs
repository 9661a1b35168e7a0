//! The recursive CP-map circuit interpreter.

use num_rational::BigRational;
use qmb_algebra::{matrix_from_value, GaussianRational, Matrix};
use qmb_ir::{Circuit, PrimitiveTag, Store};
use qmb_value::Qgid;
use tracing::debug;

use crate::error::{ExecError, ExecResult};

/// Recursion depth past which [`Executor::execute`] fails with
/// [`ExecError::DepthExceeded`]. Content-addressed circuits cannot form
/// cycles (`spec.md` §4.5/§9), so this only guards against adversarially
/// deep chains constructed offline, not legitimate recursion.
pub const MAX_RECURSION_DEPTH: usize = 4096;

/// Evaluates circuits against a read-only [`Store`].
///
/// The store may be shared by multiple concurrent executors without
/// synchronization, since execution never writes to it (`spec.md` §5).
pub struct Executor<'s> {
    store: &'s Store,
    max_depth: usize,
}

impl<'s> Executor<'s> {
    /// Build an executor over `store`, using the default recursion-depth
    /// limit.
    pub fn new(store: &'s Store) -> Self {
        Self {
            store,
            max_depth: MAX_RECURSION_DEPTH,
        }
    }

    /// Build an executor with an explicit recursion-depth limit.
    pub fn with_max_depth(store: &'s Store, max_depth: usize) -> Self {
        Self { store, max_depth }
    }

    /// Evaluate `circuit` against `input`, dispatching on `circuit.prim`
    /// (`spec.md` §4.5).
    pub fn execute(&self, circuit: &Circuit, input: &Matrix) -> ExecResult<Matrix> {
        self.execute_at(circuit, input, 0)
    }

    fn execute_at(&self, circuit: &Circuit, input: &Matrix, depth: usize) -> ExecResult<Matrix> {
        if depth > self.max_depth {
            return Err(ExecError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        debug!(prim = circuit.prim.name(), depth, "dispatching primitive");

        match circuit.prim {
            PrimitiveTag::Id => Ok(input.clone()),

            PrimitiveTag::Compose => {
                let [f, g] = self.resolve_children::<2>(circuit, "Compose")?;
                let mid = self.execute_at(f, input, depth + 1)?;
                self.execute_at(g, &mid, depth + 1)
            }

            PrimitiveTag::Tensor => {
                // Baseline simplification (spec.md §9): each child is
                // evaluated on the identity of its own declared domain
                // dimension, then the results are Kroneckered. Exact only
                // when both factors are linear and the joint input is a
                // product of identities.
                let [f, g] = self.resolve_children::<2>(circuit, "Tensor")?;
                let f_in = Matrix::identity(f.domain.dimension() as usize);
                let g_in = Matrix::identity(g.domain.dimension() as usize);
                let f_out = self.execute_at(f, &f_in, depth + 1)?;
                let g_out = self.execute_at(g, &g_in, depth + 1)?;
                Ok(f_out.kronecker(&g_out))
            }

            PrimitiveTag::Swap => {
                // Baseline simplification (spec.md §4.5/§9): identity
                // permutation, i.e. P = I, so P * rho * P^dagger == rho.
                Ok(input.clone())
            }

            PrimitiveTag::Discard => {
                let t = input.trace()?;
                let mut out = Matrix::zero(1, 1);
                out.set(0, 0, t);
                Ok(out)
            }

            PrimitiveTag::Zero => {
                let dim = circuit.codomain.dimension() as usize;
                Ok(Matrix::zero(dim, dim))
            }

            PrimitiveTag::Unitary => {
                let u = self.data_as_matrix(circuit, "Unitary")?;
                let u_dagger = u.dagger();
                Ok(u.multiply(input)?.multiply(&u_dagger)?)
            }

            PrimitiveTag::Choi => {
                let j = self.data_as_matrix(circuit, "Choi")?;
                Ok(self.apply_choi(circuit, &j, input)?)
            }

            PrimitiveTag::Prepare => self.data_as_matrix(circuit, "Prepare"),

            PrimitiveTag::Add => {
                let [f, g] = self.resolve_children::<2>(circuit, "Add")?;
                let f_out = self.execute_at(f, input, depth + 1)?;
                let g_out = self.execute_at(g, input, depth + 1)?;
                Ok(f_out.add(&g_out)?)
            }

            PrimitiveTag::Scale => {
                if circuit.children.len() != 1 {
                    return Err(ExecError::BadChildren {
                        prim: "Scale",
                        expected: 1,
                        got: circuit.children.len(),
                    });
                }
                let r = self.data_as_rational(circuit, "Scale")?;
                let [f] = self.resolve_children::<1>(circuit, "Scale")?;
                let f_out = self.execute_at(f, input, depth + 1)?;
                Ok(f_out.scale(&r))
            }

            other => Err(ExecError::UnsupportedPrimitive(other.name())),
        }
    }

    /// Choi-matrix action (`spec.md` §4.5):
    /// `Phi(rho)[i,j] = sum_{k,l} rho[l,k] * J[k*d_out+i, l*d_out+j]`.
    fn apply_choi(&self, circuit: &Circuit, j: &Matrix, rho: &Matrix) -> ExecResult<Matrix> {
        let d_in = circuit.domain.dimension() as usize;
        let d_out = circuit.codomain.dimension() as usize;
        let mut out = Matrix::zero(d_out, d_out);
        for i in 0..d_out {
            for o in 0..d_out {
                let mut acc = GaussianRational::zero();
                for k in 0..d_in {
                    for l in 0..d_in {
                        let term = rho.get(l, k) * j.get(k * d_out + i, l * d_out + o);
                        acc = acc + term;
                    }
                }
                out.set(i, o, acc);
            }
        }
        Ok(out)
    }

    fn data_as_matrix(&self, circuit: &Circuit, prim: &'static str) -> ExecResult<Matrix> {
        matrix_from_value(&circuit.data).map_err(|e| {
            if matches!(e, qmb_algebra::AlgebraError::MalformedValue(_)) {
                ExecError::BadData {
                    prim,
                    detail: e.to_string(),
                }
            } else {
                ExecError::Algebra(e)
            }
        })
    }

    fn data_as_rational(&self, circuit: &Circuit, prim: &'static str) -> ExecResult<BigRational> {
        circuit
            .data
            .as_rational()
            .cloned()
            .ok_or_else(|| ExecError::BadData {
                prim,
                detail: "expected a Rational".into(),
            })
    }

    /// Resolve exactly `N` children by QGID, failing with
    /// [`ExecError::BadChildren`] on a count mismatch and
    /// [`ExecError::MissingReference`] on an unresolved QGID.
    fn resolve_children<const N: usize>(
        &self,
        circuit: &Circuit,
        prim: &'static str,
    ) -> ExecResult<[&Circuit; N]> {
        if circuit.children.len() != N {
            return Err(ExecError::BadChildren {
                prim,
                expected: N,
                got: circuit.children.len(),
            });
        }
        let mut out: [Option<&Circuit>; N] = [None; N];
        for (index, id) in circuit.children.iter().enumerate() {
            out[index] = Some(self.resolve(*id, index)?);
        }
        Ok(out.map(|c| c.expect("every slot was filled by the loop above")))
    }

    fn resolve(&self, id: Qgid, index: usize) -> ExecResult<&Circuit> {
        self.store
            .get_circuit(&id)
            .ok_or(ExecError::MissingReference { index, qgid: id })
    }
}
