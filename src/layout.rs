//! Mapping State / V2R (spec §3, §4.B): the virtual-to-physical bijection.

use crate::error::{RouteError, RouteResult};
use crate::qubit::{PhysicalQubit, VirtualQubit};

/// A bijection between virtual and physical qubits (spec GLOSSARY "V2R /
/// mapping").
///
/// Mutated exclusively by [`V2R::swap`], which is how the router records a
/// SWAP gate's effect on the mapping. Reverse lookup (`virt_of`) is an O(N)
/// scan, acceptable per spec §3 since device qubit counts are small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V2R {
    v2r: Vec<PhysicalQubit>,
}

impl V2R {
    /// Create the identity mapping over `n` qubits: `v2r[v] = v`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            v2r: (0..n as u32).map(PhysicalQubit).collect(),
        }
    }

    /// The physical qubit currently holding virtual qubit `v`.
    #[must_use]
    pub fn map(&self, v: VirtualQubit) -> PhysicalQubit {
        self.v2r[v.index()]
    }

    /// The virtual qubit currently residing on physical qubit `r`, found by
    /// linear scan (spec §4.B). `None` if `r` has no preimage, which means
    /// the bijection invariant has already been broken.
    #[must_use]
    pub fn virt_of(&self, r: PhysicalQubit) -> Option<VirtualQubit> {
        self.v2r.iter().position(|&p| p == r).map(VirtualQubit::from)
    }

    /// Exchange the virtual qubits currently assigned to physical qubits
    /// `r0` and `r1` (spec §4.B). The bijection is preserved by
    /// construction: this only ever permutes existing assignments.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvariantViolation`] if either physical qubit
    /// has no virtual preimage, i.e. the bijection was already broken.
    pub fn swap(&mut self, r0: PhysicalQubit, r1: PhysicalQubit) -> RouteResult<()> {
        let v0 = self.virt_of(r0).ok_or_else(|| {
            RouteError::InvariantViolation(format!("physical qubit {r0} has no virtual preimage"))
        })?;
        let v1 = self.virt_of(r1).ok_or_else(|| {
            RouteError::InvariantViolation(format!("physical qubit {r1} has no virtual preimage"))
        })?;
        self.v2r[v0.index()] = r1;
        self.v2r[v1.index()] = r0;
        Ok(())
    }

    /// Number of virtual (and physical) qubits covered by this mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.v2r.len()
    }

    /// Whether this mapping covers zero qubits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.v2r.is_empty()
    }

    /// Verify the bijection invariant: every physical qubit id in `[0, N)`
    /// appears in the mapping exactly once. Intended for internal
    /// consistency checks, not as a per-swap assertion (spec §8.1).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvariantViolation`] if some physical qubit is
    /// assigned to more than one (or zero) virtual qubits.
    pub fn check_bijection(&self) -> RouteResult<()> {
        let n = self.v2r.len();
        let mut seen = vec![false; n];
        for &r in &self.v2r {
            let idx = r.index();
            if idx >= n || seen[idx] {
                return Err(RouteError::InvariantViolation(format!(
                    "V2R is not a bijection: physical qubit {r} is assigned more than once"
                )));
            }
            seen[idx] = true;
        }
        Ok(())
    }
}
