//! Gate descriptions, both as they arrive from the input program (virtual
//! operands) and as they sit in a scheduled `Past` (physical operands).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::qubit::{PhysicalQubit, VirtualQubit};

/// A gate as it arrives from the input program (spec §6 "Gate description").
///
/// `name` is opaque to the core: it is carried through to the output
/// unchanged and used only for diagnostics. Arity is determined by the
/// length of `operands`, which must be 1 or 2; anything else is rejected by
/// the router with [`crate::error::RouteError::UnsupportedArity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Diagnostic name, opaque to the core.
    pub name: String,
    /// Virtual qubit operands, length 1 or 2.
    pub operands: SmallVec<[VirtualQubit; 2]>,
    /// Gate duration in nanoseconds.
    pub duration_ns: u64,
}

impl GateSpec {
    /// Construct a single-qubit gate.
    #[must_use]
    pub fn single(name: impl Into<String>, q: VirtualQubit, duration_ns: u64) -> Self {
        Self {
            name: name.into(),
            operands: SmallVec::from_slice(&[q]),
            duration_ns,
        }
    }

    /// Construct a two-qubit gate.
    #[must_use]
    pub fn two(name: impl Into<String>, a: VirtualQubit, b: VirtualQubit, duration_ns: u64) -> Self {
        Self {
            name: name.into(),
            operands: SmallVec::from_slice(&[a, b]),
            duration_ns,
        }
    }
}

/// A gate that has been scheduled into a [`crate::past::Past`], with its
/// operands rewritten to physical qubits.
///
/// The `synthetic` flag distinguishes SWAPs inserted by the router from a
/// SWAP that was already present (under some other name) in the input
/// program; it is an in-memory convenience only and does not change how the
/// gate's name is serialized (spec SPEC_FULL "Supplemented features").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalGate {
    /// Diagnostic name; `"swap"` for router-synthesized SWAPs.
    pub name: String,
    /// Physical qubit operands, length 1 or 2.
    pub operands: SmallVec<[PhysicalQubit; 2]>,
    /// Gate duration in nanoseconds.
    pub duration_ns: u64,
    /// True for SWAPs synthesized by the router, false for gates that came
    /// from the input program.
    pub synthetic: bool,
}

impl PhysicalGate {
    /// Number of operands (1 or 2, enforced at construction by the only
    /// callers that build these: [`crate::schedule::FreeCycleTable::schedule`]
    /// input always comes through here).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.operands.len()
    }
}
