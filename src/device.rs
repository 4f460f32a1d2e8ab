//! Device description types (spec §6 "Device description").
//!
//! These are plain, already-parsed data: loading them from a hardware
//! configuration JSON file is an external collaborator's job (spec §1), but
//! the types themselves derive `Serialize`/`Deserialize` so that loader can
//! deserialize straight into them without a translation layer, the way
//! `arvak-compile::property::CouplingMap` does.

use serde::{Deserialize, Serialize};

/// A single physical qubit's declared grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QubitSpec {
    /// The qubit's id, must be in `[0, N)`.
    pub id: u32,
    /// X coordinate, must be in `[0, nx)`.
    pub x: u32,
    /// Y coordinate, must be in `[0, ny)`.
    pub y: u32,
}

/// A directed adjacency edge between two physical qubits.
///
/// Edges are directed as supplied; the core does not symmetrize them (spec
/// §9 "the source assumes edges are declared in both directions"). Supply
/// both `(src, dst)` and `(dst, src)` for undirected adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source qubit id, must be in `[0, N)`.
    pub src: u32,
    /// Destination qubit id, must be in `[0, N)`.
    pub dst: u32,
}

/// The full device description consumed by [`crate::grid::DeviceGrid::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Grid width.
    pub x_size: u32,
    /// Grid height.
    pub y_size: u32,
    /// One entry per physical qubit.
    pub qubits: Vec<QubitSpec>,
    /// Directed adjacency edges.
    pub edges: Vec<EdgeSpec>,
    /// Nanoseconds per scheduling cycle.
    pub cycle_time: u64,
    /// Duration of a synthesized SWAP gate, in nanoseconds.
    pub swap_duration: u64,
}

impl DeviceSpec {
    /// Number of physical qubits declared.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

/// The routing policy selected by the caller (spec §6 "Options").
///
/// The external interface describes this as a bare string; internally it is
/// parsed once at the `Mapper` construction boundary into this enum so that
/// [`crate::router::Router::route_gate`] can exhaustively match on it
/// instead of re-comparing strings per gate (spec SPEC_FULL "Supplemented
/// features").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapperPolicy {
    /// Greedy one-sided routing (spec §4.E "base").
    Base,
    /// Minimum-latency routing with split enumeration (spec §4.E
    /// "minextend").
    MinExtend,
}

impl MapperPolicy {
    /// Parse the `mapper` option string. Any value other than `"base"` or
    /// `"minextend"` is a [`crate::error::RouteError::ConfigError`].
    pub fn parse(s: &str) -> Result<Self, crate::error::RouteError> {
        match s {
            "base" => Ok(MapperPolicy::Base),
            "minextend" => Ok(MapperPolicy::MinExtend),
            other => Err(crate::error::RouteError::ConfigError(format!(
                "unknown mapper policy `{other}` (expected `base` or `minextend`)"
            ))),
        }
    }
}
