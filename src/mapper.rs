//! The top-level mapping/routing pipeline (spec §2 "Data flow", §4.E "State
//! machine of the Mapper across one circuit").
//!
//! The Mapper owns one Main Past, which owns the authoritative V2R and
//! free-cycle table. Gates are consumed in program order; each is
//! translated through the V2R and, for non-adjacent two-qubit gates, routed
//! by the [`Router`] before being appended. When the stream ends the Main
//! Past is flushed to the returned gate list.

use std::rc::Rc;

use tracing::{error, info, instrument};

use crate::device::{DeviceSpec, MapperPolicy};
use crate::error::RouteResult;
use crate::gate::{GateSpec, PhysicalGate};
use crate::grid::DeviceGrid;
use crate::past::Past;
use crate::router::Router;

/// Maps a stream of virtual-qubit gates onto a fixed-topology device,
/// inserting SWAPs as needed.
pub struct Mapper {
    grid: Rc<DeviceGrid>,
    router: Router,
    cycle_time_ns: u64,
}

impl Mapper {
    /// Build a mapper for `device`, selecting the routing policy named by
    /// `policy` (`"base"` or `"minextend"`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RouteError::ConfigError`] if the device
    /// description is malformed or `policy` is not a recognized value
    /// (spec §6).
    pub fn new(device: &DeviceSpec, policy: &str) -> RouteResult<Self> {
        let grid = Rc::new(DeviceGrid::new(device)?);
        let policy = MapperPolicy::parse(policy)?;
        let router = Router::new(policy, device.swap_duration);
        Ok(Self {
            grid,
            router,
            cycle_time_ns: device.cycle_time,
        })
    }

    /// Cap the number of `minextend` alternatives evaluated per gate (spec
    /// §9 / SPEC_FULL "Supplemented features"). No effect under `base`.
    #[must_use]
    pub fn with_max_alternatives(mut self, max: usize) -> Self {
        self.router = self.router.with_max_alternatives(max);
        self
    }

    /// Run the full pipeline over `gates`, in program order, and return the
    /// resulting physical-qubit gate stream (spec §2, §5 "Ordering of
    /// gates in the output").
    ///
    /// # Errors
    ///
    /// Aborts and returns the first error encountered; no partial output is
    /// produced (spec §7).
    #[instrument(skip(self, gates), fields(num_gates = gates.len(), num_qubits = self.grid.num_qubits()))]
    pub fn map_circuit(&self, gates: &[GateSpec]) -> RouteResult<Vec<PhysicalGate>> {
        info!("starting map_circuit");
        let mut past = Past::new(Rc::clone(&self.grid), self.cycle_time_ns);
        for gate in gates {
            if let Err(err) = self.router.map_gate(&mut past, gate) {
                error!(error = %err, gate = %gate.name, "map_circuit aborted");
                return Err(err);
            }
        }
        let headline = past.headline();
        let out = past.flush();
        info!(headline, gates_out = out.len(), "map_circuit complete");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{EdgeSpec, QubitSpec};
    use crate::qubit::{PhysicalQubit, VirtualQubit};

    fn line3() -> DeviceSpec {
        DeviceSpec {
            x_size: 3,
            y_size: 1,
            qubits: vec![
                QubitSpec { id: 0, x: 0, y: 0 },
                QubitSpec { id: 1, x: 1, y: 0 },
                QubitSpec { id: 2, x: 2, y: 0 },
            ],
            edges: vec![
                EdgeSpec { src: 0, dst: 1 },
                EdgeSpec { src: 1, dst: 0 },
                EdgeSpec { src: 1, dst: 2 },
                EdgeSpec { src: 2, dst: 1 },
            ],
            cycle_time: 1,
            swap_duration: 4,
        }
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let err = Mapper::new(&line3(), "nope").unwrap_err();
        assert!(matches!(err, crate::error::RouteError::ConfigError(_)));
    }

    #[test]
    fn test_idempotent_on_already_adjacent_circuit() {
        let mapper = Mapper::new(&line3(), "base").unwrap();
        let gates = vec![
            GateSpec::two("cx", VirtualQubit(0), VirtualQubit(1), 1),
            GateSpec::two("cx", VirtualQubit(1), VirtualQubit(2), 1),
        ];
        let out = mapper.map_circuit(&gates).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|g| g.name != "swap"));
        assert_eq!(
            out[0].operands.as_slice(),
            &[PhysicalQubit(0), PhysicalQubit(1)]
        );
    }

    #[test]
    fn test_distance_one_gate_needs_no_routing() {
        let mapper = Mapper::new(&line3(), "minextend").unwrap();
        let gates = vec![GateSpec::two("cx", VirtualQubit(0), VirtualQubit(1), 1)];
        let out = mapper.map_circuit(&gates).unwrap();
        assert_eq!(out.len(), 1);
    }
}
