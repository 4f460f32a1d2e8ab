//! Device Grid (spec §3, §4.A): static topology, adjacency and distance.

use rustc_hash::FxHashMap;

use crate::device::DeviceSpec;
use crate::error::{RouteError, RouteResult};
use crate::qubit::PhysicalQubit;

/// The immutable, fixed-topology layout of physical qubits (spec §4.A
/// "Device Grid").
///
/// Neighbor iteration order is the order edges were declared in the device
/// description; it is preserved exactly and never sorted or re-hashed,
/// because it determines tie-breaks in the `base` routing policy and in
/// `minextend`'s split enumeration (spec §9 "Neighbor iteration order is
/// semantically significant").
#[derive(Debug, Clone)]
pub struct DeviceGrid {
    num_qubits: usize,
    coords: Vec<(u32, u32)>,
    neighbors: Vec<Vec<PhysicalQubit>>,
}

impl DeviceGrid {
    /// Build a device grid from an already-parsed device description.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::ConfigError`] when a coordinate lies outside
    /// the declared extents or an edge references a qubit id outside
    /// `[0, N)` (spec §4.A).
    pub fn new(spec: &DeviceSpec) -> RouteResult<Self> {
        let num_qubits = spec.num_qubits();
        let mut coords = vec![(0u32, 0u32); num_qubits];
        let mut seen = vec![false; num_qubits];
        for q in &spec.qubits {
            let id = q.id as usize;
            if id >= num_qubits {
                return Err(RouteError::ConfigError(format!(
                    "qubit id {} is out of range [0, {num_qubits})",
                    q.id
                )));
            }
            if q.x >= spec.x_size || q.y >= spec.y_size {
                return Err(RouteError::ConfigError(format!(
                    "qubit {} coordinate ({}, {}) is out of extents ({}, {})",
                    q.id, q.x, q.y, spec.x_size, spec.y_size
                )));
            }
            coords[id] = (q.x, q.y);
            seen[id] = true;
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(RouteError::ConfigError(format!(
                "qubit {missing} has no declared coordinate"
            )));
        }

        let mut neighbors = vec![Vec::new(); num_qubits];
        for e in &spec.edges {
            let (src, dst) = (e.src as usize, e.dst as usize);
            if src >= num_qubits || dst >= num_qubits {
                return Err(RouteError::ConfigError(format!(
                    "edge ({}, {}) references a qubit outside [0, {num_qubits})",
                    e.src, e.dst
                )));
            }
            neighbors[src].push(PhysicalQubit(e.dst));
        }

        Ok(Self {
            num_qubits,
            coords,
            neighbors,
        })
    }

    /// Number of physical qubits on the grid.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Chebyshev distance between two physical qubits (spec §4.A
    /// `distance(a,b) = max(|x_a-x_b|, |y_a-y_b|)`), exact rather than a
    /// heuristic lower bound.
    #[must_use]
    pub fn distance(&self, a: PhysicalQubit, b: PhysicalQubit) -> u32 {
        let (xa, ya) = self.coords[a.index()];
        let (xb, yb) = self.coords[b.index()];
        xa.abs_diff(xb).max(ya.abs_diff(yb))
    }

    /// Neighbors of `q`, in declaration order. This order is a tie-break
    /// source for both routing policies and must never be reordered.
    #[must_use]
    pub fn neighbors(&self, q: PhysicalQubit) -> &[PhysicalQubit] {
        &self.neighbors[q.index()]
    }

    /// Build the reachable set of physical qubits from `start`, used to
    /// distinguish "no path exists" (spec §4.E `UnroutableGate`) from a
    /// degenerate zero-distance call before the router starts walking.
    #[must_use]
    pub(crate) fn reachable_from(&self, start: PhysicalQubit) -> FxHashMap<PhysicalQubit, ()> {
        let mut seen = FxHashMap::default();
        let mut stack = vec![start];
        seen.insert(start, ());
        while let Some(q) = stack.pop() {
            for &n in self.neighbors(q) {
                if seen.insert(n, ()).is_none() {
                    stack.push(n);
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{EdgeSpec, QubitSpec};

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
    fn test_distance_chebyshev() {
        let grid = DeviceGrid::new(&line3()).unwrap();
        assert_eq!(grid.distance(PhysicalQubit(0), PhysicalQubit(2)), 2);
        assert_eq!(grid.distance(PhysicalQubit(0), PhysicalQubit(1)), 1);
        assert_eq!(grid.distance(PhysicalQubit(0), PhysicalQubit(0)), 0);
    }

    #[test]
    fn test_neighbor_order_preserved() {
        let grid = DeviceGrid::new(&line3()).unwrap();
        assert_eq!(grid.neighbors(PhysicalQubit(1)), &[PhysicalQubit(0), PhysicalQubit(2)]);
    }

    #[test]
    fn test_out_of_extent_coordinate_is_config_error() {
        let mut spec = line3();
        spec.qubits[0].x = 9;
        assert!(matches!(
            DeviceGrid::new(&spec),
            Err(RouteError::ConfigError(_))
        ));
    }

    #[test]
    fn test_edge_out_of_range_is_config_error() {
        let mut spec = line3();
        spec.edges.push(EdgeSpec { src: 0, dst: 99 });
        assert!(matches!(
            DeviceGrid::new(&spec),
            Err(RouteError::ConfigError(_))
        ));
    }

    #[test]
    fn test_isolated_qubit_unreachable() {
        let mut spec = line3();
        spec.qubits.push(QubitSpec { id: 3, x: 0, y: 1 });
        spec.x_size = 3;
        spec.y_size = 2;
        let grid = DeviceGrid::new(&spec).unwrap();
        let reach = grid.reachable_from(PhysicalQubit(0));
        assert!(!reach.contains_key(&PhysicalQubit(3)));
    }
}
