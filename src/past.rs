//! Past Window (spec §3, §4.D): a window of already-scheduled gates plus
//! its mapping and free-cycle state, cloneable for speculative routing.

use std::rc::Rc;

use tracing::debug;

use crate::error::RouteResult;
use crate::gate::PhysicalGate;
use crate::grid::DeviceGrid;
use crate::layout::V2R;
use crate::qubit::{PhysicalQubit, VirtualQubit};
use crate::schedule::FreeCycleTable;

/// A window of already-scheduled gates together with the V2R mapping and
/// free-cycle table that produced them.
///
/// A `Past` is value-cloneable: [`Clone`] produces an independent copy whose
/// mutations (in particular, `add_swap`'s mutation of the V2R) do not
/// affect the original. This is what lets the router speculatively try a
/// candidate route without polluting the committed schedule (spec §9
/// "Path cloning and ownership").
#[derive(Debug, Clone)]
pub struct Past {
    grid: Rc<DeviceGrid>,
    v2r: V2R,
    fc: FreeCycleTable,
    /// `(start_cycle, gate)`, kept sorted by `start_cycle` with FIFO
    /// tie-breaking (spec §4.D "Gate-list insertion ordering").
    ordered: Vec<(u64, PhysicalGate)>,
}

impl Past {
    /// A fresh Past over `grid.num_qubits()` qubits: identity V2R, zeroed
    /// free-cycle table, empty gate list (spec §4.D `init(N, ct)`).
    #[must_use]
    pub fn new(grid: Rc<DeviceGrid>, cycle_time: u64) -> Self {
        let n = grid.num_qubits();
        Self {
            fc: FreeCycleTable::new(n, cycle_time),
            v2r: V2R::identity(n),
            grid,
            ordered: Vec::new(),
        }
    }

    /// The physical qubit currently holding virtual qubit `v`.
    #[must_use]
    pub fn map(&self, v: VirtualQubit) -> PhysicalQubit {
        self.v2r.map(v)
    }

    /// Read-only access to the device grid this Past routes over.
    #[must_use]
    pub fn grid(&self) -> &DeviceGrid {
        &self.grid
    }

    /// A cheap (refcount-bump) handle to the shared device grid, useful
    /// when the caller needs to read the grid while holding a mutable
    /// borrow of this Past elsewhere.
    #[must_use]
    pub fn grid_handle(&self) -> Rc<DeviceGrid> {
        Rc::clone(&self.grid)
    }

    /// Read-only access to the current V2R mapping.
    #[must_use]
    pub fn v2r(&self) -> &V2R {
        &self.v2r
    }

    /// Insert a SWAP between physical qubits `r0` and `r1`: schedules a
    /// `"swap"` gate of `swap_duration_ns` and updates the V2R mapping
    /// accordingly (spec §4.D `add_swap`).
    ///
    /// Note this mutates the V2R even on a clone — cloning *before* calling
    /// this is what keeps committed state safe (spec §4.E "Observable side
    /// effect").
    pub fn add_swap(&mut self, r0: PhysicalQubit, r1: PhysicalQubit, swap_duration_ns: u64) -> RouteResult<u64> {
        debug!(%r0, %r1, "inserting router-synthesized swap");
        let gate = PhysicalGate {
            name: "swap".to_string(),
            operands: smallvec::smallvec![r0, r1],
            duration_ns: swap_duration_ns,
            synthetic: true,
        };
        self.v2r.swap(r0, r1)?;
        self.add(gate)
    }

    /// Schedule `gate` and record it in the ordered gate list (spec §4.D
    /// `add`).
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::RouteError::UnsupportedArity`] from the
    /// free-cycle table if `gate` has more than two operands.
    pub fn add(&mut self, gate: PhysicalGate) -> RouteResult<u64> {
        let start = self.fc.schedule(&gate)?;
        let idx = self.ordered.partition_point(|(c, _)| *c <= start);
        self.ordered.insert(idx, (start, gate));
        Ok(start)
    }

    /// `max(fc)` — proxy for circuit depth at this point in the Past (spec
    /// §4.D `headline`).
    #[must_use]
    pub fn headline(&self) -> u64 {
        self.fc.headline()
    }

    /// `max(fc) - min(fc)` (spec §3 `depth(fc)`).
    #[must_use]
    pub fn depth(&self) -> u64 {
        self.fc.depth()
    }

    /// Number of gates recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no gates have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Drain the ordered gate list into the output, in list order, with no
    /// cycle metadata exported (spec §4.D `flush`). Only the Main Past
    /// should call this.
    pub fn flush(self) -> Vec<PhysicalGate> {
        debug!(gates = self.ordered.len(), "flushing past window");
        self.ordered.into_iter().map(|(_, gate)| gate).collect()
    }
}
