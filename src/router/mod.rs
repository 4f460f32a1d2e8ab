//! Router (spec §4.E): shortest-path enumeration, split enumeration, cost
//! evaluation and selection for non-adjacent two-qubit gates.

mod path;

use tracing::{debug, instrument};

use crate::device::MapperPolicy;
use crate::error::{RouteError, RouteResult};
use crate::gate::GateSpec;
use crate::grid::DeviceGrid;
use crate::past::Past;
use crate::qubit::PhysicalQubit;

pub(crate) use path::Path;

/// Generates and selects SWAP sequences to bring a two-qubit gate's
/// operands adjacent, per one of the two policies in spec §4.E.
pub struct Router {
    policy: MapperPolicy,
    swap_duration_ns: u64,
    /// Cap on the number of `minextend` alternatives considered, per spec
    /// §9 / SPEC_FULL "Supplemented features". `None` means unbounded.
    max_alternatives: Option<usize>,
}

impl Router {
    /// Build a router for the given policy and platform SWAP duration.
    #[must_use]
    pub fn new(policy: MapperPolicy, swap_duration_ns: u64) -> Self {
        Self {
            policy,
            swap_duration_ns,
            max_alternatives: None,
        }
    }

    /// Cap the number of `minextend` alternatives evaluated per gate. Has
    /// no effect under the `base` policy.
    #[must_use]
    pub fn with_max_alternatives(mut self, max: usize) -> Self {
        self.max_alternatives = Some(max);
        self
    }

    /// Map one gate onto `main_past`, rewriting its operands through the
    /// current V2R and inserting whatever SWAPs are needed first (spec
    /// §4.E "Public operation map_gate").
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnsupportedArity`] if `gate` has arity other than 1
    ///   or 2.
    /// - [`RouteError::InvariantViolation`] if a two-qubit gate's operands
    ///   map to the same physical qubit (impossible under a correct V2R,
    ///   but checked defensively since it would indicate a bug, not a
    ///   config problem).
    /// - [`RouteError::UnroutableGate`] if no route exists between the
    ///   gate's physical operands.
    #[instrument(skip(self, main_past, gate), fields(name = %gate.name))]
    pub fn map_gate(&self, main_past: &mut Past, gate: &GateSpec) -> RouteResult<()> {
        match gate.operands.len() {
            1 => {
                let r = main_past.map(gate.operands[0]);
                main_past.add(crate::gate::PhysicalGate {
                    name: gate.name.clone(),
                    operands: smallvec::smallvec![r],
                    duration_ns: gate.duration_ns,
                    synthetic: false,
                })?;
                Ok(())
            }
            2 => {
                let (v0, v1) = (gate.operands[0], gate.operands[1]);
                let (rs, rt) = (main_past.map(v0), main_past.map(v1));
                if rs == rt {
                    return Err(RouteError::InvariantViolation(format!(
                        "virtual qubits {v0} and {v1} map to the same physical qubit {rs}"
                    )));
                }
                self.route_gate(main_past, rs, rt)?;
                // Operands may have moved due to inserted SWAPs; rewrite again.
                let (rs, rt) = (main_past.map(v0), main_past.map(v1));
                main_past.add(crate::gate::PhysicalGate {
                    name: gate.name.clone(),
                    operands: smallvec::smallvec![rs, rt],
                    duration_ns: gate.duration_ns,
                    synthetic: false,
                })?;
                Ok(())
            }
            n => Err(RouteError::UnsupportedArity {
                name: gate.name.clone(),
                arity: n,
            }),
        }
    }

    /// Bring `rs` and `rt` adjacent by inserting SWAPs into `main_past`,
    /// dispatching to the selected policy.
    ///
    /// Adjacency here means the glossary's nearest-neighbor relation — an
    /// edge of the Device Grid — not Chebyshev distance; a device may place
    /// two qubits at distance 1 without declaring an edge between them, so
    /// the distance is not a reliable stand-in for the edge check.
    fn route_gate(&self, main_past: &mut Past, rs: PhysicalQubit, rt: PhysicalQubit) -> RouteResult<()> {
        let grid = main_past.grid();
        if !grid.reachable_from(rs).contains_key(&rt) {
            return Err(RouteError::UnroutableGate { src: rs, dst: rt });
        }
        if grid.neighbors(rs).contains(&rt) {
            return Ok(());
        }
        match self.policy {
            MapperPolicy::Base => self.route_base(main_past, rs, rt),
            MapperPolicy::MinExtend => self.route_minextend(main_past, rs, rt),
        }
    }

    /// Greedy one-sided routing (spec §4.E "base").
    ///
    /// While `distance(rs, rt) > 1`, walk `rs` to the first neighbor (in
    /// declaration order) that is strictly closer to `rt`, inserting a SWAP
    /// each step. Terminates because distance strictly decreases and is
    /// bounded below by 1.
    fn route_base(&self, main_past: &mut Past, mut rs: PhysicalQubit, rt: PhysicalQubit) -> RouteResult<()> {
        let grid = main_past.grid_handle();
        while grid.distance(rs, rt) > 1 {
            let cur_dist = grid.distance(rs, rt);
            let next = grid
                .neighbors(rs)
                .iter()
                .copied()
                .find(|&n| grid.distance(n, rt) < cur_dist)
                .ok_or(RouteError::UnroutableGate { src: rs, dst: rt })?;
            main_past.add_swap(rs, next, self.swap_duration_ns)?;
            rs = next;
        }
        Ok(())
    }

    /// Minimum-latency routing with split enumeration (spec §4.E
    /// "minextend").
    fn route_minextend(&self, main_past: &mut Past, rs: PhysicalQubit, rt: PhysicalQubit) -> RouteResult<()> {
        let grid = main_past.grid();
        let totals = path::enumerate_shortest_paths(grid, rs, rt);
        if totals.is_empty() {
            return Err(RouteError::UnroutableGate { src: rs, dst: rt });
        }

        let mut candidates: Vec<(Vec<PhysicalQubit>, Vec<PhysicalQubit>, Vec<PhysicalQubit>)> =
            Vec::new();
        for total in totals {
            debug_assert!(total.len() >= 2, "enumerated path too short");
            if total.len() < 3 {
                // distance == 1 handled by the adjacency shortcut in
                // `route_gate`; this branch should be unreachable here.
                continue;
            }
            for (from_source, from_target) in path::enumerate_splits(&total) {
                candidates.push((total.clone(), from_source, from_target));
            }
        }
        if let Some(max) = self.max_alternatives {
            candidates.truncate(max);
        }
        if candidates.is_empty() {
            return Err(RouteError::UnroutableGate { src: rs, dst: rt });
        }

        let mut best: Option<Path> = None;
        for (total, from_source, from_target) in candidates {
            let evaluated = Path::evaluate(total, from_source, from_target, main_past, self.swap_duration_ns)?;
            match &best {
                // Strict `<` preserves first-encountered-wins tie-breaking
                // (spec §8.5).
                Some(current) if evaluated.cycle_extend >= current.cycle_extend => {}
                _ => best = Some(evaluated),
            }
        }
        let best = best.ok_or(RouteError::UnroutableGate { src: rs, dst: rt })?;
        debug!(
            swaps = best.swap_pairs().count(),
            cycle_extend = best.cycle_extend,
            "selected minextend split"
        );
        for (a, b) in best.swap_pairs() {
            main_past.add_swap(a, b, self.swap_duration_ns)?;
        }
        Ok(())
    }
}
