//! Shortest-path enumeration and split evaluation for the `minextend`
//! routing policy (spec §3 "Path", §4.E step 1-3).

use crate::error::RouteResult;
use crate::grid::DeviceGrid;
use crate::past::Past;
use crate::qubit::PhysicalQubit;

/// Recursively enumerate every path from `u` to `t` whose length equals
/// `distance(u, t) + 1` (spec §4.E step 1).
///
/// At node `u`, recurse into every neighbor `n` that is strictly closer to
/// `t` than `u` is, then prepend `u` to each subpath returned. The base
/// case `u == t` yields the single one-node path `[t]`. Neighbors are
/// visited in the grid's declaration order, so the returned paths are in a
/// deterministic order that downstream tie-breaking relies on (spec §9).
pub(crate) fn enumerate_shortest_paths(
    grid: &DeviceGrid,
    u: PhysicalQubit,
    t: PhysicalQubit,
) -> Vec<Vec<PhysicalQubit>> {
    if u == t {
        return vec![vec![t]];
    }
    let du = grid.distance(u, t);
    let mut paths = Vec::new();
    for &n in grid.neighbors(u) {
        if grid.distance(n, t) < du {
            for mut sub in enumerate_shortest_paths(grid, n, t) {
                sub.insert(0, u);
                paths.push(sub);
            }
        }
    }
    paths
}

/// For a shortest path of length `L >= 3`, produce every split `(from_source,
/// from_target)` for `k` in `[0, L-2]` (spec §4.E step 2).
///
/// `from_source` is `total[0..=k]`; `from_target` is `total[k+1..]`,
/// reversed, so that `from_source.last()` and `from_target.last()` are the
/// two (adjacent) qubits the routed gate will act on.
pub(crate) fn enumerate_splits(
    total: &[PhysicalQubit],
) -> Vec<(Vec<PhysicalQubit>, Vec<PhysicalQubit>)> {
    debug_assert!(total.len() >= 3, "splits require distance >= 2");
    let mut splits = Vec::with_capacity(total.len() - 2);
    for k in 0..=(total.len() - 2) {
        let from_source = total[..=k].to_vec();
        let mut from_target = total[k + 1..].to_vec();
        from_target.reverse();
        splits.push((from_source, from_target));
    }
    splits
}

/// A candidate route for one two-qubit gate, evaluated against the current
/// Main Past (spec §3 "Path").
///
/// Construction always carries a computed `cycle_extend`: there is no way to
/// build a `Path` without evaluating it first, so "an unevaluated path"
/// cannot be represented (spec §9 "Implementations should make 'unevaluated
/// path' unrepresentable at the type level").
pub struct Path {
    /// The full shortest route this split was taken from.
    pub total: Vec<PhysicalQubit>,
    /// Prefix leading to the gate's left operand, `total[0..=k]`.
    pub from_source: Vec<PhysicalQubit>,
    /// Reversed suffix leading to the gate's right operand.
    pub from_target: Vec<PhysicalQubit>,
    /// A Main Past clone extended by this path's SWAPs.
    pub past: Past,
    /// `past.headline() - main_past.headline()` at construction time.
    pub cycle_extend: u64,
}

impl Path {
    /// Clone `main_past`, apply this split's SWAP sequence (`from_source`
    /// then `from_target`) to the clone, and record the resulting
    /// `cycle_extend` (spec §4.E step 3).
    pub(crate) fn evaluate(
        total: Vec<PhysicalQubit>,
        from_source: Vec<PhysicalQubit>,
        from_target: Vec<PhysicalQubit>,
        main_past: &Past,
        swap_duration_ns: u64,
    ) -> RouteResult<Self> {
        let mut past = main_past.clone();
        for pair in from_source.windows(2) {
            past.add_swap(pair[0], pair[1], swap_duration_ns)?;
        }
        for pair in from_target.windows(2) {
            past.add_swap(pair[0], pair[1], swap_duration_ns)?;
        }
        let cycle_extend = past.headline() - main_past.headline();
        Ok(Self {
            total,
            from_source,
            from_target,
            past,
            cycle_extend,
        })
    }

    /// The SWAP pairs this path would commit, in commit order
    /// (`from_source` consecutive pairs, then `from_target` consecutive
    /// pairs — spec §4.E step 5).
    pub(crate) fn swap_pairs(&self) -> impl Iterator<Item = (PhysicalQubit, PhysicalQubit)> + '_ {
        self.from_source
            .windows(2)
            .chain(self.from_target.windows(2))
            .map(|pair| (pair[0], pair[1]))
    }
}
