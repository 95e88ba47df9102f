//! Dependency resolution: fan a vertex delta out along its edges
//!
//! For every `(v, delta)` in the workset and every edge `v → t` with supplied
//! out-degree `k`, emits the partial delta `(t, delta / k)`. A workset vertex
//! with no outgoing edges is a rank sink: its delta is absorbed and nothing is
//! emitted. That silent mass drop matches the propagation model this crate
//! implements and is deliberate, not a bug (see crate docs).

use crate::storage::{DependencySet, VertexId, Workset};

/// Partial deltas emitted for the current workset.
///
/// The output may contain many entries per target vertex; the aggregator owns
/// deduplication by summation. Fan-out per workset entry is bounded by that
/// vertex's out-degree.
///
/// # Example
///
/// ```
/// use deltarank::iteration::resolve_dependencies;
/// use deltarank::{DependencySet, VertexId, Workset};
///
/// let deps = DependencySet::from_triples(&[(1, 2, 2), (1, 3, 2)]).unwrap();
/// let workset: Workset = [(VertexId(1), 1.0)].into_iter().collect();
///
/// let mut partials = resolve_dependencies(&workset, &deps);
/// partials.sort_by_key(|&(v, _)| v);
/// assert_eq!(partials, vec![(VertexId(2), 0.5), (VertexId(3), 0.5)]);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // Out-degrees beyond 2^52 unrealistic
pub fn resolve_dependencies(workset: &Workset, deps: &DependencySet) -> Vec<(VertexId, f64)> {
    let mut partials = Vec::new();

    for (&vertex, &delta) in workset {
        let Some(out) = deps.outgoing(vertex) else {
            // Rank sink: incoming mass is absorbed.
            continue;
        };

        let share = delta / out.out_degree as f64;
        for &target in &out.targets {
            partials.push((target, share));
        }
    }

    partials
}
