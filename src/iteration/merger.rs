//! Solution set merge: apply aggregated deltas to persistent rank state
//!
//! Joins the aggregator's output against the solution set by vertex id. Each
//! match produces `new_rank = old_rank + delta`, written to the solution set
//! in place. The same match feeds the next round's workset, but the workset
//! payload stays the *delta*: downstream propagation divides the change, not
//! the absolute rank, across outgoing edges.

use crate::error::RankError;
use crate::storage::{SolutionSet, VertexId, Workset};
use std::collections::HashMap;

/// What one round's merge produced.
#[derive(Debug, Clone, Default)]
pub struct MergeOutput {
    /// Solution set delta: `(vertex, new rank)` for every entry written this
    /// round, in no particular order.
    pub solution_delta: Vec<(VertexId, f64)>,
    /// Next round's workset, carrying the applied delta per vertex.
    pub next_workset: Workset,
}

/// Apply aggregated deltas to the solution set.
///
/// Every aggregated vertex must already have a solution set entry; the
/// solution set is initialized with all vertices before round 1, so a miss
/// means upstream state is corrupt and the computation must abort.
///
/// # Errors
///
/// Returns [`RankError::UnknownVertex`] if an aggregated delta references a
/// vertex with no solution set entry. The solution set may have been partially
/// updated when this is returned; callers abort the computation, so no
/// rollback is attempted.
pub fn merge_into(
    aggregated: &HashMap<VertexId, f64>,
    solution: &mut SolutionSet,
) -> Result<MergeOutput, RankError> {
    let mut output = MergeOutput {
        solution_delta: Vec::with_capacity(aggregated.len()),
        next_workset: Workset::with_capacity(aggregated.len()),
    };

    for (&vertex, &delta) in aggregated {
        let rank = solution
            .get_mut(&vertex)
            .ok_or(RankError::UnknownVertex(vertex.0))?;

        *rank += delta;
        output.solution_delta.push((vertex, *rank));
        output.next_workset.insert(vertex, delta);
    }

    Ok(output)
}
