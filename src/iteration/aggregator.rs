//! Keyed summation of partial deltas with a convergence filter
//!
//! The reduction is a plain associative, commutative sum per target vertex, so
//! it can legally run in two phases: a combiner pre-pass over any partition of
//! the partials, then a final grouping over the pre-summed maps. Both phases
//! call the same [`DeltaAggregator::combine`] — there is one summation code
//! path, which is what makes the split transparent for any partitioning.
//!
//! After the final grouping, sums with magnitude at or below
//! [`CONVERGENCE_EPSILON`] are dropped entirely: they neither update the
//! solution set nor re-enter the workset.

use crate::storage::VertexId;
use std::collections::HashMap;

/// Aggregated deltas below this magnitude are treated as converged.
///
/// Fixed by design; the filter keeps a sum iff `|sum| > CONVERGENCE_EPSILON`,
/// so a sum of exactly this value is dropped.
pub const CONVERGENCE_EPSILON: f64 = 1e-5;

/// Groups partial deltas by target vertex and sums them.
///
/// The partition count is a data-layout hint (how many combiner pre-passes to
/// run), not a thread count; the result is identical for every value.
#[derive(Debug, Clone, Copy)]
pub struct DeltaAggregator {
    partitions: usize,
}

impl DeltaAggregator {
    /// The reduction function is associative and commutative, which is what
    /// licenses running it as combiner pre-passes before the final grouping.
    pub const COMBINABLE: bool = true;

    /// Create an aggregator running `partitions` combiner pre-passes.
    ///
    /// A hint of zero is treated as one (a single global pass).
    #[must_use]
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: partitions.max(1),
        }
    }

    /// Sum deltas per vertex. Used both as the combiner and as the final
    /// grouping; applies no filtering.
    #[must_use]
    pub fn combine(
        partials: impl IntoIterator<Item = (VertexId, f64)>,
    ) -> HashMap<VertexId, f64> {
        let mut sums: HashMap<VertexId, f64> = HashMap::new();
        for (vertex, delta) in partials {
            *sums.entry(vertex).or_insert(0.0) += delta;
        }
        sums
    }

    /// Fully aggregate the round's partial deltas.
    ///
    /// Runs the combiner once per partition, merges the pre-summed outputs
    /// with the same reduction, then drops every sum with
    /// `|sum| <= CONVERGENCE_EPSILON`. A vertex that received no partials this
    /// round is absent from the output, which downstream reads as converged.
    #[must_use]
    pub fn aggregate(&self, partials: Vec<(VertexId, f64)>) -> HashMap<VertexId, f64> {
        let chunk_len = partials.len().div_ceil(self.partitions).max(1);

        let pre_summed = partials
            .chunks(chunk_len)
            .flat_map(|chunk| Self::combine(chunk.iter().copied()));

        let mut sums = Self::combine(pre_summed);
        sums.retain(|_, sum| sum.abs() > CONVERGENCE_EPSILON);
        sums
    }
}
