//! Property-based tests for the delta iteration
//!
//! Verifies the reduction laws (combiner transparency, threshold filtering)
//! and finite termination for arbitrary graphs

use deltarank::iteration::{DeltaAggregator, DeltaPageRank, IterationConfig, IterationState};
use deltarank::{DependencySet, SolutionSet, VertexId, Workset, CONVERGENCE_EPSILON};
use proptest::prelude::*;
use std::collections::HashMap;

/// Partial deltas over a small id space, so vertices collide and sums matter.
fn prop_partials(max_len: usize) -> impl Strategy<Value = Vec<(VertexId, f64)>> {
    prop::collection::vec((0u64..16, -1.0f64..1.0), 0..max_len)
        .prop_map(|raw| raw.into_iter().map(|(id, d)| (VertexId(id), d)).collect())
}

/// Random edge pairs over `0..num_vertices`, with consistent supplied
/// out-degrees (counted per source, as the boundary contract requires).
fn prop_triples(num_vertices: u64, max_edges: usize) -> impl Strategy<Value = Vec<(u64, u64, u64)>> {
    prop::collection::vec((0..num_vertices, 0..num_vertices), 0..max_edges).prop_map(|pairs| {
        let mut degrees: HashMap<u64, u64> = HashMap::new();
        for &(src, _) in &pairs {
            *degrees.entry(src).or_insert(0) += 1;
        }
        pairs
            .into_iter()
            .map(|(src, dst)| (src, dst, degrees[&src]))
            .collect()
    })
}

// Property: aggregating in one pass vs. any number of combiner partitions
// yields the same per-vertex sums (associativity/commutativity of the
// reduction), up to summation-order rounding.
proptest! {
    #[test]
    fn prop_combiner_transparency(
        partials in prop_partials(200),
        partitions in 1usize..12,
    ) {
        let one_pass = DeltaAggregator::new(1).aggregate(partials.clone());
        let split = DeltaAggregator::new(partitions).aggregate(partials);

        prop_assert_eq!(split.len(), one_pass.len());
        for (vertex, sum) in &one_pass {
            prop_assert!((split[vertex] - sum).abs() < 1e-9);
        }
    }
}

// Property: no aggregated sum at or below the threshold ever survives, and
// surviving sums match a direct per-vertex summation.
proptest! {
    #[test]
    fn prop_threshold_filter(partials in prop_partials(200)) {
        let mut expected: HashMap<VertexId, f64> = HashMap::new();
        for &(vertex, delta) in &partials {
            *expected.entry(vertex).or_insert(0.0) += delta;
        }

        let aggregated = DeltaAggregator::new(3).aggregate(partials);

        for (vertex, sum) in &aggregated {
            prop_assert!(sum.abs() > CONVERGENCE_EPSILON);
            prop_assert!((expected[vertex] - sum).abs() < 1e-9);
        }
        for (vertex, sum) in &expected {
            if sum.abs() > CONVERGENCE_EPSILON + 1e-9 {
                prop_assert!(aggregated.contains_key(vertex));
            }
        }
    }
}

// Property: every finite graph and workset reaches a terminal state within
// the round cap, and the solution set never loses a key.
proptest! {
    #[test]
    fn prop_finite_termination(
        triples in prop_triples(12, 40),
        deltas in prop::collection::vec((0u64..12, -2.0f64..2.0), 0..12),
    ) {
        let deps = DependencySet::from_triples(&triples).unwrap();
        let solution: SolutionSet = (0..12).map(|id| (VertexId(id), 0.0)).collect();
        let workset: Workset = deltas.into_iter().map(|(id, d)| (VertexId(id), d)).collect();

        let config = IterationConfig { max_rounds: 50, parallelism: 2 };
        let mut driver = DeltaPageRank::new(deps, solution, workset, config).unwrap();
        driver.run().unwrap();

        prop_assert!(matches!(
            driver.state(),
            IterationState::Converged | IterationState::MaxIterReached
        ));
        prop_assert!(driver.round() <= 50);

        // Append/update-only: all 12 entries still present.
        prop_assert_eq!(driver.solution_set().len(), 12);
        for id in 0..12 {
            prop_assert!(driver.solution_set().contains_key(&VertexId(id)));
        }
    }
}

// Property: a round's solution set delta and next workset describe the same
// vertices, and the workset payload plus the pre-round rank gives the
// reported new rank.
proptest! {
    #[test]
    fn prop_merge_outputs_agree(
        triples in prop_triples(10, 30),
        deltas in prop::collection::vec((0u64..10, -2.0f64..2.0), 1..10),
    ) {
        let deps = DependencySet::from_triples(&triples).unwrap();
        let solution: SolutionSet = (0..10).map(|id| (VertexId(id), 1.0)).collect();
        let workset: Workset = deltas.into_iter().map(|(id, d)| (VertexId(id), d)).collect();

        let config = IterationConfig { max_rounds: 3, parallelism: 1 };
        let mut driver = DeltaPageRank::new(deps, solution.clone(), workset, config).unwrap();
        driver.step().unwrap();

        let delta_vertices: Vec<VertexId> =
            driver.last_solution_delta().iter().map(|&(v, _)| v).collect();
        prop_assert_eq!(delta_vertices.len(), driver.workset().len());

        for &(vertex, new_rank) in driver.last_solution_delta() {
            let applied = driver.workset()[&vertex];
            prop_assert!((solution[&vertex] + applied - new_rank).abs() < 1e-12);
        }
    }
}
