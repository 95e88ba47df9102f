//! deltarank: incremental PageRank via delta/workset iteration
//!
//! # Overview
//!
//! Instead of recomputing the full rank vector every round, deltarank
//! propagates only rank *changes* (deltas) along graph edges and folds them
//! into a persistent solution set. Each round joins a shrinking workset with
//! the static dependency set, sums the resulting partial deltas per target,
//! drops negligible sums, and applies what survives to the solution set. The
//! computation ends when the workset drains (converged) or a round cap is hit.
//!
//! # Quick Start
//!
//! ```
//! use deltarank::iteration::{DeltaPageRank, IterationConfig};
//! use deltarank::{DependencySet, SolutionSet, VertexId, Workset};
//!
//! // 1 → 2, out-degree 1
//! let deps = DependencySet::from_triples(&[(1, 2, 1)])?;
//! let solution: SolutionSet = [(VertexId(1), 0.0), (VertexId(2), 0.0)]
//!     .into_iter()
//!     .collect();
//! let workset: Workset = [(VertexId(1), 1.0)].into_iter().collect();
//!
//! let config = IterationConfig { max_rounds: 20, parallelism: 1 };
//! let mut driver = DeltaPageRank::new(deps, solution, workset, config)?;
//! let termination = driver.run()?;
//!
//! assert!(termination.is_converged());
//! assert_eq!(driver.solution_set()[&VertexId(2)], 1.0);
//! # Ok::<(), deltarank::error::RankError>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: keyed maps for workset and solution set, a grouped edge
//!   table with supplied out-degrees, space-delimited text I/O
//! - **Iteration**: resolver (edge join) → aggregator (combinable keyed sum
//!   with convergence filter) → merger (solution set update) under a round
//!   driver with an explicit state machine
//! - **Job**: positional parameters and file-to-file execution
//!
//! # Known limitation
//!
//! Vertices with no outgoing edges (rank sinks) absorb incoming mass without
//! redistributing it. This matches the propagation model the crate
//! implements; callers needing sink handling must preprocess the graph.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod iteration;
pub mod job;
pub mod storage;

// Re-export core types
pub use error::RankError;
pub use iteration::{
    DeltaPageRank, IterationConfig, IterationState, Termination, CONVERGENCE_EPSILON,
};
pub use job::{run_job, JobArgs};
pub use storage::{DependencySet, OutEdges, SolutionSet, VertexId, Workset};

// Error type
pub use anyhow::{Error, Result};
