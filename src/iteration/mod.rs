//! Delta/workset iteration pipeline
//!
//! One round flows workset → resolver → aggregator → merger → {solution set
//! update, next workset}; the driver repeats rounds until the workset drains
//! or the round cap is hit.

pub mod aggregator;
pub mod driver;
pub mod merger;
pub mod resolver;

pub use aggregator::{DeltaAggregator, CONVERGENCE_EPSILON};
pub use driver::{DeltaPageRank, IterationConfig, IterationState, Termination};
pub use merger::{merge_into, MergeOutput};
pub use resolver::resolve_dependencies;
