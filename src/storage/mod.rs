//! Keyed state tables and the text I/O boundary
//!
//! Provides the dependency set (static edges with supplied out-degrees), the
//! workset and solution set maps, and space-delimited text persistence.

pub mod graph;
pub mod text;

pub use graph::{DependencySet, OutEdges, SolutionSet, VertexId, Workset};
