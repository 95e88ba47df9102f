//! Keyed state for the delta iteration
//!
//! Three tables drive each round:
//!
//! ```text
//! DependencySet: vertex → (out-degree, targets)   static, built once
//! Workset:       vertex → delta                   replaced every round
//! SolutionSet:   vertex → rank                    persistent, updated in place
//! ```
//!
//! The dependency set stores the *supplied* out-degree rather than counting
//! targets: the collaborator that produces the edge triples owns that number,
//! and propagation divides by it verbatim.

use crate::error::RankError;
use std::collections::HashMap;
use std::fmt;

/// Vertex identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-round set of vertices whose rank changed enough to re-propagate.
///
/// The `f64` payload is a **delta**, not an absolute rank. The driver replaces
/// the whole map every round; it is never merged across rounds.
pub type Workset = HashMap<VertexId, f64>;

/// Persistent best-known rank per vertex.
///
/// The `f64` payload is an **absolute rank**. Entries are only ever added or
/// updated, never removed; this map is the terminal artifact of the
/// computation.
pub type SolutionSet = HashMap<VertexId, f64>;

/// Outgoing edges of one vertex, with its supplied out-degree.
#[derive(Debug, Clone)]
pub struct OutEdges {
    /// Out-degree as supplied by the edge source (immutable).
    pub out_degree: u64,
    /// Edge targets, in input order. Duplicates are kept as distinct edges.
    pub targets: Vec<VertexId>,
}

/// Static edge table: source vertex → outgoing edges with out-degree.
///
/// # Example
///
/// ```
/// use deltarank::{DependencySet, VertexId};
///
/// let deps = DependencySet::from_triples(&[(1, 2, 2), (1, 3, 2)]).unwrap();
/// let out = deps.outgoing(VertexId(1)).unwrap();
/// assert_eq!(out.out_degree, 2);
/// assert_eq!(out.targets, vec![VertexId(2), VertexId(3)]);
/// assert!(deps.outgoing(VertexId(2)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    edges: HashMap<VertexId, OutEdges>,
}

impl DependencySet {
    /// Create an empty dependency set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(source, target, out_degree)` triples.
    ///
    /// The out-degree is taken at face value and must be consistent across all
    /// triples for the same source. An edge triple with out-degree zero is
    /// contradictory (the edge itself proves the degree is at least one) and
    /// would divide by zero during propagation.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::MalformedRecord`] for a zero out-degree or for
    /// triples that disagree on a source's out-degree.
    pub fn from_triples(triples: &[(u64, u64, u64)]) -> Result<Self, RankError> {
        let mut edges: HashMap<VertexId, OutEdges> = HashMap::new();

        for (line, &(src, dst, out_degree)) in triples.iter().enumerate() {
            if out_degree == 0 {
                return Err(RankError::MalformedRecord {
                    line: line + 1,
                    reason: format!("edge {src} -> {dst} with out-degree 0"),
                });
            }

            let entry = edges.entry(VertexId(src)).or_insert_with(|| OutEdges {
                out_degree,
                targets: Vec::new(),
            });

            if entry.out_degree != out_degree {
                return Err(RankError::MalformedRecord {
                    line: line + 1,
                    reason: format!(
                        "source {src} listed with out-degrees {} and {out_degree}",
                        entry.out_degree
                    ),
                });
            }

            entry.targets.push(VertexId(dst));
        }

        Ok(Self { edges })
    }

    /// Outgoing edges of `vertex`, or `None` for a rank sink.
    #[must_use]
    pub fn outgoing(&self, vertex: VertexId) -> Option<&OutEdges> {
        self.edges.get(&vertex)
    }

    /// Number of vertices with at least one outgoing edge.
    #[must_use]
    pub fn num_sources(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(|out| out.targets.len()).sum()
    }
}
