//! Typed errors for the delta iteration core
//!
//! All variants are fatal: the computation aborts as a whole, never producing
//! partial output. Non-convergence within the round cap is *not* an error and
//! is reported through [`crate::iteration::Termination`] instead.

use thiserror::Error;

/// Fatal failures of the incremental rank computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// An input record had the wrong field count or an unparsable field.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number within the offending source.
        line: usize,
        /// What made the record unusable.
        reason: String,
    },

    /// A delta referenced a vertex id with no entry in the solution set.
    ///
    /// The solution set is initialized with every vertex before round 1, so
    /// this is a broken precondition, not a recoverable case.
    #[error("vertex {0} has no solution set entry")]
    UnknownVertex(u64),
}
