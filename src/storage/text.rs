//! Space-delimited text I/O for the iteration boundary
//!
//! # Format
//!
//! - Ranks and deltas: `<vertex id> <value>` per line
//! - Dependencies: `<source id> <target id> <out-degree>` per line
//!
//! Parsing is all-or-nothing: a single malformed record aborts the whole
//! computation, there is no best-effort output. Blank lines (including the one
//! produced by a trailing newline) are ignored.

use super::{DependencySet, SolutionSet, VertexId};
use crate::error::RankError;
use anyhow::{Context, Result};
use std::path::Path;
use std::str::FromStr;

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T, RankError> {
    field.parse().map_err(|_| RankError::MalformedRecord {
        line,
        reason: format!("invalid {what}: {field:?}"),
    })
}

/// Parse `<id> <value>` pairs, used for both initial ranks and initial deltas.
///
/// # Errors
///
/// Returns [`RankError::MalformedRecord`] on wrong field count or an
/// unparsable field.
pub fn parse_rank_pairs(text: &str) -> Result<Vec<(VertexId, f64)>, RankError> {
    let mut pairs = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(' ').collect();
        if fields.len() != 2 {
            return Err(RankError::MalformedRecord {
                line,
                reason: format!("expected 2 fields, got {}", fields.len()),
            });
        }

        let id: u64 = parse_field(fields[0], line, "vertex id")?;
        let value: f64 = parse_field(fields[1], line, "value")?;
        pairs.push((VertexId(id), value));
    }

    Ok(pairs)
}

/// Parse `<source> <target> <out-degree>` triples.
///
/// # Errors
///
/// Returns [`RankError::MalformedRecord`] on wrong field count or an
/// unparsable field.
pub fn parse_dependency_triples(text: &str) -> Result<Vec<(u64, u64, u64)>, RankError> {
    let mut triples = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(' ').collect();
        if fields.len() != 3 {
            return Err(RankError::MalformedRecord {
                line,
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let src: u64 = parse_field(fields[0], line, "source id")?;
        let dst: u64 = parse_field(fields[1], line, "target id")?;
        let out_degree: u64 = parse_field(fields[2], line, "out-degree")?;
        triples.push((src, dst, out_degree));
    }

    Ok(triples)
}

/// Serialize a solution set as `<id> <rank>` lines, sorted by id.
///
/// Sorting makes the sink deterministic regardless of map iteration order.
#[must_use]
pub fn format_solution_set(solution: &SolutionSet) -> String {
    let mut entries: Vec<(VertexId, f64)> = solution.iter().map(|(&v, &r)| (v, r)).collect();
    entries.sort_by_key(|&(v, _)| v);

    let mut out = String::new();
    for (vertex, rank) in entries {
        out.push_str(&format!("{vertex} {rank}\n"));
    }
    out
}

/// Read `<id> <value>` pairs from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record is malformed.
pub async fn read_rank_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(VertexId, f64)>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_rank_pairs(&text).with_context(|| format!("malformed input in {}", path.display()))
}

/// Read dependency triples from a file and assemble the edge table.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a record is malformed, or the
/// supplied out-degrees are inconsistent.
pub async fn read_dependency_set<P: AsRef<Path>>(path: P) -> Result<DependencySet> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let triples =
        parse_dependency_triples(&text).with_context(|| format!("malformed input in {}", path.display()))?;

    DependencySet::from_triples(&triples)
        .with_context(|| format!("inconsistent dependency set in {}", path.display()))
}

/// Write the final solution set to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn write_solution_set<P: AsRef<Path>>(path: P, solution: &SolutionSet) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, format_solution_set(solution))
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
