//! Job assembly: wire file sources and sink around the driver
//!
//! The invoking environment hands over positional parameters; this module
//! loads the three inputs, runs the iteration to a terminal state, and writes
//! the final solution set. Parameter order follows the convention
//! `<parallelism> <solution set> <deltas> <dependency set> <output> <max rounds>`,
//! with integer defaults of 1 and empty strings for absent paths.

use crate::iteration::{DeltaPageRank, IterationConfig, Termination};
use crate::storage::text::{read_dependency_set, read_rank_pairs, write_solution_set};
use crate::storage::{SolutionSet, Workset};
use anyhow::{Context, Result};

/// Positional parameters for one computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobArgs {
    /// Parallelism hint (combiner partition count), at least 1.
    pub parallelism: usize,
    /// Path to the initial solution set: `(vertex id, rank)` lines.
    pub solution_set_path: String,
    /// Path to the initial deltas: `(vertex id, delta)` lines.
    pub deltas_path: String,
    /// Path to the dependency set: `(source, target, out-degree)` lines.
    pub dependency_set_path: String,
    /// Path the final ranks are written to.
    pub output_path: String,
    /// Round cap, at least 1.
    pub max_rounds: usize,
}

impl JobArgs {
    /// Parse positional arguments, falling back to defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric argument is present but unparsable, or
    /// parses to zero.
    pub fn from_positional(args: &[String]) -> Result<Self> {
        let parallelism = match args.first() {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid parallelism: {raw:?}"))?,
            None => 1,
        };
        let max_rounds = match args.get(5) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid max rounds: {raw:?}"))?,
            None => 1,
        };

        anyhow::ensure!(parallelism >= 1, "parallelism must be at least 1");
        anyhow::ensure!(max_rounds >= 1, "max rounds must be at least 1");

        let path = |idx: usize| args.get(idx).cloned().unwrap_or_default();

        Ok(Self {
            parallelism,
            solution_set_path: path(1),
            deltas_path: path(2),
            dependency_set_path: path(3),
            output_path: path(4),
            max_rounds,
        })
    }

    /// Human-readable parameter convention, for usage messages.
    #[must_use]
    pub fn description() -> &'static str {
        "Parameters: <parallelism> <initial solution set (id, rank)> \
         <deltas (id, delta)> <dependency set (src, trg, out-degree)> \
         <output> <max rounds>"
    }
}

/// Run a full computation from files to file.
///
/// Reads the three inputs, iterates to a terminal state, writes the final
/// solution set, and reports the stopping reason. The caller decides whether
/// hitting the round cap is acceptable.
///
/// # Errors
///
/// Returns an error on unreadable or malformed input, a solution set
/// consistency violation, or an unwritable output. Nothing is written on
/// failure.
pub async fn run_job(args: &JobArgs) -> Result<Termination> {
    let solution: SolutionSet = read_rank_pairs(&args.solution_set_path)
        .await?
        .into_iter()
        .collect();
    let workset: Workset = read_rank_pairs(&args.deltas_path)
        .await?
        .into_iter()
        .collect();
    let deps = read_dependency_set(&args.dependency_set_path).await?;

    let config = IterationConfig {
        max_rounds: args.max_rounds,
        parallelism: args.parallelism,
    };

    let mut driver = DeltaPageRank::new(deps, solution, workset, config)
        .context("initial workset is inconsistent with the solution set")?;
    let termination = driver.run().context("computation aborted")?;

    write_solution_set(&args.output_path, driver.solution_set()).await?;

    Ok(termination)
}
