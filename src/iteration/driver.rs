//! Round orchestration for the delta iteration
//!
//! The driver owns the three state tables and runs the per-round pipeline
//! (resolver → aggregator → merger), installs the merger's workset as the
//! next round's input, and decides termination. Rounds are strictly
//! sequential: round N+1 never observes a partially applied round N.
//!
//! # State machine
//!
//! ```text
//! Initializing → RoundActive → … → Converged | MaxIterReached
//! ```
//!
//! Both terminal states expose the same artifact (the final solution set);
//! they differ only in the stopping reason reported to the caller. Hitting
//! the round cap is a valid outcome, not an error.

use super::aggregator::DeltaAggregator;
use super::merger::merge_into;
use super::resolver::resolve_dependencies;
use crate::error::RankError;
use crate::storage::{DependencySet, SolutionSet, VertexId, Workset};
use tracing::{debug, info};

/// Where the driver currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationState {
    /// Constructed; round 1 has not started.
    Initializing,
    /// At least one more round will run.
    RoundActive,
    /// Terminal: the workset drained before the round cap.
    Converged,
    /// Terminal: the round cap was reached with work remaining.
    MaxIterReached,
}

/// Stopping reason reported after a completed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The workset became empty after the given number of rounds.
    Converged {
        /// Rounds executed, counting from 1.
        rounds: usize,
    },
    /// The round cap was hit with a non-empty workset remaining.
    MaxIterReached {
        /// Rounds executed, equal to the configured cap.
        rounds: usize,
    },
}

impl Termination {
    /// Rounds executed before stopping.
    #[must_use]
    pub fn rounds(&self) -> usize {
        match *self {
            Self::Converged { rounds } | Self::MaxIterReached { rounds } => rounds,
        }
    }

    /// True if the computation reached the empty-workset fixpoint.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Tunables for one computation.
#[derive(Debug, Clone, Copy)]
pub struct IterationConfig {
    /// Round cap; the driver stops after this many rounds even with work left.
    pub max_rounds: usize,
    /// Parallelism hint; sets the aggregator's combiner partition count.
    pub parallelism: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            max_rounds: 1,
            parallelism: 1,
        }
    }
}

/// Incremental PageRank driver.
///
/// # Example
///
/// ```
/// use deltarank::iteration::{DeltaPageRank, IterationConfig};
/// use deltarank::{DependencySet, SolutionSet, VertexId, Workset};
///
/// let deps = DependencySet::from_triples(&[(1, 2, 1)]).unwrap();
/// let solution: SolutionSet = [(VertexId(1), 0.0), (VertexId(2), 0.0)]
///     .into_iter()
///     .collect();
/// let workset: Workset = [(VertexId(1), 1.0)].into_iter().collect();
///
/// let config = IterationConfig { max_rounds: 10, parallelism: 1 };
/// let mut driver = DeltaPageRank::new(deps, solution, workset, config).unwrap();
/// let termination = driver.run().unwrap();
///
/// assert!(termination.is_converged());
/// assert_eq!(driver.solution_set()[&VertexId(2)], 1.0);
/// ```
#[derive(Debug)]
pub struct DeltaPageRank {
    deps: DependencySet,
    solution: SolutionSet,
    workset: Workset,
    aggregator: DeltaAggregator,
    max_rounds: usize,
    round: usize,
    state: IterationState,
    last_solution_delta: Vec<(VertexId, f64)>,
}

impl DeltaPageRank {
    /// Create a driver over an initial solution set and workset.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownVertex`] if a workset vertex has no
    /// solution set entry; the solution set must cover every vertex that can
    /// ever carry a delta before round 1 starts.
    pub fn new(
        deps: DependencySet,
        solution: SolutionSet,
        workset: Workset,
        config: IterationConfig,
    ) -> Result<Self, RankError> {
        for vertex in workset.keys() {
            if !solution.contains_key(vertex) {
                return Err(RankError::UnknownVertex(vertex.0));
            }
        }

        Ok(Self {
            deps,
            solution,
            workset,
            aggregator: DeltaAggregator::new(config.parallelism),
            max_rounds: config.max_rounds.max(1),
            round: 0,
            state: IterationState::Initializing,
            last_solution_delta: Vec::new(),
        })
    }

    /// Run rounds until a terminal state is reached.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownVertex`] on a solution set consistency
    /// violation. The computation is aborted as a whole; no partial result is
    /// defined.
    pub fn run(&mut self) -> Result<Termination, RankError> {
        loop {
            match self.state {
                IterationState::Initializing | IterationState::RoundActive => self.step()?,
                IterationState::Converged => {
                    let termination = Termination::Converged { rounds: self.round };
                    info!(rounds = self.round, "workset drained, converged");
                    return Ok(termination);
                }
                IterationState::MaxIterReached => {
                    let termination = Termination::MaxIterReached { rounds: self.round };
                    info!(
                        rounds = self.round,
                        remaining = self.workset.len(),
                        "round cap reached"
                    );
                    return Ok(termination);
                }
            }
        }
    }

    /// Run a single round; a no-op in terminal states.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownVertex`] if the merge hits a vertex with no
    /// solution set entry.
    pub fn step(&mut self) -> Result<(), RankError> {
        match self.state {
            IterationState::Initializing => {
                self.round = 1;
                self.state = IterationState::RoundActive;
                self.run_round()
            }
            IterationState::RoundActive => self.run_round(),
            IterationState::Converged | IterationState::MaxIterReached => Ok(()),
        }
    }

    fn run_round(&mut self) -> Result<(), RankError> {
        let partials = resolve_dependencies(&self.workset, &self.deps);
        let emitted = partials.len();

        let aggregated = self.aggregator.aggregate(partials);
        let output = merge_into(&aggregated, &mut self.solution)?;

        debug!(
            round = self.round,
            workset = self.workset.len(),
            partials = emitted,
            survivors = aggregated.len(),
            "round complete"
        );

        self.workset = output.next_workset;
        self.last_solution_delta = output.solution_delta;

        // Cap check comes first: a full workset at the cap still terminates.
        if self.round == self.max_rounds {
            self.state = IterationState::MaxIterReached;
        } else if self.workset.is_empty() {
            self.state = IterationState::Converged;
        } else {
            self.round += 1;
        }

        Ok(())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> IterationState {
        self.state
    }

    /// Round counter: the round currently running, or the last one completed
    /// once a terminal state is reached. Zero before round 1.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// The persistent solution set (final result once terminal).
    #[must_use]
    pub fn solution_set(&self) -> &SolutionSet {
        &self.solution
    }

    /// Consume the driver, returning the solution set.
    #[must_use]
    pub fn into_solution_set(self) -> SolutionSet {
        self.solution
    }

    /// Current workset (next round's input; empty once converged).
    #[must_use]
    pub fn workset(&self) -> &Workset {
        &self.workset
    }

    /// Solution set delta applied by the most recent round:
    /// `(vertex, new rank)` per updated entry.
    #[must_use]
    pub fn last_solution_delta(&self) -> &[(VertexId, f64)] {
        &self.last_solution_delta
    }
}
