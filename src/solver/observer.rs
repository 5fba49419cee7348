//! Solve progress observation.
//!
//! The engine carries no console of its own; anything that wants to watch
//! the pipeline (progress bars, debug dumps, statistics) implements
//! [`SolveObserver`] and receives [`SolveEvent`]s at the defined state
//! transitions.

use crate::models::Solution;

/// A state transition in the solving pipeline.
#[derive(Debug)]
pub enum SolveEvent<'a> {
    /// Initial construction finished.
    Constructed {
        /// The freshly built solution.
        solution: &'a Solution,
    },
    /// One OPTIMIZING iteration (a swap pass followed by an exchange pass)
    /// completed.
    OptimizeIteration {
        /// 1-based iteration number.
        iteration: usize,
        /// Whether the iteration changed the solution structurally.
        changed: bool,
        /// The solution after the iteration.
        solution: &'a Solution,
    },
    /// The merge pass completed.
    MergeApplied {
        /// Number of merges performed (possibly zero).
        merges: usize,
        /// The solution after merging.
        solution: &'a Solution,
    },
}

/// Callback invoked at each pipeline state transition.
pub trait SolveObserver {
    /// Receives one pipeline event.
    fn on_event(&mut self, event: SolveEvent<'_>);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolveObserver for NoopObserver {
    fn on_event(&mut self, _event: SolveEvent<'_>) {}
}
