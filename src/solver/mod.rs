//! The solving pipeline.
//!
//! Orchestrates construction, the swap/exchange fixed-point loop, and the
//! merge pass, linearly: INIT → CONSTRUCTED → OPTIMIZING → MERGING → DONE.
//!
//! - [`SolverConfig`] — Run-shaping knobs (policy, seed, caps, run count)
//! - [`SolveObserver`] / [`SolveEvent`] — Trace callback at state transitions
//! - [`solve`] / [`solve_with_observer`] — One full pipeline run
//! - [`solve_multi`] — Best-of-n multi-start selection

mod config;
mod multi_run;
mod observer;
mod runner;

pub use config::SolverConfig;
pub use multi_run::solve_multi;
#[cfg(feature = "parallel")]
pub use multi_run::solve_multi_parallel;
pub use observer::{NoopObserver, SolveEvent, SolveObserver};
pub use runner::{solve, solve_with_observer, SolveOutcome};
