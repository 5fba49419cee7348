//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::NeighborPolicy;

/// Configuration for the solving pipeline.
///
/// # Examples
///
/// ```
/// use u_cvrp::constructive::NeighborPolicy;
/// use u_cvrp::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_seed(42)
///     .with_policy(NeighborPolicy::FromLastVisited)
///     .with_runs(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Anchor policy for nearest-neighbor construction.
    pub policy: NeighborPolicy,

    /// Random seed for reproducibility. `None` draws a fresh seed per call.
    pub seed: Option<u64>,

    /// Cap on OPTIMIZING iterations. The tie-accepting swap rule can cycle
    /// without ever reaching a structural fixed point, so this bound is
    /// what guarantees termination. Must be at least 1.
    pub max_optimize_iterations: usize,

    /// When `true`, hitting the iteration cap is an error
    /// ([`CvrpError::NonConvergence`](crate::error::CvrpError)) instead of
    /// a warning plus the current solution.
    pub require_convergence: bool,

    /// Run the swap/exchange loop once more after merging. The merged
    /// routes are not re-optimized by default.
    pub reoptimize_after_merge: bool,

    /// Number of independent multi-start runs. Must be at least 1.
    pub runs: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            policy: NeighborPolicy::default(),
            seed: None,
            max_optimize_iterations: 1000,
            require_convergence: false,
            reoptimize_after_merge: false,
            runs: 1,
        }
    }
}

impl SolverConfig {
    pub fn with_policy(mut self, policy: NeighborPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_optimize_iterations(mut self, cap: usize) -> Self {
        self.max_optimize_iterations = cap;
        self
    }

    pub fn with_require_convergence(mut self, strict: bool) -> Self {
        self.require_convergence = strict;
        self
    }

    pub fn with_reoptimize_after_merge(mut self, enabled: bool) -> Self {
        self.reoptimize_after_merge = enabled;
        self
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_optimize_iterations == 0 {
            return Err("max_optimize_iterations must be at least 1".into());
        }
        if self.runs == 0 {
            return Err("runs must be at least 1".into());
        }
        Ok(())
    }
}
