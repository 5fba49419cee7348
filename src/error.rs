//! Engine error type.

/// Errors surfaced at the solver boundary.
///
/// The solving operators themselves (swap, exchange, merge) are total over
/// any valid [`Solution`](crate::models::Solution); errors only arise from
/// invalid input data, infeasible instances, or (in strict mode) a
/// non-converging optimization loop.
#[derive(Debug, thiserror::Error)]
pub enum CvrpError {
    /// Structurally inconsistent input: dimension mismatch, negative
    /// capacity or demand, out-of-range depot, and the like.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A customer's demand exceeds the vehicle capacity on its own, so no
    /// single vehicle can ever serve it under a homogeneous fleet.
    #[error("customer {customer} has demand {demand} exceeding vehicle capacity {capacity}")]
    InfeasibleDemand {
        /// Offending customer id.
        customer: usize,
        /// The customer's demand.
        demand: i32,
        /// The (uniform) vehicle capacity.
        capacity: i32,
    },

    /// The optimization loop hit its iteration cap without reaching a
    /// structural fixed point. Only returned when
    /// [`SolverConfig::require_convergence`](crate::solver::SolverConfig)
    /// is set; the default behavior keeps the last (valid) solution.
    #[error("optimization did not reach a fixed point within {iterations} iterations")]
    NonConvergence {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// Underlying I/O failure while reading an instance file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
