//! The solver pipeline: construct, optimize to a fixed point, merge.
//!
//! # Algorithm
//!
//! The pipeline is a linear state machine:
//!
//! ```text
//! INIT → CONSTRUCTED → OPTIMIZING → MERGING → DONE
//! ```
//!
//! Construction runs once. OPTIMIZING repeats { snapshot; swap pass;
//! exchange pass } until the ordered route set is structurally unchanged
//! across an iteration. Both passes only accept moves that do not increase
//! total distance, so the total is monotonically non-increasing — but the
//! swap pass accepts distance ties, which can cycle forever (a two-customer
//! route under a symmetric matrix swaps back and forth indefinitely), so
//! the loop is bounded by [`SolverConfig::max_optimize_iterations`].
//! MERGING invokes the greedy merger once; the merged result is only
//! re-optimized when [`SolverConfig::reoptimize_after_merge`] asks for it.
//! After DONE nothing mutates the solution.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::constructive::randomized_nearest_neighbor;
use crate::error::CvrpError;
use crate::local_search::{exchange_improve, merge_routes, swap_improve};
use crate::models::{Instance, Solution};
use crate::solver::{NoopObserver, SolveEvent, SolveObserver, SolverConfig};

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The final solution. Feasible and total whenever the input was.
    pub solution: Solution,
    /// OPTIMIZING iterations performed (post-merge ones included when
    /// re-optimization is enabled).
    pub iterations: usize,
    /// Whether every optimization loop reached a structural fixed point
    /// before hitting the iteration cap.
    pub converged: bool,
}

impl SolveOutcome {
    /// Total distance of the final solution.
    pub fn total_distance(&self) -> f64 {
        self.solution.total_distance()
    }
}

/// Runs the full pipeline once without observation.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::Instance;
/// use u_cvrp::solver::{solve, SolverConfig};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(dm, vec![0, 5, 6], 12).unwrap();
/// let config = SolverConfig::default().with_seed(42);
///
/// let outcome = solve(&instance, &config).unwrap();
/// assert_eq!(outcome.solution.num_served(), 2);
/// ```
pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolveOutcome, CvrpError> {
    solve_with_observer(instance, config, &mut NoopObserver)
}

/// Runs the full pipeline once, reporting state transitions to `observer`.
pub fn solve_with_observer(
    instance: &Instance,
    config: &SolverConfig,
    observer: &mut dyn SolveObserver,
) -> Result<SolveOutcome, CvrpError> {
    config.validate().map_err(CvrpError::MalformedInput)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut solution = randomized_nearest_neighbor(instance, config.policy, &mut rng)?;
    debug!(
        routes = solution.num_routes(),
        distance = solution.total_distance(),
        seed,
        "construction complete"
    );
    observer.on_event(SolveEvent::Constructed {
        solution: &solution,
    });

    let (mut iterations, mut converged) =
        optimize_to_fixed_point(&mut solution, instance, config, observer, 0)?;

    let merges = merge_routes(&mut solution, instance);
    debug!(
        merges,
        routes = solution.num_routes(),
        distance = solution.total_distance(),
        "merge pass complete"
    );
    observer.on_event(SolveEvent::MergeApplied {
        merges,
        solution: &solution,
    });

    if config.reoptimize_after_merge && merges > 0 {
        let (extra, post_converged) =
            optimize_to_fixed_point(&mut solution, instance, config, observer, iterations)?;
        iterations += extra;
        converged = converged && post_converged;
    }

    Ok(SolveOutcome {
        solution,
        iterations,
        converged,
    })
}

/// Alternates swap and exchange passes until a structural fixed point or
/// the iteration cap. Returns `(iterations, converged)`.
fn optimize_to_fixed_point(
    solution: &mut Solution,
    instance: &Instance,
    config: &SolverConfig,
    observer: &mut dyn SolveObserver,
    iteration_offset: usize,
) -> Result<(usize, bool), CvrpError> {
    for iteration in 1..=config.max_optimize_iterations {
        let snapshot = solution.customer_sequences();
        swap_improve(solution, instance);
        exchange_improve(solution, instance);
        let changed = solution.customer_sequences() != snapshot;

        observer.on_event(SolveEvent::OptimizeIteration {
            iteration: iteration_offset + iteration,
            changed,
            solution,
        });

        if !changed {
            debug!(iteration, "optimization reached fixed point");
            return Ok((iteration, true));
        }
    }

    if config.require_convergence {
        return Err(CvrpError::NonConvergence {
            iterations: config.max_optimize_iterations,
        });
    }
    warn!(
        cap = config.max_optimize_iterations,
        "optimization stopped at iteration cap without a fixed point"
    );
    Ok((config.max_optimize_iterations, false))
}
