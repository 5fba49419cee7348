//! Multi-start selection.
//!
//! Runs the pipeline `runs` times with independent derived seeds and keeps
//! the solution with the strictly lowest total distance (the first run to
//! reach a given total wins ties). Runs share nothing but the immutable
//! instance, which is what makes the parallel variant safe without locks.

use tracing::debug;

use crate::error::CvrpError;
use crate::models::Instance;
use crate::solver::{solve, SolveOutcome, SolverConfig};

/// Runs the pipeline [`SolverConfig::runs`] times and returns the best
/// outcome.
///
/// Run `k` is seeded with `base_seed + k`, where the base seed comes from
/// the config (or a fresh random draw when unset) — so a seeded config
/// makes the whole multi-start selection reproducible.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::Instance;
/// use u_cvrp::solver::{solve_multi, SolverConfig};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 1.0), (1.0, 4.0), (-2.0, 2.0)]);
/// let instance = Instance::new(dm, vec![0, 4, 5, 6], 10).unwrap();
/// let config = SolverConfig::default().with_seed(1).with_runs(8);
///
/// let best = solve_multi(&instance, &config).unwrap();
/// assert_eq!(best.solution.num_served(), 3);
/// ```
pub fn solve_multi(
    instance: &Instance,
    config: &SolverConfig,
) -> Result<SolveOutcome, CvrpError> {
    config.validate().map_err(CvrpError::MalformedInput)?;
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let mut best: Option<SolveOutcome> = None;
    for run in 0..config.runs {
        let run_config = config
            .clone()
            .with_seed(base_seed.wrapping_add(run as u64));
        let outcome = solve(instance, &run_config)?;
        debug!(
            run,
            distance = outcome.total_distance(),
            routes = outcome.solution.num_routes(),
            "run finished"
        );
        if best
            .as_ref()
            .is_none_or(|b| outcome.total_distance() < b.total_distance())
        {
            best = Some(outcome);
        }
    }

    Ok(best.expect("at least one run was validated"))
}

/// Parallel variant of [`solve_multi`]: runs are evaluated on rayon workers
/// and the winner is selected in run order, so the result is identical to
/// the sequential selection for the same seed.
#[cfg(feature = "parallel")]
pub fn solve_multi_parallel(
    instance: &Instance,
    config: &SolverConfig,
) -> Result<SolveOutcome, CvrpError> {
    use rayon::prelude::*;

    config.validate().map_err(CvrpError::MalformedInput)?;
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let outcomes = (0..config.runs)
        .into_par_iter()
        .map(|run| {
            let run_config = config
                .clone()
                .with_seed(base_seed.wrapping_add(run as u64));
            solve(instance, &run_config)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut best: Option<SolveOutcome> = None;
    for outcome in outcomes {
        if best
            .as_ref()
            .is_none_or(|b| outcome.total_distance() < b.total_distance())
        {
            best = Some(outcome);
        }
    }
    Ok(best.expect("at least one run was validated"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::RouteEvaluator;

    fn scattered_instance() -> Instance {
        let dm = DistanceMatrix::from_coords(&[
            (0.0, 0.0),
            (3.0, 1.0),
            (1.0, 4.0),
            (-2.0, 2.0),
            (-3.0, -1.0),
            (2.0, -3.0),
        ]);
        Instance::new(dm, vec![0, 4, 5, 6, 3, 4], 10).expect("valid")
    }

    #[test]
    fn test_single_run_matches_solve() {
        let inst = scattered_instance();
        let config = SolverConfig::default().with_seed(5).with_runs(1);
        let multi = solve_multi(&inst, &config).expect("feasible");
        let single = solve(&inst, &config).expect("feasible");
        assert_eq!(
            multi.solution.customer_sequences(),
            single.solution.customer_sequences()
        );
    }

    #[test]
    fn test_best_of_n_never_worse_than_each_run() {
        let inst = scattered_instance();
        let config = SolverConfig::default().with_seed(5).with_runs(6);
        let best = solve_multi(&inst, &config).expect("feasible");

        for run in 0..6u64 {
            let run_config = SolverConfig::default().with_seed(5 + run);
            let outcome = solve(&inst, &run_config).expect("feasible");
            assert!(best.total_distance() <= outcome.total_distance() + 1e-9);
        }
    }

    #[test]
    fn test_multi_run_determinism() {
        let inst = scattered_instance();
        let config = SolverConfig::default().with_seed(21).with_runs(4);
        let a = solve_multi(&inst, &config).expect("feasible");
        let b = solve_multi(&inst, &config).expect("feasible");
        assert_eq!(
            a.solution.customer_sequences(),
            b.solution.customer_sequences()
        );
    }

    #[test]
    fn test_multi_run_result_is_feasible() {
        let inst = scattered_instance();
        let config = SolverConfig::default().with_seed(13).with_runs(5);
        let best = solve_multi(&inst, &config).expect("feasible");
        let eval = RouteEvaluator::new(&inst);
        assert!(eval.check(&best.solution).is_empty());
    }

    #[test]
    fn test_infeasible_propagates() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        let inst = Instance::new(dm, vec![0, 30], 10).expect("valid");
        let config = SolverConfig::default().with_seed(1).with_runs(3);
        assert!(matches!(
            solve_multi(&inst, &config).unwrap_err(),
            CvrpError::InfeasibleDemand { .. }
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let inst = scattered_instance();
        let config = SolverConfig::default().with_seed(8).with_runs(6);
        let seq = solve_multi(&inst, &config).expect("feasible");
        let par = solve_multi_parallel(&inst, &config).expect("feasible");
        assert_eq!(
            seq.solution.customer_sequences(),
            par.solution.customer_sequences()
        );
    }
}
