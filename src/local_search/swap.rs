//! Intra-route position swap.
//!
//! # Algorithm
//!
//! For each route independently, scan interior position pairs `(i, j)`,
//! `i < j`, in increasing order. Each candidate is the literal two-element
//! transposition of the nodes at `i` and `j` (not a segment reversal), and
//! both the original and the candidate are costed by exact edge-sum
//! recomputation. The first candidate whose distance is less than *or equal
//! to* the original is accepted, and scanning stops for that route — at
//! most one swap per route per call. Ties count as moves, so reaching a
//! local fixed point is the caller's loop's job, and that loop needs an
//! iteration cap (a two-customer route under a symmetric matrix ties with
//! its own transposition indefinitely).
//!
//! # Complexity
//!
//! O(k³) per route of k customers: O(k²) pairs, O(k) per exact
//! recomputation.

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Route, Solution};

/// Applies one tie-accepting position swap to every route that has one.
///
/// Returns `true` if any route changed. The total distance never increases.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::RouteEvaluator;
/// use u_cvrp::local_search::swap_improve;
/// use u_cvrp::models::{Instance, Solution};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let instance = Instance::new(dm, vec![0, 10, 10, 10], 100).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// // Suboptimal order 1, 3, 2: the first tie-or-better transposition is taken.
/// let mut solution = Solution::new();
/// solution.add_route(evaluator.build_route(vec![1, 3, 2]));
/// let before = solution.total_distance();
///
/// assert!(swap_improve(&mut solution, &instance));
/// assert!(solution.total_distance() <= before);
/// ```
pub fn swap_improve(solution: &mut Solution, instance: &Instance) -> bool {
    let evaluator = RouteEvaluator::new(instance);
    let mut changed = false;
    for route in solution.routes_mut().iter_mut() {
        if swap_route(route, &evaluator) {
            changed = true;
        }
    }
    changed
}

/// Performs at most one accepted transposition on a single route.
fn swap_route(route: &mut Route, evaluator: &RouteEvaluator<'_>) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    let original = route.customers().to_vec();
    let original_distance = evaluator.route_distance(&original);

    for i in 0..n - 1 {
        for j in (i + 1)..n {
            let mut candidate = original.clone();
            candidate.swap(i, j);
            if evaluator.route_distance(&candidate) <= original_distance {
                *route = evaluator.build_route(candidate);
                return true;
            }
        }
    }
    false
}
