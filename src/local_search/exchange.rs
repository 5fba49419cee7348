//! Inter-route customer exchange.
//!
//! # Algorithm
//!
//! For every unordered pair of distinct routes `(R1, R2)` and every interior
//! customer pair `(c1 ∈ R1, c2 ∈ R2)`, in nested scan order: check the
//! hypothetical loads
//!
//! ```text
//! load(R1) - demand(c1) + demand(c2)
//! load(R2) - demand(c2) + demand(c1)
//! ```
//!
//! against capacity, and if both fit, cost the two candidate routes with
//! `c1` and `c2` swapped in place by exact recomputation. A strictly
//! smaller combined distance commits the swap and ends the scan for that
//! route pair (first-improvement, at most one swap per pair per call).
//! Later pairs in the same call see the updated routes.
//!
//! # Complexity
//!
//! O(R² × k²) pairs per call, each costed in O(k), where R = number of
//! routes and k = customers per route.

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

const EPSILON: f64 = 1e-10;

/// Applies first-improvement customer exchanges across route pairs.
///
/// Returns `true` if any swap was committed. Total distance strictly
/// decreases with every committed swap; capacity feasibility is preserved.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::RouteEvaluator;
/// use u_cvrp::local_search::exchange_improve;
/// use u_cvrp::models::{Instance, Solution};
///
/// // Two east customers and two west customers, one of each per route.
/// let dm = DistanceMatrix::from_coords(&[
///     (0.0, 0.0),
///     (5.0, 1.0),
///     (-5.0, -1.0),
///     (5.0, -1.0),
///     (-5.0, 1.0),
/// ]);
/// let instance = Instance::new(dm, vec![0, 10, 10, 10, 10], 20).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// let mut solution = Solution::new();
/// solution.add_route(evaluator.build_route(vec![1, 2]));
/// solution.add_route(evaluator.build_route(vec![3, 4]));
/// let before = solution.total_distance();
///
/// // The first strictly improving cross-route swap is committed.
/// assert!(exchange_improve(&mut solution, &instance));
/// assert!(solution.total_distance() < before);
/// ```
pub fn exchange_improve(solution: &mut Solution, instance: &Instance) -> bool {
    if solution.num_routes() < 2 {
        return false;
    }

    let evaluator = RouteEvaluator::new(instance);
    let capacity = instance.capacity();
    let mut changed = false;

    let num_routes = solution.num_routes();
    for r1 in 0..num_routes {
        for r2 in (r1 + 1)..num_routes {
            let seq1 = solution.routes()[r1].customers().to_vec();
            let seq2 = solution.routes()[r2].customers().to_vec();
            let load1 = solution.routes()[r1].load();
            let load2 = solution.routes()[r2].load();
            let dist1 = solution.routes()[r1].distance();
            let dist2 = solution.routes()[r2].distance();

            'pair: for (p1, &c1) in seq1.iter().enumerate() {
                for (p2, &c2) in seq2.iter().enumerate() {
                    let new_load1 = load1 - instance.demand(c1) + instance.demand(c2);
                    let new_load2 = load2 - instance.demand(c2) + instance.demand(c1);
                    if new_load1 > capacity || new_load2 > capacity {
                        continue;
                    }

                    let mut cand1 = seq1.clone();
                    let mut cand2 = seq2.clone();
                    cand1[p1] = c2;
                    cand2[p2] = c1;

                    let cand_dist =
                        evaluator.route_distance(&cand1) + evaluator.route_distance(&cand2);
                    if cand_dist < dist1 + dist2 - EPSILON {
                        solution.routes_mut()[r1] = evaluator.build_route(cand1);
                        solution.routes_mut()[r2] = evaluator.build_route(cand2);
                        changed = true;
                        break 'pair;
                    }
                }
            }
        }
    }

    changed
}
