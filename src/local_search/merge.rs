//! Greedy route merging.
//!
//! # Algorithm
//!
//! Scan route-pair indices `(i, j)`, `i < j`. The first pair whose combined
//! demand fits capacity is merged: the candidate `depot + interior(Ri) +
//! interior(Rj) + depot` replaces both originals (appended at the end of
//! the route list), and the full double scan restarts. The pass ends after
//! one complete scan finds no mergeable pair.
//!
//! The merge is greedy and order-dependent — the first mergeable pair wins,
//! not the cheapest one. Removal happens higher index first, so the second
//! removal cannot alias a shifted position and corrupt an unrelated route.
//!
//! # Complexity
//!
//! O(R³) worst case: O(R²) scans, restarted after each of at most R − 1
//! merges.

use tracing::debug;

use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution};

/// Greedily merges route pairs whose combined demand fits capacity.
///
/// Returns the number of merges performed. Every merged route respects
/// capacity by construction. A merge trades two depot legs for one direct
/// edge, so total distance never increases on matrices satisfying the
/// triangle inequality (Euclidean matrices in particular).
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::RouteEvaluator;
/// use u_cvrp::local_search::merge_routes;
/// use u_cvrp::models::{Instance, Solution};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(dm, vec![0, 5, 6], 12).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// let mut solution = Solution::new();
/// solution.add_route(evaluator.build_route(vec![1]));
/// solution.add_route(evaluator.build_route(vec![2]));
///
/// assert_eq!(merge_routes(&mut solution, &instance), 1);
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.routes()[0].load(), 11);
/// ```
pub fn merge_routes(solution: &mut Solution, instance: &Instance) -> usize {
    let evaluator = RouteEvaluator::new(instance);
    let mut merges = 0;

    while let Some((i, j)) = find_mergeable_pair(solution, instance.capacity()) {
        // Higher index first: removing i before j would shift j.
        let second = solution.routes_mut().remove(j);
        let first = solution.routes_mut().remove(i);

        let mut merged = first.customers().to_vec();
        merged.extend_from_slice(second.customers());
        let merged_route = evaluator.build_route(merged);
        debug!(
            load = merged_route.load(),
            customers = merged_route.len(),
            "routes merged"
        );
        solution.add_route(merged_route);
        merges += 1;
    }

    merges
}

/// First pair `(i, j)`, `i < j`, whose combined load fits capacity.
fn find_mergeable_pair(solution: &Solution, capacity: i32) -> Option<(usize, usize)> {
    let routes = solution.routes();
    for i in 0..routes.len() {
        for j in (i + 1)..routes.len() {
            if routes[i].load() + routes[j].load() <= capacity {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn instance(demands: Vec<i32>, capacity: i32) -> Instance {
        let n = demands.len();
        let coords: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, 0.0)).collect();
        Instance::new(DistanceMatrix::from_coords(&coords), demands, capacity).expect("valid")
    }

    #[test]
    fn test_merge_two_light_routes() {
        let inst = instance(vec![0, 5, 6], 12);
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1]));
        sol.add_route(eval.build_route(vec![2]));

        assert_eq!(merge_routes(&mut sol, &inst), 1);
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.routes()[0].load(), 11);
        assert_eq!(sol.routes()[0].customers(), &[1, 2]);
    }

    #[test]
    fn test_no_merge_when_over_capacity() {
        let inst = instance(vec![0, 7, 8], 12);
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1]));
        sol.add_route(eval.build_route(vec![2]));

        assert_eq!(merge_routes(&mut sol, &inst), 0);
        assert_eq!(sol.num_routes(), 2);
    }

    #[test]
    fn test_cascading_merges() {
        // Three singletons of demand 4 all collapse into one route of 12.
        let inst = instance(vec![0, 4, 4, 4], 12);
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        for c in 1..=3 {
            sol.add_route(eval.build_route(vec![c]));
        }

        assert_eq!(merge_routes(&mut sol, &inst), 2);
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.routes()[0].load(), 12);
        assert_eq!(sol.num_served(), 3);
    }

    #[test]
    fn test_first_pair_wins() {
        // Pairs (0,1) and (0,2) both fit; the scan takes (0,1) first, after
        // which the merged route (at the end) cannot absorb route 2.
        let inst = instance(vec![0, 5, 5, 5], 10);
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        for c in 1..=3 {
            sol.add_route(eval.build_route(vec![c]));
        }

        assert_eq!(merge_routes(&mut sol, &inst), 1);
        let sequences = sol.customer_sequences();
        assert_eq!(sequences, vec![vec![3], vec![1, 2]]);
    }

    #[test]
    fn test_merge_keeps_unrelated_routes_intact() {
        // Routes 0 and 2 merge; route 1 must survive untouched even though
        // indices shift around it.
        let inst = instance(vec![0, 3, 11, 4], 12);
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1]));
        sol.add_route(eval.build_route(vec![2]));
        sol.add_route(eval.build_route(vec![3]));

        assert_eq!(merge_routes(&mut sol, &inst), 1);
        let sequences = sol.customer_sequences();
        assert!(sequences.contains(&vec![2]));
        assert!(sequences.contains(&vec![1, 3]));
        assert_eq!(sol.num_served(), 3);
    }

    #[test]
    fn test_merge_distance_never_increases() {
        let inst = instance(vec![0, 3, 3, 3, 3], 12);
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        for c in 1..=4 {
            sol.add_route(eval.build_route(vec![c]));
        }
        let before = sol.total_distance();
        merge_routes(&mut sol, &inst);
        assert!(sol.total_distance() <= before + 1e-10);
    }
}
