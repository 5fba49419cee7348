//! Route evaluator: exact distance and load recomputation.

use std::collections::HashMap;

use crate::models::{Instance, Route, Solution, Violation, ViolationType};

/// Evaluates routes by recomputing distance and load from scratch.
///
/// Every acceptance decision in the local search compares exact edge sums
/// produced here — there is no incremental delta bookkeeping to drift out
/// of sync with the route contents.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::RouteEvaluator;
/// use u_cvrp::models::Instance;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// let instance = Instance::new(dm, vec![0, 10, 20], 50).unwrap();
/// let evaluator = RouteEvaluator::new(&instance);
///
/// let route = evaluator.build_route(vec![1, 2]);
/// assert_eq!(route.load(), 30);
/// assert!((route.distance() - 20.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Exact distance of the closed walk depot → customers → depot.
    pub fn route_distance(&self, customers: &[usize]) -> f64 {
        let depot = self.instance.depot();
        let dm = self.instance.distances();
        let mut total = 0.0;
        let mut prev = depot;
        for &c in customers {
            total += dm.get(prev, c);
            prev = c;
        }
        total + dm.get(prev, depot)
    }

    /// Total demand of the given customers.
    pub fn route_load(&self, customers: &[usize]) -> i32 {
        customers.iter().map(|&c| self.instance.demand(c)).sum()
    }

    /// Builds a [`Route`] from an interior customer sequence, recording its
    /// recomputed load and distance.
    pub fn build_route(&self, customers: Vec<usize>) -> Route {
        let load = self.route_load(&customers);
        let distance = self.route_distance(&customers);
        Route::new(customers, load, distance)
    }

    /// Checks a solution against the CVRP constraints.
    ///
    /// Reports capacity excess per route and coverage defects (customers
    /// missing from every route or visited more than once). An empty result
    /// means the solution is feasible and total.
    pub fn check(&self, solution: &Solution) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (idx, route) in solution.routes().iter().enumerate() {
            let load = self.route_load(route.customers());
            if load > self.instance.capacity() {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index: idx,
                    load,
                    capacity: self.instance.capacity(),
                }));
            }
        }

        let mut seen: HashMap<usize, usize> = HashMap::new();
        for route in solution.routes() {
            for &c in route.customers() {
                *seen.entry(c).or_insert(0) += 1;
            }
        }
        for customer_id in self.instance.customers() {
            match seen.get(&customer_id).copied().unwrap_or(0) {
                0 => violations.push(Violation::new(ViolationType::MissingCustomer {
                    customer_id,
                })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateCustomer {
                    customer_id,
                })),
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn line_instance() -> Instance {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        Instance::new(dm, vec![0, 10, 10, 10], 30).expect("valid")
    }

    #[test]
    fn test_route_distance_empty() {
        let inst = line_instance();
        let eval = RouteEvaluator::new(&inst);
        assert_eq!(eval.route_distance(&[]), 0.0);
    }

    #[test]
    fn test_route_distance_chain() {
        let inst = line_instance();
        let eval = RouteEvaluator::new(&inst);
        // 0→1→2→3→0 = 1 + 1 + 1 + 3
        assert!((eval.route_distance(&[1, 2, 3]) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_build_route() {
        let inst = line_instance();
        let eval = RouteEvaluator::new(&inst);
        let route = eval.build_route(vec![1, 2]);
        assert_eq!(route.load(), 20);
        assert!((route.distance() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_check_feasible() {
        let inst = line_instance();
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1, 2, 3]));
        assert!(eval.check(&sol).is_empty());
    }

    #[test]
    fn test_check_capacity_exceeded() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let inst = Instance::new(dm, vec![0, 10, 10], 15).expect("valid");
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1, 2]));
        let violations = eval.check(&sol);
        assert!(violations.iter().any(|v| matches!(
            v.kind,
            ViolationType::CapacityExceeded {
                load: 20,
                capacity: 15,
                ..
            }
        )));
    }

    #[test]
    fn test_check_missing_customer() {
        let inst = line_instance();
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1, 3]));
        let violations = eval.check(&sol);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::MissingCustomer { customer_id: 2 }
        ));
    }

    #[test]
    fn test_check_duplicate_customer() {
        let inst = line_instance();
        let eval = RouteEvaluator::new(&inst);
        let mut sol = Solution::new();
        sol.add_route(eval.build_route(vec![1, 2]));
        sol.add_route(eval.build_route(vec![2, 3]));
        let violations = eval.check(&sol);
        assert!(violations.iter().any(|v| matches!(
            v.kind,
            ViolationType::DuplicateCustomer { customer_id: 2 }
        )));
    }
}
