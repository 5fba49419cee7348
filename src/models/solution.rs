//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of constraint violation in a solution.
///
/// Produced by [`RouteEvaluator::check`](crate::evaluation::RouteEvaluator::check)
/// as a diagnostic; the solving operators themselves never emit violating
/// solutions from valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A customer appears in no route.
    MissingCustomer {
        /// Customer id that was never visited.
        customer_id: usize,
    },
    /// A customer appears more than once across the solution.
    DuplicateCustomer {
        /// Customer id visited multiple times.
        customer_id: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete solution: a set of depot-to-depot routes.
///
/// Created by the constructor, mutated in place by the local search
/// operators and the merger, then frozen once the solver loop finishes.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(vec![1, 2], 9, 14.0));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.distance()).sum()
    }

    /// Total load across all routes.
    pub fn total_load(&self) -> i32 {
        self.routes.iter().map(|r| r.load()).sum()
    }

    /// The ordered customer sequence of every route.
    ///
    /// Used as the structural snapshot for fixed-point detection: two
    /// solutions are at the same point of the search space exactly when
    /// these sequences are equal.
    pub fn customer_sequences(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.customers().to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.total_distance(), 0.0);
        assert_eq!(sol.total_load(), 0);
    }

    #[test]
    fn test_solution_totals() {
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![1], 10, 50.0));
        sol.add_route(Route::new(vec![2, 3], 15, 80.0));
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.total_load(), 25);
        assert!((sol.total_distance() - 130.0).abs() < 1e-10);
    }

    #[test]
    fn test_customer_sequences_snapshot() {
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![3, 1], 0, 0.0));
        sol.add_route(Route::new(vec![2], 0, 0.0));
        let snapshot = sol.customer_sequences();
        assert_eq!(snapshot, vec![vec![3, 1], vec![2]]);

        // Reordering a route changes the snapshot even at equal distance.
        sol.routes_mut()[0] = Route::new(vec![1, 3], 0, 0.0);
        assert_ne!(sol.customer_sequences(), snapshot);
    }

    #[test]
    fn test_violation_equality() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            route_index: 0,
            load: 25,
            capacity: 20,
        });
        assert_eq!(
            v.kind,
            ViolationType::CapacityExceeded {
                route_index: 0,
                load: 25,
                capacity: 20,
            }
        );
    }
}
