//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of customer visits served by one vehicle.
///
/// A route implicitly starts and ends at the depot; only the interior
/// customers are stored. The recorded load and distance are maintained by
/// the [`RouteEvaluator`](crate::evaluation::RouteEvaluator) and the local
/// search operators — the customers themselves are the source of truth,
/// and both values can always be recomputed from them.
///
/// Invariant: the sum of interior demands never exceeds vehicle capacity in
/// any route produced by this crate's operators.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Route;
///
/// let route = Route::new(vec![3, 1], 9, 12.5);
/// assert_eq!(route.customers(), &[3, 1]);
/// assert_eq!(route.load(), 9);
/// assert_eq!(route.full_path(0), vec![0, 3, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    customers: Vec<usize>,
    load: i32,
    distance: f64,
}

impl Route {
    /// Creates a route from its interior customers and recorded totals.
    pub fn new(customers: Vec<usize>, load: i32, distance: f64) -> Self {
        Self {
            customers,
            load,
            distance,
        }
    }

    /// Interior customer ids in visit order (depot excluded).
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Number of customers visited.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if this route visits no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Total demand carried by this route.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Total travelled distance, depot to depot.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The closed walk `[depot, c1, ..., ck, depot]`.
    pub fn full_path(&self, depot: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.customers.len() + 2);
        path.push(depot);
        path.extend_from_slice(&self.customers);
        path.push(depot);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accessors() {
        let r = Route::new(vec![2, 5, 3], 11, 42.0);
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
        assert_eq!(r.load(), 11);
        assert!((r.distance() - 42.0).abs() < 1e-10);
    }

    #[test]
    fn test_full_path_closure() {
        let r = Route::new(vec![4, 1], 0, 0.0);
        let path = r.full_path(7);
        assert_eq!(path.first(), Some(&7));
        assert_eq!(path.last(), Some(&7));
        assert_eq!(path, vec![7, 4, 1, 7]);
    }

    #[test]
    fn test_empty_route() {
        let r = Route::new(vec![], 0, 0.0);
        assert!(r.is_empty());
        assert_eq!(r.full_path(0), vec![0, 0]);
    }
}
