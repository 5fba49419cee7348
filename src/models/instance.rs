//! Validated CVRP problem instance.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::CvrpError;

/// A validated CVRP instance: distance matrix, demand table, uniform vehicle
/// capacity, and depot index.
///
/// All data is immutable once constructed; the engine never performs I/O
/// while solving. The fleet is homogeneous and unbounded in vehicle count,
/// so capacity is a single scalar.
///
/// Construction fails fast with [`CvrpError::MalformedInput`] on
/// structurally inconsistent data (dimension mismatch, negative capacity or
/// demand, out-of-range depot, non-zero depot demand). A customer whose
/// demand exceeds capacity on its own is *not* rejected here — that is an
/// infeasibility the constructor reports per customer id, not a malformed
/// instance.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::Instance;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
/// let instance = Instance::new(dm, vec![0, 7], 10).unwrap();
/// assert_eq!(instance.capacity(), 10);
/// assert_eq!(instance.depot(), 0);
/// assert_eq!(instance.demand(1), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    distances: DistanceMatrix,
    demands: Vec<i32>,
    capacity: i32,
    depot: usize,
}

impl Instance {
    /// Creates an instance with the depot at node 0.
    pub fn new(
        distances: DistanceMatrix,
        demands: Vec<i32>,
        capacity: i32,
    ) -> Result<Self, CvrpError> {
        Self::with_depot(distances, demands, capacity, 0)
    }

    /// Creates an instance with an explicit depot index.
    pub fn with_depot(
        distances: DistanceMatrix,
        demands: Vec<i32>,
        capacity: i32,
        depot: usize,
    ) -> Result<Self, CvrpError> {
        if demands.len() != distances.size() {
            return Err(CvrpError::MalformedInput(format!(
                "demand table has {} entries but distance matrix has {} nodes",
                demands.len(),
                distances.size()
            )));
        }
        if capacity < 0 {
            return Err(CvrpError::MalformedInput(format!(
                "capacity must be non-negative, got {capacity}"
            )));
        }
        if let Some((id, &d)) = demands.iter().enumerate().find(|(_, &d)| d < 0) {
            return Err(CvrpError::MalformedInput(format!(
                "node {id} has negative demand {d}"
            )));
        }
        if depot >= distances.size() && distances.size() > 0 {
            return Err(CvrpError::MalformedInput(format!(
                "depot index {depot} out of range for {} nodes",
                distances.size()
            )));
        }
        if let Some(&d) = demands.get(depot) {
            if d != 0 {
                return Err(CvrpError::MalformedInput(format!(
                    "depot {depot} must have zero demand, got {d}"
                )));
            }
        }
        Ok(Self {
            distances,
            demands,
            capacity,
            depot,
        })
    }

    /// The pairwise distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Demand of the given node. Zero for the depot.
    pub fn demand(&self, node: usize) -> i32 {
        self.demands[node]
    }

    /// The full demand table, indexed by node id.
    pub fn demands(&self) -> &[i32] {
        &self.demands
    }

    /// Uniform vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Depot node id.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Total node count, depot included.
    pub fn num_nodes(&self) -> usize {
        self.demands.len()
    }

    /// Number of customers (all nodes except the depot).
    pub fn num_customers(&self) -> usize {
        self.num_nodes().saturating_sub(1)
    }

    /// Iterates over customer ids in ascending order.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_nodes()).filter(move |&id| id != self.depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix3() -> DistanceMatrix {
        DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])
    }

    #[test]
    fn test_valid_instance() {
        let inst = Instance::new(matrix3(), vec![0, 3, 4], 10).expect("valid");
        assert_eq!(inst.num_nodes(), 3);
        assert_eq!(inst.num_customers(), 2);
        assert_eq!(inst.customers().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Instance::new(matrix3(), vec![0, 3], 10).unwrap_err();
        assert!(matches!(err, CvrpError::MalformedInput(_)));
    }

    #[test]
    fn test_negative_capacity() {
        let err = Instance::new(matrix3(), vec![0, 3, 4], -1).unwrap_err();
        assert!(matches!(err, CvrpError::MalformedInput(_)));
    }

    #[test]
    fn test_negative_demand() {
        let err = Instance::new(matrix3(), vec![0, -3, 4], 10).unwrap_err();
        assert!(matches!(err, CvrpError::MalformedInput(_)));
    }

    #[test]
    fn test_nonzero_depot_demand() {
        let err = Instance::new(matrix3(), vec![5, 3, 4], 10).unwrap_err();
        assert!(matches!(err, CvrpError::MalformedInput(_)));
    }

    #[test]
    fn test_depot_out_of_range() {
        let err = Instance::with_depot(matrix3(), vec![0, 3, 4], 10, 7).unwrap_err();
        assert!(matches!(err, CvrpError::MalformedInput(_)));
    }

    #[test]
    fn test_custom_depot() {
        let inst = Instance::with_depot(matrix3(), vec![3, 0, 4], 10, 1).expect("valid");
        assert_eq!(inst.depot(), 1);
        assert_eq!(inst.customers().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_oversized_demand_is_not_malformed() {
        // Feasibility is the constructor's concern, not instance validation.
        let inst = Instance::new(matrix3(), vec![0, 99, 4], 10);
        assert!(inst.is_ok());
    }
}
