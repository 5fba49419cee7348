//! Constructive heuristic for building initial CVRP solutions.
//!
//! - [`randomized_nearest_neighbor`] — Randomized-start greedy nearest-neighbor
//!   insertion, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{randomized_nearest_neighbor, NeighborPolicy};
