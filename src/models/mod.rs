//! Domain model types for the CVRP engine.
//!
//! Provides the core abstractions: a validated problem instance (distance
//! matrix, demand table, capacity, depot), routes as depot-to-depot customer
//! sequences, solutions as route sets, and violation diagnostics.

mod instance;
mod route;
mod solution;

pub use instance::Instance;
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
