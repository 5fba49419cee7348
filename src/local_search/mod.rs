//! Local search operators for improving CVRP solutions.
//!
//! - [`swap_improve`] — Intra-route position swap, tie-accepting, one move
//!   per route per call
//! - [`exchange_improve`] — Inter-route customer exchange, strict
//!   first-improvement, one move per route pair per call
//! - [`merge_routes`] — Greedy consolidation of route pairs whose combined
//!   demand fits capacity
//!
//! All three are total over any valid solution: they never fail, and each
//! invocation leaves the total distance unchanged or smaller.

mod exchange;
mod merge;
mod swap;

pub use exchange::exchange_improve;
pub use merge::merge_routes;
pub use swap::swap_improve;
