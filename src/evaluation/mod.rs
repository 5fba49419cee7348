//! Route feasibility checking and exact cost evaluation.

mod evaluator;

pub use evaluator::RouteEvaluator;
