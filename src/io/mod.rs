//! Instance input.
//!
//! Reads TSPLIB-style CVRP text instances into validated problem data.

mod tsplib;

pub use tsplib::{parse, read_path, TsplibInstance};
