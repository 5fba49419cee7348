//! # u-cvrp
//!
//! Heuristic solver for the Capacitated Vehicle Routing Problem: randomized
//! nearest-neighbor construction, swap/exchange local search driven to a
//! fixed point, greedy route merging, and best-of-n multi-start selection.
//! Constructive + local search only — no optimality bounds.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Instance, Route, Solution, violations)
//! - [`distance`] — Dense distance matrix
//! - [`evaluation`] — Exact route cost/load recomputation and feasibility checks
//! - [`constructive`] — Randomized nearest-neighbor construction
//! - [`local_search`] — Swap, inter-route exchange, and merge operators
//! - [`solver`] — The construct/optimize/merge pipeline and multi-start selection
//! - [`io`] — TSPLIB-style instance parsing
//! - [`report`] — Structured solution summaries
//!
//! ## Example
//!
//! ```
//! use u_cvrp::distance::DistanceMatrix;
//! use u_cvrp::models::Instance;
//! use u_cvrp::report::SolutionReport;
//! use u_cvrp::solver::{solve_multi, SolverConfig};
//!
//! let coords = [(0.0, 0.0), (4.0, 1.0), (2.0, 5.0), (-3.0, 2.0), (-1.0, -4.0)];
//! let instance = Instance::new(
//!     DistanceMatrix::from_coords(&coords),
//!     vec![0, 4, 6, 5, 3],
//!     10,
//! )
//! .unwrap();
//!
//! let config = SolverConfig::default().with_seed(42).with_runs(5);
//! let best = solve_multi(&instance, &config).unwrap();
//! let report = SolutionReport::new(&instance, &best.solution);
//! assert_eq!(best.solution.num_served(), 4);
//! println!("{report}");
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod models;
pub mod report;
pub mod solver;

pub use error::CvrpError;
