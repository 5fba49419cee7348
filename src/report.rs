//! Solution reporting.
//!
//! Turns a frozen [`Solution`](crate::models::Solution) into a structured
//! summary: per-route closed path, distance, and load plus aggregate
//! totals. The engine never prints; rendering happens here, after solving,
//! via `Display` or serde.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Solution};

/// Summary of a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    /// The closed walk, depot at both ends.
    pub path: Vec<usize>,
    /// Travelled distance of this route.
    pub distance: f64,
    /// Total demand carried.
    pub load: i32,
}

/// Summary of a full solution.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::Instance;
/// use u_cvrp::report::SolutionReport;
/// use u_cvrp::solver::{solve, SolverConfig};
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let instance = Instance::new(dm, vec![0, 5, 6], 12).unwrap();
/// let outcome = solve(&instance, &SolverConfig::default().with_seed(1)).unwrap();
///
/// let report = SolutionReport::new(&instance, &outcome.solution);
/// assert_eq!(report.routes.len(), outcome.solution.num_routes());
/// assert_eq!(report.total_load, 11);
/// println!("{report}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// One entry per route, in solution order.
    pub routes: Vec<RouteReport>,
    /// Sum of all route distances.
    pub total_distance: f64,
    /// Sum of all route loads.
    pub total_load: i32,
}

impl SolutionReport {
    /// Builds a report for a solution over the given instance.
    pub fn new(instance: &Instance, solution: &Solution) -> Self {
        let routes: Vec<RouteReport> = solution
            .routes()
            .iter()
            .map(|r| RouteReport {
                path: r.full_path(instance.depot()),
                distance: r.distance(),
                load: r.load(),
            })
            .collect();
        Self {
            total_distance: routes.iter().map(|r| r.distance).sum(),
            total_load: routes.iter().map(|r| r.load).sum(),
            routes,
        }
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, route) in self.routes.iter().enumerate() {
            let stops: Vec<String> = route.path.iter().map(|n| n.to_string()).collect();
            writeln!(
                f,
                "Route {}: {} (distance {:.2}, load {})",
                idx + 1,
                stops.join(" -> "),
                route.distance,
                route.load
            )?;
        }
        writeln!(f, "Total distance: {:.2}", self.total_distance)?;
        write!(f, "Total load: {}", self.total_load)
    }
}
