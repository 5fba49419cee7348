//! TSPLIB-style CVRP instance parser.
//!
//! # Format
//!
//! ```text
//! NAME : A-n32-k5
//! COMMENT : (Augerat et al, No of trucks: 5, Optimal value: 784)
//! TYPE : CVRP
//! DIMENSION : 32
//! EDGE_WEIGHT_TYPE : EUC_2D
//! CAPACITY : 100
//! NODE_COORD_SECTION
//!  1 82 76
//!  ...
//! DEMAND_SECTION
//!  1 0
//!  ...
//! DEPOT_SECTION
//!  1
//!  -1
//! EOF
//! ```
//!
//! Node ids are 1-based in the file and mapped to 0-based ids everywhere
//! else. The truck count and optimal value hide inside the free-text
//! COMMENT, so they are extracted best-effort by substring search — their
//! absence is not an error. Structural problems (missing dimension, node
//! ids out of range, incomplete sections) are.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::CvrpError;
use crate::models::Instance;

/// A parsed TSPLIB CVRP instance, coordinates still in file form.
///
/// [`to_instance`](TsplibInstance::to_instance) computes the Euclidean
/// distance matrix and produces the validated [`Instance`] the engine
/// consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsplibInstance {
    /// Instance name (`NAME`).
    pub name: String,
    /// Free-text comment (`COMMENT`).
    pub comment: String,
    /// Truck count extracted from the comment, when present.
    pub truck_count: Option<usize>,
    /// Optimal-value annotation extracted from the comment, when present.
    pub optimal_value: Option<i64>,
    /// Problem type (`TYPE`), normally `CVRP`.
    pub kind: String,
    /// Node count, depot included (`DIMENSION`).
    pub dimension: usize,
    /// Edge weight type (`EDGE_WEIGHT_TYPE`), normally `EUC_2D`.
    pub edge_weight_type: String,
    /// Uniform vehicle capacity (`CAPACITY`).
    pub capacity: i32,
    /// Node coordinates indexed by 0-based node id.
    pub node_coords: Vec<(f64, f64)>,
    /// Demands indexed by 0-based node id.
    pub demands: Vec<i32>,
    /// Depot node id, 0-based. Defaults to 0 when the file names none.
    pub depot: usize,
}

impl TsplibInstance {
    /// Builds the engine-facing [`Instance`]: Euclidean matrix from the
    /// coordinates plus the demand table, capacity, and depot.
    pub fn to_instance(&self) -> Result<Instance, CvrpError> {
        let distances = DistanceMatrix::from_coords(&self.node_coords);
        Instance::with_depot(distances, self.demands.clone(), self.capacity, self.depot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Header,
    Coords,
    Demands,
    Depot,
    Done,
}

/// Parses a TSPLIB CVRP instance from text.
pub fn parse(input: &str) -> Result<TsplibInstance, CvrpError> {
    let mut name = String::new();
    let mut comment = String::new();
    let mut kind = String::new();
    let mut edge_weight_type = String::new();
    let mut dimension = 0usize;
    let mut capacity = 0i32;
    let mut coords: Vec<Option<(f64, f64)>> = Vec::new();
    let mut demands: Vec<Option<i32>> = Vec::new();
    let mut depot = 0usize;

    let mut section = Section::Header;

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match section {
            Section::Header => match line {
                "NODE_COORD_SECTION" => {
                    if dimension == 0 {
                        return Err(CvrpError::MalformedInput(
                            "NODE_COORD_SECTION before DIMENSION".into(),
                        ));
                    }
                    coords = vec![None; dimension];
                    demands = vec![None; dimension];
                    section = Section::Coords;
                }
                _ => {
                    let Some((key, value)) = line.split_once(':') else {
                        continue; // unknown keyword lines are skipped
                    };
                    let value = value.trim();
                    match key.trim() {
                        "NAME" => name = value.to_string(),
                        "COMMENT" => comment = value.to_string(),
                        "TYPE" => kind = value.to_string(),
                        "EDGE_WEIGHT_TYPE" => edge_weight_type = value.to_string(),
                        "DIMENSION" => {
                            dimension = value.parse().map_err(|_| {
                                CvrpError::MalformedInput(format!(
                                    "invalid DIMENSION value {value:?}"
                                ))
                            })?;
                        }
                        "CAPACITY" => {
                            capacity = value.parse().map_err(|_| {
                                CvrpError::MalformedInput(format!(
                                    "invalid CAPACITY value {value:?}"
                                ))
                            })?;
                        }
                        _ => {}
                    }
                }
            },
            Section::Coords => {
                if line == "DEMAND_SECTION" {
                    section = Section::Demands;
                    continue;
                }
                let mut parts = line.split_whitespace();
                let id = parse_node_id(parts.next(), dimension)?;
                let x = parse_number(parts.next(), "x coordinate")?;
                let y = parse_number(parts.next(), "y coordinate")?;
                coords[id] = Some((x, y));
            }
            Section::Demands => {
                if line == "DEPOT_SECTION" {
                    section = Section::Depot;
                    continue;
                }
                let mut parts = line.split_whitespace();
                let id = parse_node_id(parts.next(), dimension)?;
                let demand = parse_number(parts.next(), "demand")? as i32;
                demands[id] = Some(demand);
            }
            Section::Depot => {
                if line == "EOF" {
                    section = Section::Done;
                    continue;
                }
                if line == "-1" {
                    continue; // sentinel terminating the depot list
                }
                depot = parse_node_id(Some(line), dimension)?;
            }
            Section::Done => {}
        }
    }

    let node_coords = collect_complete(coords, "node coordinate")?;
    let demands = collect_complete(demands, "demand")?;

    Ok(TsplibInstance {
        truck_count: first_integer_after(&comment, "No of trucks").map(|v| v as usize),
        optimal_value: first_integer_after(&comment, "Optimal value").map(|v| v as i64),
        name,
        comment,
        kind,
        dimension,
        edge_weight_type,
        capacity,
        node_coords,
        demands,
        depot,
    })
}

/// Reads and parses an instance file.
pub fn read_path(path: impl AsRef<Path>) -> Result<TsplibInstance, CvrpError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses a 1-based node id and maps it to 0-based, range-checked.
fn parse_node_id(token: Option<&str>, dimension: usize) -> Result<usize, CvrpError> {
    let token = token
        .ok_or_else(|| CvrpError::MalformedInput("missing node id".into()))?;
    let id: usize = token.parse().map_err(|_| {
        CvrpError::MalformedInput(format!("invalid node id {token:?}"))
    })?;
    if id == 0 || id > dimension {
        return Err(CvrpError::MalformedInput(format!(
            "node id {id} out of range 1..={dimension}"
        )));
    }
    Ok(id - 1)
}

fn parse_number(token: Option<&str>, what: &str) -> Result<f64, CvrpError> {
    let token =
        token.ok_or_else(|| CvrpError::MalformedInput(format!("missing {what}")))?;
    token.parse().map_err(|_| {
        CvrpError::MalformedInput(format!("invalid {what} {token:?}"))
    })
}

fn collect_complete<T>(values: Vec<Option<T>>, what: &str) -> Result<Vec<T>, CvrpError> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx, v)| {
            v.ok_or_else(|| {
                CvrpError::MalformedInput(format!("missing {what} for node {}", idx + 1))
            })
        })
        .collect()
}

/// First contiguous integer after `marker` in `haystack`, if any.
fn first_integer_after(haystack: &str, marker: &str) -> Option<u64> {
    let idx = haystack.find(marker)?;
    let digits: String = haystack[idx + marker.len()..]
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
