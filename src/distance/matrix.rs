//! Dense distance matrix.

use serde::{Deserialize, Serialize};

/// A dense n×n distance matrix stored in row-major order.
///
/// Node ids index directly into the matrix. The engine assumes entries are
/// non-negative with a zero diagonal; it does not assume the triangle
/// inequality, and asymmetric data is handled as-is (every route distance
/// is recomputed edge by edge in travel direction).
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
///
/// let coords = [(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)];
/// let dm = DistanceMatrix::from_coords(&coords);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from `(x, y)` coordinates.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (xi, yi) = coords[i];
                let (xj, yj) = coords[j];
                let d = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` if the grid is not square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.iter().flatten().copied().collect(),
            size,
        })
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate nearest to `from`.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().min_by(|&a, &b| {
            self.get(from, a)
                .partial_cmp(&self.get(from, b))
                .expect("distance should not be NaN")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coords() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]
    }

    #[test]
    fn test_from_coords() {
        let dm = DistanceMatrix::from_coords(&sample_coords());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!(dm.get(0, 0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_coords(&sample_coords());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0, 2.0], vec![2.0, 0.0]]).expect("square");
        assert_eq!(dm.get(0, 1), 2.0);
        assert_eq!(dm.size(), 2);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(DistanceMatrix::from_rows(&[vec![0.0, 2.0], vec![2.0]]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest() {
        let dm = DistanceMatrix::from_coords(&sample_coords());
        assert_eq!(dm.nearest(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest(0, &[2]), Some(2));
        assert_eq!(dm.nearest(0, &[]), None);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
