//! Distance matrices.
//!
//! Provides the dense pairwise distance matrix the solving engine reads.

mod matrix;

pub use matrix::DistanceMatrix;
