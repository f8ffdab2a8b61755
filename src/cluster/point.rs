//! Ready-made Euclidean point types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::traits::Clusterable;
use crate::core::math::sq;

/// Integer-coordinate point of any dimension.
///
/// The centroid truncates toward zero per coordinate, so centers of
/// integer clusters stay on the integer lattice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EuclideanIntegerPoint {
    point: Vec<i32>,
}

impl EuclideanIntegerPoint {
    /// Create a point from its coordinates.
    pub fn new(point: Vec<i32>) -> Self {
        Self { point }
    }

    /// Coordinates of the point.
    #[inline]
    pub fn point(&self) -> &[i32] {
        &self.point
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.point.len()
    }
}

impl Clusterable for EuclideanIntegerPoint {
    fn distance_from(&self, other: &Self) -> f64 {
        self.point
            .iter()
            .zip(&other.point)
            .map(|(&a, &b)| sq(f64::from(a) - f64::from(b)))
            .sum::<f64>()
            .sqrt()
    }

    fn centroid_of(points: &[&Self]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vec::new());
        };

        // i64 sums: 27 coordinates near 1e9 already overflow i32
        let mut sums = vec![0i64; first.dimension()];
        for p in points {
            for (sum, &c) in sums.iter_mut().zip(&p.point) {
                *sum += i64::from(c);
            }
        }

        let count = points.len() as i64;
        Self::new(sums.into_iter().map(|s| (s / count) as i32).collect())
    }
}

impl From<Vec<i32>> for EuclideanIntegerPoint {
    fn from(point: Vec<i32>) -> Self {
        Self::new(point)
    }
}

impl fmt::Display for EuclideanIntegerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.point)
    }
}

/// Floating-point point of any dimension with an arithmetic-mean centroid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EuclideanDoublePoint {
    point: Vec<f64>,
}

impl EuclideanDoublePoint {
    /// Create a point from its coordinates.
    pub fn new(point: Vec<f64>) -> Self {
        Self { point }
    }

    /// Coordinates of the point.
    #[inline]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.point.len()
    }
}

impl Clusterable for EuclideanDoublePoint {
    fn distance_from(&self, other: &Self) -> f64 {
        self.point
            .iter()
            .zip(&other.point)
            .map(|(a, b)| sq(a - b))
            .sum::<f64>()
            .sqrt()
    }

    fn centroid_of(points: &[&Self]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vec::new());
        };

        let mut sums = vec![0.0; first.dimension()];
        for p in points {
            for (sum, c) in sums.iter_mut().zip(&p.point) {
                *sum += c;
            }
        }

        let count = points.len() as f64;
        Self::new(sums.into_iter().map(|s| s / count).collect())
    }
}

impl From<Vec<f64>> for EuclideanDoublePoint {
    fn from(point: Vec<f64>) -> Self {
        Self::new(point)
    }
}

impl fmt::Display for EuclideanDoublePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.point)
    }
}

fn write_coordinates<T: fmt::Display>(f: &mut fmt::Formatter<'_>, coords: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", c)?;
    }
    write!(f, ")")
}
