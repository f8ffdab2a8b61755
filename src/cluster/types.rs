//! Cluster result type.

use serde::{Deserialize, Serialize};

use super::traits::Clusterable;

/// A group of points around a center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster<P> {
    center: P,
    points: Vec<P>,
}

impl<P> Cluster<P> {
    /// Create an empty cluster around `center`.
    pub fn new(center: P) -> Self {
        Self {
            center,
            points: Vec::new(),
        }
    }

    /// Create a cluster with members.
    pub fn with_points(center: P, points: Vec<P>) -> Self {
        Self { center, points }
    }

    /// Add a member point.
    pub fn add_point(&mut self, point: P) {
        self.points.push(point);
    }

    /// Cluster center.
    #[inline]
    pub fn center(&self) -> &P {
        &self.center
    }

    /// Member points.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the cluster has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Split into center and members.
    pub fn into_parts(self) -> (P, Vec<P>) {
        (self.center, self.points)
    }
}

impl<P: Clusterable> Cluster<P> {
    /// Sum of squared member distances to the center.
    pub fn sum_of_squares(&self) -> f64 {
        self.points
            .iter()
            .map(|p| {
                let d = p.distance_from(&self.center);
                d * d
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::EuclideanIntegerPoint;

    #[test]
    fn test_add_point() {
        let mut cluster = Cluster::new(EuclideanIntegerPoint::new(vec![0, 0]));
        assert!(cluster.is_empty());

        cluster.add_point(EuclideanIntegerPoint::new(vec![3, 4]));
        cluster.add_point(EuclideanIntegerPoint::new(vec![0, 1]));
        assert_eq!(cluster.len(), 2);
        assert_eq!(cluster.sum_of_squares(), 26.0);

        let (center, points) = cluster.into_parts();
        assert_eq!(center.point(), &[0, 0]);
        assert_eq!(points.len(), 2);
    }
}
