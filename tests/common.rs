//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use ganita::{Clusterable, EuclideanIntegerPoint};

/// Seed used by the fixed-seed scenarios.
pub const SEED: u64 = 1_746_432_956_321;

/// Build integer points from 2D coordinate pairs.
pub fn int_points(coords: &[[i32; 2]]) -> Vec<EuclideanIntegerPoint> {
    coords
        .iter()
        .map(|c| EuclideanIntegerPoint::new(c.to_vec()))
        .collect()
}

/// Three well separated groups of 8, 5 and 8 points.
///
/// Integer centroids: (-14, 4), (0, -1) and (15, 5).
pub fn three_groups() -> Vec<EuclideanIntegerPoint> {
    int_points(&[
        // around (-14, 4)
        [-15, 3],
        [-15, 4],
        [-15, 5],
        [-14, 3],
        [-14, 5],
        [-13, 3],
        [-13, 4],
        [-13, 5],
        // around (0, -1)
        [-1, 0],
        [-1, -1],
        [0, -1],
        [1, -1],
        [1, -2],
        // around (15, 5)
        [13, 3],
        [13, 4],
        [14, 4],
        [14, 7],
        [16, 5],
        [16, 6],
        [17, 4],
        [17, 7],
    ])
}

/// `count` 4D points on an evenly spaced diagonal.
///
/// Point `i` is `(1 + 27i, 28 + 27i, 55 + 27i, 82 + 27i) * 1_000_000`. With
/// large spacing and many clusters, Lloyd iterations regularly empty a
/// cluster, which exercises every recovery strategy.
pub fn breaking_points(count: usize) -> Vec<EuclideanIntegerPoint> {
    let step = count as i32;
    let multiplier = 1_000_000;
    (0..step)
        .map(|i| {
            let base = 1 + i * step;
            EuclideanIntegerPoint::new(
                (0..4)
                    .map(|j| (base + j * step) * multiplier)
                    .collect(),
            )
        })
        .collect()
}

/// Integer point whose distances are scaled down by 1000.
///
/// Most pairwise distances fall below 1, so squared distances shrink
/// further than plain distances.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CloseIntegerPoint(pub EuclideanIntegerPoint);

impl Clusterable for CloseIntegerPoint {
    fn distance_from(&self, other: &Self) -> f64 {
        self.0.distance_from(&other.0) * 0.001
    }

    fn centroid_of(points: &[&Self]) -> Self {
        let inner: Vec<&EuclideanIntegerPoint> = points.iter().map(|p| &p.0).collect();
        CloseIntegerPoint(EuclideanIntegerPoint::centroid_of(&inner))
    }
}

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
