//! k-means++ clustering integration tests.
//!
//! These tests run the full seeding, iteration and recovery pipeline on
//! fixed and randomized point sets.

mod common;

use std::collections::HashSet;

use ganita::{
    Cluster, EmptyClusterStrategy, Error, EuclideanIntegerPoint, KMeansConfig,
    KMeansPlusPlusClusterer, VarianceMeasure,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::CloseIntegerPoint;

const STRATEGIES: [EmptyClusterStrategy; 3] = [
    EmptyClusterStrategy::LargestVariance,
    EmptyClusterStrategy::LargestPointsNumber,
    EmptyClusterStrategy::FarthestPoint,
];

/// Sorted coordinates of every member of every cluster.
fn flattened(clusters: &[Cluster<EuclideanIntegerPoint>]) -> Vec<Vec<i32>> {
    let mut all: Vec<Vec<i32>> = clusters
        .iter()
        .flat_map(|c| c.points().iter().map(|p| p.point().to_vec()))
        .collect();
    all.sort();
    all
}

fn sorted_coords(points: &[EuclideanIntegerPoint]) -> Vec<Vec<i32>> {
    let mut all: Vec<Vec<i32>> = points.iter().map(|p| p.point().to_vec()).collect();
    all.sort();
    all
}

// ============================================================================
// Fixed Scenarios
// ============================================================================

#[test]
fn test_three_groups_recovered() {
    common::init_logging();
    let points = common::three_groups();

    let mut clusterer = KMeansPlusPlusClusterer::seeded(common::SEED);
    let clusters = clusterer.cluster(&points, 3, 10).unwrap();

    assert_eq!(clusters.len(), 3);
    let (mut left, mut low, mut right) = (false, false, false);
    for cluster in &clusters {
        let center = cluster.center().point();
        if center[0] < 0 {
            left = true;
            assert_eq!(cluster.len(), 8);
            assert_eq!(center, &[-14, 4]);
        } else if center[1] < 0 {
            low = true;
            assert_eq!(cluster.len(), 5);
            assert_eq!(center, &[0, -1]);
        } else {
            right = true;
            assert_eq!(cluster.len(), 8);
            assert_eq!(center, &[15, 5]);
        }
    }
    assert!(left && low && right);
}

#[test]
fn test_two_points_one_cluster() {
    let points = common::int_points(&[[1959, 325100], [1960, 373200]]);
    let mut clusterer = KMeansPlusPlusClusterer::seeded(common::SEED);

    let clusters = clusterer.cluster(&points, 1, 1).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 2);
    assert!(clusters[0].points().contains(&points[0]));
    assert!(clusters[0].points().contains(&points[1]));
}

#[test]
fn test_breaking_points_never_lose_clusters() {
    common::init_logging();
    let points = common::breaking_points(27);

    for strategy in STRATEGIES {
        let mut clusterer =
            KMeansPlusPlusClusterer::with_strategy(StdRng::seed_from_u64(common::SEED), strategy);

        for k in 2..27 {
            let clusters = clusterer.cluster(&points, k, 100).unwrap();
            assert_eq!(clusters.len(), k, "{:?} with k={}", strategy, k);
            assert!(
                clusters.iter().all(|c| !c.is_empty()),
                "{:?} with k={} returned an empty cluster",
                strategy,
                k
            );

            let total: usize = clusters.iter().map(Cluster::len).sum();
            assert_eq!(total, points.len());
        }
    }
}

#[test]
fn test_small_distances_seed_only() {
    for (unique, stride) in [(1, 1), (3, 7), (10, 10), (5, 2)] {
        let mut points: Vec<CloseIntegerPoint> = (0..10_000)
            .map(|i| CloseIntegerPoint(EuclideanIntegerPoint::new(vec![stride * i])))
            .collect();
        points.push(CloseIntegerPoint(EuclideanIntegerPoint::new(vec![unique])));

        let mut clusterer = KMeansPlusPlusClusterer::seeded(0);
        let clusters = clusterer.cluster(&points, 2, 0).unwrap();

        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| !c.is_empty()));
        let total: usize = clusters.iter().map(Cluster::len).sum();
        assert_eq!(total, points.len());
    }
}

#[test]
fn test_too_few_distinct_points() {
    let points = common::int_points(&[[4, 4], [4, 4], [4, 4], [9, 1]]);
    let mut clusterer = KMeansPlusPlusClusterer::seeded(3);

    let err = clusterer.cluster(&points, 3, 10).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "k", .. }));

    let clusters = clusterer.cluster(&points, 2, 10).unwrap();
    let centers: HashSet<_> = clusters.iter().map(|c| c.center().clone()).collect();
    assert_eq!(centers.len(), 2);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_random_sets_partition_input() {
    let mut rng = StdRng::seed_from_u64(2024);

    for round in 0..60 {
        let n = rng.random_range(1..40);
        let points: Vec<EuclideanIntegerPoint> = (0..n)
            .map(|_| {
                EuclideanIntegerPoint::new(vec![
                    rng.random_range(-20..=20),
                    rng.random_range(-20..=20),
                ])
            })
            .collect();
        let distinct = points.iter().collect::<HashSet<_>>().len();
        let k = rng.random_range(1..=distinct.min(6));
        let strategy = STRATEGIES[round % STRATEGIES.len()];
        let config = KMeansConfig::new()
            .with_strategy(strategy)
            .with_variance_measure(VarianceMeasure::DistanceVariance);

        let mut clusterer =
            KMeansPlusPlusClusterer::with_config(StdRng::seed_from_u64(round as u64), config);
        let clusters = clusterer.cluster(&points, k, 20).unwrap();

        assert_eq!(clusters.len(), k);
        assert!(clusters.iter().all(|c| !c.is_empty()));
        assert_eq!(flattened(&clusters), sorted_coords(&points));
    }
}

#[test]
fn test_same_seed_same_result() {
    let points = common::breaking_points(27);
    for strategy in STRATEGIES {
        let run = || {
            KMeansPlusPlusClusterer::with_strategy(StdRng::seed_from_u64(77), strategy)
                .cluster(&points, 9, 50)
                .unwrap()
        };
        assert_eq!(run(), run());
    }
}

#[test]
fn test_extra_iteration_after_convergence_is_noop() {
    let points = common::three_groups();
    let a = KMeansPlusPlusClusterer::seeded(common::SEED)
        .cluster(&points, 3, 100)
        .unwrap();
    let b = KMeansPlusPlusClusterer::seeded(common::SEED)
        .cluster(&points, 3, 101)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_iterations_centers_are_inputs() {
    let points = common::three_groups();
    let clusters = KMeansPlusPlusClusterer::seeded(5)
        .cluster(&points, 3, 0)
        .unwrap();

    for cluster in &clusters {
        assert!(points.contains(cluster.center()));
    }
    assert_eq!(flattened(&clusters), sorted_coords(&points));
}
