//! k-means++ clusterer with Lloyd refinement.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{EmptyClusterStrategy, KMeansConfig};
use super::recovery::Partition;
use super::seeding::kmeans_plus_plus;
use super::traits::Clusterable;
use super::types::Cluster;
use crate::config::ClusteringSection;
use crate::error::{Error, Result};

/// Partitions points into `k` clusters.
///
/// # Algorithm
///
/// 1. **Seeding**: k-means++ picks `k` distinct input elements as centers.
/// 2. **Iteration** (at most `max_iterations` times):
///    - assign every point to its nearest center (ties go to the lowest
///      cluster index), then refill empty clusters with the configured
///      [`EmptyClusterStrategy`]
///    - move every center to the centroid of its members
/// 3. **Convergence**: stop early once an assignment pass leaves every
///    membership unchanged and needed no recovery.
///
/// With `max_iterations == 0` the seeds are returned as centers together
/// with the nearest-seed partition.
///
/// # Random source
///
/// The clusterer owns its random source, so [`cluster`](Self::cluster)
/// takes `&mut self`. Share a clusterer between threads behind a lock, or
/// give each thread its own.
#[derive(Clone, Debug)]
pub struct KMeansPlusPlusClusterer<R = StdRng> {
    rng: R,
    config: KMeansConfig,
}

impl KMeansPlusPlusClusterer<StdRng> {
    /// Clusterer backed by a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Build from a configuration section.
    ///
    /// Without a configured seed the generator is seeded from the OS.
    pub fn from_config(section: &ClusteringSection) -> Self {
        let rng = match section.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_config(rng, section.to_kmeans_config())
    }
}

impl<R: Rng> KMeansPlusPlusClusterer<R> {
    /// Clusterer with the default [`EmptyClusterStrategy::LargestVariance`].
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, KMeansConfig::default())
    }

    /// Clusterer with an explicit empty-cluster strategy.
    pub fn with_strategy(rng: R, strategy: EmptyClusterStrategy) -> Self {
        Self::with_config(rng, KMeansConfig::new().with_strategy(strategy))
    }

    /// Clusterer with a full configuration.
    pub fn with_config(rng: R, config: KMeansConfig) -> Self {
        Self { rng, config }
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Bound empty-cluster strategy.
    #[inline]
    pub fn strategy(&self) -> EmptyClusterStrategy {
        self.config.empty_cluster_strategy
    }

    /// Cluster `points` into `k` groups.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `points` is empty, `k` is zero, or `k`
    ///   exceeds the number of distinct points
    /// - [`Error::ConvergenceFailure`] if an empty cluster cannot be refilled
    pub fn cluster<P: Clusterable>(
        &mut self,
        points: &[P],
        k: usize,
        max_iterations: usize,
    ) -> Result<Vec<Cluster<P>>> {
        validate(points, k)?;

        let seeds = kmeans_plus_plus(points, k, &mut self.rng);
        let mut partition = Partition {
            points,
            centers: seeds.iter().map(|&i| points[i].clone()).collect(),
            members: vec![Vec::new(); k],
        };

        let mut assignment = assign(&mut partition);
        partition.recover_empty_clusters(&self.config)?;
        sync_assignment(&partition, &mut assignment);

        let mut iterations = 0;
        while iterations < max_iterations {
            iterations += 1;
            recenter(&mut partition);

            let mut next = assign(&mut partition);
            let recovered = partition.recover_empty_clusters(&self.config)?;
            sync_assignment(&partition, &mut next);

            let moved = next.iter().zip(&assignment).filter(|(a, b)| a != b).count();
            trace!(
                "iteration {}: {} points moved, {} clusters refilled",
                iterations, moved, recovered
            );

            if moved == 0 && recovered == 0 {
                debug!("k-means converged after {} iterations", iterations);
                break;
            }
            assignment = next;

            if iterations == max_iterations {
                // Keep centers consistent with the final membership
                recenter(&mut partition);
                debug!("k-means stopped at max_iterations = {}", max_iterations);
            }
        }

        Ok(into_clusters(partition))
    }
}

/// Reject inputs k-means++ cannot seed.
fn validate<P: Clusterable>(points: &[P], k: usize) -> Result<()> {
    if points.is_empty() {
        return Err(Error::invalid_argument(
            "points",
            "clustering requires at least 1 point",
        ));
    }
    if k == 0 {
        return Err(Error::invalid_argument("k", "clustering requires k > 0"));
    }

    let distinct = count_distinct(points, k);
    if distinct < k {
        return Err(Error::invalid_argument(
            "k",
            format!("k={} exceeds the number of distinct points {}", k, distinct),
        ));
    }
    Ok(())
}

/// Number of distinct points (distance > 0), counting no further than `limit`.
fn count_distinct<P: Clusterable>(points: &[P], limit: usize) -> usize {
    let mut representatives: Vec<&P> = Vec::with_capacity(limit);
    for p in points {
        if representatives.iter().all(|r| r.distance_from(p) > 0.0) {
            representatives.push(p);
            if representatives.len() == limit {
                break;
            }
        }
    }
    representatives.len()
}

/// Assign every point to its nearest center and rebuild the member lists.
///
/// Returns the cluster index of each point.
fn assign<P: Clusterable>(partition: &mut Partition<'_, P>) -> Vec<usize> {
    for members in &mut partition.members {
        members.clear();
    }

    let mut assignment = Vec::with_capacity(partition.points.len());
    for (i, p) in partition.points.iter().enumerate() {
        let mut nearest = 0;
        let mut best = f64::INFINITY;
        for (c, center) in partition.centers.iter().enumerate() {
            let d = p.distance_from(center);
            if d < best {
                best = d;
                nearest = c;
            }
        }
        partition.members[nearest].push(i);
        assignment.push(nearest);
    }
    assignment
}

/// Reflect recovery moves in the per-point assignment.
fn sync_assignment<P>(partition: &Partition<'_, P>, assignment: &mut [usize]) {
    for (c, members) in partition.members.iter().enumerate() {
        for &i in members {
            assignment[i] = c;
        }
    }
}

/// Move each non-empty cluster's center to the centroid of its members.
fn recenter<P: Clusterable>(partition: &mut Partition<'_, P>) {
    let points = partition.points;
    for (center, members) in partition.centers.iter_mut().zip(&partition.members) {
        if members.is_empty() {
            continue;
        }
        let refs: Vec<&P> = members.iter().map(|&i| &points[i]).collect();
        *center = P::centroid_of(&refs);
    }
}

fn into_clusters<P: Clusterable>(partition: Partition<'_, P>) -> Vec<Cluster<P>> {
    let points = partition.points;
    partition
        .centers
        .into_iter()
        .zip(partition.members)
        .map(|(center, mut members)| {
            // Recovery uses swap_remove; restore input order
            members.sort_unstable();
            Cluster::with_points(center, members.iter().map(|&i| points[i].clone()).collect())
        })
        .collect()
}
