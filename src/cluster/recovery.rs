//! Empty-cluster recovery.
//!
//! After an assignment pass a cluster can end up with no members, typically
//! when its center drifted behind another one. Each strategy picks a donor
//! member from a cluster that keeps at least one point afterwards, and the
//! empty cluster restarts as a singleton centered on that member.

use log::debug;

use super::config::{EmptyClusterStrategy, KMeansConfig, TieBreak};
use super::traits::Clusterable;
use crate::error::{Error, Result};

/// Working partition for one `cluster` call.
///
/// `members[c]` lists indices into the input point slice.
pub(crate) struct Partition<'a, P> {
    pub points: &'a [P],
    pub centers: Vec<P>,
    pub members: Vec<Vec<usize>>,
}

/// A member chosen to move: its cluster and position in that cluster's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Donor {
    pub cluster: usize,
    pub position: usize,
}

impl<'a, P: Clusterable> Partition<'a, P> {
    /// Refill every empty cluster, in cluster order.
    ///
    /// Returns the number of clusters that were repopulated.
    pub fn recover_empty_clusters(&mut self, config: &KMeansConfig) -> Result<usize> {
        let mut recovered = 0;

        for empty in 0..self.members.len() {
            if !self.members[empty].is_empty() {
                continue;
            }

            let donor = select_donor(config, self).ok_or_else(|| {
                Error::ConvergenceFailure(format!(
                    "cluster {} is empty and no cluster has two or more points to give ({:?})",
                    empty, config.empty_cluster_strategy
                ))
            })?;

            let point = self.members[donor.cluster].swap_remove(donor.position);
            debug!(
                "empty cluster {} takes point {} from cluster {} ({:?})",
                empty, point, donor.cluster, config.empty_cluster_strategy
            );
            self.centers[empty] = self.points[point].clone();
            self.members[empty].push(point);
            recovered += 1;
        }

        Ok(recovered)
    }

    /// Distances of a cluster's members to its center.
    fn member_distances(&self, cluster: usize) -> Vec<f64> {
        let center = &self.centers[cluster];
        self.members[cluster]
            .iter()
            .map(|&i| self.points[i].distance_from(center))
            .collect()
    }
}

/// Pick the member handed to an empty cluster, or `None` if no cluster can
/// spare one.
pub(crate) fn select_donor<P: Clusterable>(
    config: &KMeansConfig,
    partition: &Partition<'_, P>,
) -> Option<Donor> {
    let tie = config.tie_break;
    let donors = (0..partition.members.len()).filter(|&c| partition.members[c].len() >= 2);

    match config.empty_cluster_strategy {
        EmptyClusterStrategy::LargestVariance => {
            let cluster = arg_max(
                donors.map(|c| {
                    let spread = config
                        .variance_measure
                        .measure(&partition.member_distances(c));
                    (c, spread)
                }),
                tie,
            )?;
            farthest_member(partition, cluster, tie)
        }
        EmptyClusterStrategy::LargestPointsNumber => {
            let cluster = arg_max(donors.map(|c| (c, partition.members[c].len() as f64)), tie)?;
            farthest_member(partition, cluster, tie)
        }
        EmptyClusterStrategy::FarthestPoint => {
            let mut best: Option<(Donor, f64)> = None;
            for cluster in donors {
                let Some(donor) = farthest_member(partition, cluster, tie) else {
                    continue;
                };
                let distance = partition.points[partition.members[cluster][donor.position]]
                    .distance_from(&partition.centers[cluster]);
                if best.is_none_or(|(_, d)| tie.prefers(distance, d)) {
                    best = Some((donor, distance));
                }
            }
            best.map(|(donor, _)| donor)
        }
    }
}

/// Member of `cluster` farthest from the cluster's center.
fn farthest_member<P: Clusterable>(
    partition: &Partition<'_, P>,
    cluster: usize,
    tie: TieBreak,
) -> Option<Donor> {
    let distances = partition.member_distances(cluster);
    arg_max(distances.into_iter().enumerate(), tie).map(|position| Donor { cluster, position })
}

/// Key of the highest score, ties resolved by `tie`.
fn arg_max(scores: impl Iterator<Item = (usize, f64)>, tie: TieBreak) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (key, score) in scores {
        if best.is_none_or(|(_, b)| tie.prefers(score, b)) {
            best = Some((key, score));
        }
    }
    best.map(|(key, _)| key)
}
