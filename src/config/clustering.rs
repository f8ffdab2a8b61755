//! Clustering configuration section.

use serde::{Deserialize, Serialize};

use crate::cluster::{EmptyClusterStrategy, KMeansConfig, TieBreak, VarianceMeasure};

use super::defaults;

/// Clustering settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusteringSection {
    /// Recovery for clusters left empty by an assignment pass
    #[serde(default)]
    pub empty_cluster_strategy: EmptyClusterStrategy,

    /// Spread measure for the largest-variance strategy
    #[serde(default)]
    pub variance_measure: VarianceMeasure,

    /// Tie resolution during recovery
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Iteration cap passed to `cluster` by callers that use this section
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Random seed (None = seed from the OS)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ClusteringSection {
    fn default() -> Self {
        Self {
            empty_cluster_strategy: EmptyClusterStrategy::default(),
            variance_measure: VarianceMeasure::default(),
            tie_break: TieBreak::default(),
            max_iterations: defaults::max_iterations(),
            seed: None,
        }
    }
}

impl ClusteringSection {
    /// Convert to KMeansConfig
    pub fn to_kmeans_config(&self) -> KMeansConfig {
        KMeansConfig {
            empty_cluster_strategy: self.empty_cluster_strategy,
            variance_measure: self.variance_measure,
            tie_break: self.tie_break,
        }
    }
}
