//! Clusterer configuration and policy enums.

use serde::{Deserialize, Serialize};

/// How to repopulate a cluster that lost all of its members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterStrategy {
    /// Take the farthest member of the cluster with the largest variance.
    #[default]
    LargestVariance,
    /// Take the farthest member of the most populated cluster.
    LargestPointsNumber,
    /// Take the point farthest from its own center, over all clusters.
    FarthestPoint,
}

/// Spread measure used by [`EmptyClusterStrategy::LargestVariance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceMeasure {
    /// Sum of squared member-to-center distances.
    #[default]
    SumOfSquares,
    /// Mean of squared member-to-center distances.
    MeanSquared,
    /// Sample variance (n - 1 denominator) of the member-to-center distances.
    DistanceVariance,
}

impl VarianceMeasure {
    /// Reduce member-to-center distances to a single spread value.
    ///
    /// Returns 0 for an empty input, and for a single distance under
    /// [`VarianceMeasure::DistanceVariance`].
    pub fn measure(&self, distances: &[f64]) -> f64 {
        let n = distances.len();
        if n == 0 {
            return 0.0;
        }

        let sum_sq: f64 = distances.iter().map(|d| d * d).sum();
        match self {
            VarianceMeasure::SumOfSquares => sum_sq,
            VarianceMeasure::MeanSquared => sum_sq / n as f64,
            VarianceMeasure::DistanceVariance => {
                if n < 2 {
                    return 0.0;
                }
                let mean = distances.iter().sum::<f64>() / n as f64;
                let dev: f64 = distances.iter().map(|d| (d - mean) * (d - mean)).sum();
                dev / (n - 1) as f64
            }
        }
    }
}

/// Which candidate wins when several score the same during recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the first candidate in cluster/member order.
    #[default]
    First,
    /// Prefer the last candidate in cluster/member order.
    Last,
}

impl TieBreak {
    /// Whether `candidate` replaces the current `best` score.
    #[inline]
    pub fn prefers(&self, candidate: f64, best: f64) -> bool {
        match self {
            TieBreak::First => candidate > best,
            TieBreak::Last => candidate >= best,
        }
    }
}

/// Configuration for [`KMeansPlusPlusClusterer`](super::KMeansPlusPlusClusterer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Recovery applied to clusters that end an assignment pass empty.
    /// Default: LargestVariance
    #[serde(default)]
    pub empty_cluster_strategy: EmptyClusterStrategy,

    /// Spread measure for the largest-variance strategy.
    /// Default: SumOfSquares
    #[serde(default)]
    pub variance_measure: VarianceMeasure,

    /// Tie resolution when selecting donor clusters and points.
    /// Default: First
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl KMeansConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the empty-cluster strategy.
    pub fn with_strategy(mut self, strategy: EmptyClusterStrategy) -> Self {
        self.empty_cluster_strategy = strategy;
        self
    }

    /// Builder-style setter for the variance measure.
    pub fn with_variance_measure(mut self, measure: VarianceMeasure) -> Self {
        self.variance_measure = measure;
        self
    }

    /// Builder-style setter for tie resolution.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = KMeansConfig::default();
        assert_eq!(
            config.empty_cluster_strategy,
            EmptyClusterStrategy::LargestVariance
        );
        assert_eq!(config.variance_measure, VarianceMeasure::SumOfSquares);
        assert_eq!(config.tie_break, TieBreak::First);
    }

    #[test]
    fn test_variance_measures() {
        let d = [1.0, 3.0];
        assert_relative_eq!(VarianceMeasure::SumOfSquares.measure(&d), 10.0);
        assert_relative_eq!(VarianceMeasure::MeanSquared.measure(&d), 5.0);
        assert_relative_eq!(VarianceMeasure::DistanceVariance.measure(&d), 2.0);

        assert_eq!(VarianceMeasure::DistanceVariance.measure(&[4.0]), 0.0);
        assert_eq!(VarianceMeasure::SumOfSquares.measure(&[]), 0.0);
    }

    #[test]
    fn test_tie_break() {
        assert!(!TieBreak::First.prefers(1.0, 1.0));
        assert!(TieBreak::Last.prefers(1.0, 1.0));
        assert!(TieBreak::First.prefers(2.0, 1.0));
        assert!(!TieBreak::Last.prefers(0.5, 1.0));
    }

    #[test]
    fn test_yaml_names() {
        let config = KMeansConfig::new()
            .with_strategy(EmptyClusterStrategy::FarthestPoint)
            .with_tie_break(TieBreak::Last);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("farthest_point"));

        let parsed: KMeansConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
