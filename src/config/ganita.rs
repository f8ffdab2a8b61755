//! Main GanitaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cluster::{KMeansConfig, KMeansPlusPlusClusterer};

use super::clustering::ClusteringSection;
use super::error::ConfigLoadError;
use super::geometry::GeometrySection;

/// Full Ganita configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct GanitaConfig {
    /// Clustering settings
    #[serde(default)]
    pub clustering: ClusteringSection,

    /// Geometry settings
    #[serde(default)]
    pub geometry: GeometrySection,
}

impl GanitaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/ganita.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/ganita.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let tolerance = self.geometry.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigLoadError::Invalid {
                field: "geometry.tolerance",
                reason: format!("must be finite and > 0, got {}", tolerance),
            });
        }
        Ok(())
    }

    /// Get the k-means config
    pub fn kmeans_config(&self) -> KMeansConfig {
        self.clustering.to_kmeans_config()
    }

    /// Build a clusterer from the clustering section
    pub fn clusterer(&self) -> KMeansPlusPlusClusterer {
        KMeansPlusPlusClusterer::from_config(&self.clustering)
    }

    /// Get geometry tolerance
    pub fn tolerance(&self) -> f64 {
        self.geometry.tolerance
    }
}
