//! Unified configuration loading for Ganita.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ganita::config::GanitaConfig;
//!
//! // Load from default path (configs/ganita.yaml)
//! let config = GanitaConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = GanitaConfig::default();
//!
//! // Convert to runtime configs
//! let mut clusterer = config.clusterer();
//! let clusters = clusterer.cluster(&points, 3, config.clustering.max_iterations)?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`ClusteringSection`] | Empty-cluster strategy, policy knobs, iteration cap, seed |
//! | [`GeometrySection`] | Tolerance for parallelism and boundary tests |
//!
//! ## Example YAML
//!
//! ```yaml
//! clustering:
//!   empty_cluster_strategy: largest_variance   # or largest_points_number, farthest_point
//!   variance_measure: sum_of_squares           # or mean_squared, distance_variance
//!   tie_break: first                           # or last
//!   max_iterations: 100
//!   seed: 42                                   # omit to seed from the OS
//!
//! geometry:
//!   tolerance: 1.0e-10
//! ```

mod clustering;
mod defaults;
mod error;
mod ganita;
mod geometry;

// Re-export main types
pub use error::ConfigLoadError;
pub use ganita::GanitaConfig;

// Re-export section types
pub use clustering::ClusteringSection;
pub use geometry::GeometrySection;
