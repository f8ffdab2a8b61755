//! k-means++ clustering over generic points.
//!
//! ## Components
//!
//! - [`Clusterable`]: distance + centroid capability a point type provides
//! - [`EuclideanIntegerPoint`], [`EuclideanDoublePoint`]: ready-made points
//! - [`KMeansPlusPlusClusterer`]: seeding, Lloyd iterations, empty-cluster recovery
//! - [`Cluster`]: center plus member points
//! - [`KMeansConfig`]: strategy and policy knobs
//!
//! ## Empty Clusters
//!
//! | Strategy | Donor cluster | Point moved |
//! |----------|---------------|-------------|
//! | [`EmptyClusterStrategy::LargestVariance`] | largest [`VarianceMeasure`] | farthest from its center |
//! | [`EmptyClusterStrategy::LargestPointsNumber`] | most members | farthest from its center |
//! | [`EmptyClusterStrategy::FarthestPoint`] | any | farthest from its center overall |
//!
//! Only clusters with at least two members donate. Ties follow [`TieBreak`].
//!
//! ## Example
//!
//! ```rust
//! use ganita::cluster::{EmptyClusterStrategy, EuclideanDoublePoint, KMeansPlusPlusClusterer};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let points: Vec<_> = [[0.0, 0.0], [0.5, 0.1], [9.0, 9.0], [9.5, 8.8]]
//!     .iter()
//!     .map(|c| EuclideanDoublePoint::new(c.to_vec()))
//!     .collect();
//!
//! let mut clusterer = KMeansPlusPlusClusterer::with_strategy(
//!     StdRng::seed_from_u64(42),
//!     EmptyClusterStrategy::FarthestPoint,
//! );
//! let clusters = clusterer.cluster(&points, 2, 100)?;
//! assert!(clusters.iter().all(|c| c.len() == 2));
//! # Ok::<(), ganita::Error>(())
//! ```

mod clusterer;
mod config;
mod point;
mod recovery;
mod seeding;
mod traits;
mod types;

pub use clusterer::KMeansPlusPlusClusterer;
pub use config::{EmptyClusterStrategy, KMeansConfig, TieBreak, VarianceMeasure};
pub use point::{EuclideanDoublePoint, EuclideanIntegerPoint};
pub use traits::Clusterable;
pub use types::Cluster;
