//! # Ganita
//!
//! k-means++ clustering over arbitrary point types and 2D sub-line geometry.
//!
//! ## Overview
//!
//! Two independent components share this crate:
//!
//! - **Clustering** - [`KMeansPlusPlusClusterer`] partitions any
//!   [`Clusterable`] point set into `k` clusters using k-means++ seeding and
//!   Lloyd refinement, recovering from empty clusters with a configurable
//!   [`EmptyClusterStrategy`].
//! - **Geometry** - [`SubLine`] restricts an oriented [`Line`] to a
//!   one-dimensional [`IntervalsSet`], materializes its [`Segment`]s and
//!   intersects it with other sub-lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use ganita::{EuclideanIntegerPoint, KMeansPlusPlusClusterer};
//!
//! let points = vec![
//!     EuclideanIntegerPoint::new(vec![0, 0]),
//!     EuclideanIntegerPoint::new(vec![1, 0]),
//!     EuclideanIntegerPoint::new(vec![20, 20]),
//!     EuclideanIntegerPoint::new(vec![21, 20]),
//! ];
//!
//! let mut clusterer = KMeansPlusPlusClusterer::seeded(7);
//! let clusters = clusterer.cluster(&points, 2, 10).unwrap();
//! assert_eq!(clusters.len(), 2);
//! ```
//!
//! ```rust
//! use ganita::{SubLine, Vector2D};
//!
//! let horizontal = SubLine::from_endpoints(Vector2D::new(1.0, 1.0), Vector2D::new(3.0, 1.0));
//! let vertical = SubLine::from_endpoints(Vector2D::new(2.0, 0.0), Vector2D::new(2.0, 2.0));
//!
//! let crossing = horizontal.intersection(&vertical, false).unwrap();
//! assert!(crossing.distance(Vector2D::new(2.0, 1.0)) < 1e-12);
//! ```
//!
//! ## Coordinate System
//!
//! Lines are oriented. A point's *offset* from a line is positive on the
//! right-hand side of the line direction and negative on the left.

#![warn(missing_docs)]

// Error types
pub mod error;

// Shared 2D primitives
pub mod core;

// Unified configuration
pub mod config;

// k-means++ clustering
pub mod cluster;

// Lines, intervals and sub-lines
pub mod geometry;

// Re-export commonly used types
pub use cluster::{
    Cluster, Clusterable, EmptyClusterStrategy, EuclideanDoublePoint, EuclideanIntegerPoint,
    KMeansConfig, KMeansPlusPlusClusterer, TieBreak, VarianceMeasure,
};
pub use core::Vector2D;
pub use error::{Error, Result};
pub use geometry::{
    Bound, Interval, IntervalsSet, Line, Location, Segment, SplitSubLine, SubLine,
};
