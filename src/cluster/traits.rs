//! Point abstraction used by the clusterer.

/// A point that can be grouped by [`KMeansPlusPlusClusterer`].
///
/// Implementors supply their own metric and reduction, so clustering is not
/// tied to Euclidean space or to floating-point coordinates.
///
/// # Contract
///
/// - `distance_from` is symmetric, non-negative, and `a.distance_from(&a) == 0`.
/// - `centroid_of` is only called with a non-empty slice. The centroid of a
///   single point should be that point (up to the type's own rounding).
///
/// [`KMeansPlusPlusClusterer`]: super::KMeansPlusPlusClusterer
pub trait Clusterable: Clone {
    /// Distance between `self` and `other`.
    fn distance_from(&self, other: &Self) -> f64;

    /// Representative point of a non-empty collection.
    fn centroid_of(points: &[&Self]) -> Self;
}
