//! k-means++ center selection.

use log::{debug, trace};
use rand::Rng;

use super::traits::Clusterable;

/// Choose `k` initial centers with the k-means++ rule.
///
/// Returns indices into `points`, in selection order. The first center is
/// drawn uniformly; each following one with probability proportional to
/// its squared distance to the nearest chosen center. An input element is
/// never chosen twice. Copies of an already chosen point weigh zero, so
/// they are only picked when every remaining candidate weighs zero, in
/// which case the first unchosen element is taken.
///
/// Requires `0 < k <= points.len()`.
pub(crate) fn kmeans_plus_plus<P, R>(points: &[P], k: usize, rng: &mut R) -> Vec<usize>
where
    P: Clusterable,
    R: Rng,
{
    let n = points.len();
    let mut chosen = vec![false; n];
    let mut seeds = Vec::with_capacity(k);

    let first = rng.random_range(0..n);
    chosen[first] = true;
    seeds.push(first);

    // Squared distance from each point to its nearest chosen center
    let mut min_d2: Vec<f64> = points
        .iter()
        .map(|p| {
            let d = p.distance_from(&points[first]);
            d * d
        })
        .collect();

    while seeds.len() < k {
        let total: f64 = (0..n).filter(|&i| !chosen[i]).map(|i| min_d2[i]).sum();

        let next = if total > 0.0 {
            sample_weighted(&min_d2, &chosen, rng.random::<f64>() * total)
        } else {
            None
        };
        // All remaining candidates coincide with chosen centers
        let Some(next) = next.or_else(|| (0..n).find(|&i| !chosen[i])) else {
            break;
        };

        trace!(
            "k-means++ picked point {} (weight {:.3e} of {:.3e})",
            next, min_d2[next], total
        );
        chosen[next] = true;
        seeds.push(next);

        for (i, p) in points.iter().enumerate() {
            if chosen[i] {
                continue;
            }
            let d = p.distance_from(&points[next]);
            min_d2[i] = min_d2[i].min(d * d);
        }
    }

    debug!("k-means++ seeded {} centers from {} points", seeds.len(), n);
    seeds
}

/// First unchosen index whose cumulative weight exceeds `threshold`.
///
/// Falls back to the last positive-weight candidate when rounding leaves
/// the threshold at the very top of the range.
fn sample_weighted(weights: &[f64], chosen: &[bool], threshold: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_positive = None;

    for (i, &w) in weights.iter().enumerate() {
        if chosen[i] || w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = Some(i);
        if cumulative > threshold {
            return Some(i);
        }
    }

    last_positive
}
