//! One-dimensional regions: unions of closed intervals on the real line.
//!
//! Bounds use explicit [`Bound::NegInfinity`] / [`Bound::PosInfinity`]
//! sentinels instead of relying on IEEE infinities, so half-infinite and
//! full regions compare and print predictably.

use serde::{Deserialize, Serialize};

/// An interval end point.
///
/// Ordered as `NegInfinity < Finite(_) < PosInfinity`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Bound {
    /// Unbounded below
    NegInfinity,
    /// A finite abscissa
    Finite(f64),
    /// Unbounded above
    PosInfinity,
}

impl Bound {
    /// Convert an `f64`, mapping IEEE infinities to the sentinels.
    #[inline]
    pub fn from_f64(value: f64) -> Bound {
        if value == f64::NEG_INFINITY {
            Bound::NegInfinity
        } else if value == f64::INFINITY {
            Bound::PosInfinity
        } else {
            Bound::Finite(value)
        }
    }

    /// Convert back to `f64` (sentinels become IEEE infinities).
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Bound::NegInfinity => f64::NEG_INFINITY,
            Bound::Finite(v) => v,
            Bound::PosInfinity => f64::INFINITY,
        }
    }

    /// The finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            Bound::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// True if this bound lies strictly below `x`.
    #[inline]
    fn below(self, x: f64) -> bool {
        match self {
            Bound::NegInfinity => true,
            Bound::Finite(v) => v < x,
            Bound::PosInfinity => false,
        }
    }

    /// True if this bound lies strictly above `x`.
    #[inline]
    fn above(self, x: f64) -> bool {
        match self {
            Bound::NegInfinity => false,
            Bound::Finite(v) => v > x,
            Bound::PosInfinity => true,
        }
    }

    /// True if this bound is finite and within `tolerance` of `x`.
    #[inline]
    fn near(self, x: f64, tolerance: f64) -> bool {
        matches!(self, Bound::Finite(v) if (x - v).abs() < tolerance)
    }
}

fn min_bound(a: Bound, b: Bound) -> Bound {
    if b < a { b } else { a }
}

fn max_bound(a: Bound, b: Bound) -> Bound {
    if b > a { b } else { a }
}

/// Position of a value relative to a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Strictly inside, farther than the tolerance from any bound
    Inside,
    /// Outside the region
    Outside,
    /// Within the tolerance of a finite bound
    Boundary,
}

/// Closed interval `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    lower: Bound,
    upper: Bound,
}

impl Interval {
    /// Create an interval. Returns `None` if `upper < lower`.
    pub fn new(lower: Bound, upper: Bound) -> Option<Self> {
        if upper < lower {
            None
        } else {
            Some(Self { lower, upper })
        }
    }

    /// Lower bound
    #[inline]
    pub fn lower(&self) -> Bound {
        self.lower
    }

    /// Upper bound
    #[inline]
    pub fn upper(&self) -> Bound {
        self.upper
    }

    /// Length (infinite if either side is unbounded).
    pub fn length(&self) -> f64 {
        match (self.lower, self.upper) {
            (Bound::Finite(a), Bound::Finite(b)) => b - a,
            _ => f64::INFINITY,
        }
    }

    /// Locate `x` relative to this interval.
    pub fn locate(&self, x: f64, tolerance: f64) -> Location {
        if self.lower.near(x, tolerance) || self.upper.near(x, tolerance) {
            Location::Boundary
        } else if self.lower.below(x) && self.upper.above(x) {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}

/// A union of disjoint closed intervals with a boundary tolerance.
///
/// Intervals are kept sorted by lower bound. Neighbors never overlap; they
/// may share a single bound after a complement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalsSet {
    intervals: Vec<Interval>,
    tolerance: f64,
}

impl IntervalsSet {
    /// Single interval `[lower, upper]`; empty if `upper < lower`.
    ///
    /// IEEE infinities are accepted and become unbounded sides.
    pub fn new(lower: f64, upper: f64, tolerance: f64) -> Self {
        let intervals = Interval::new(Bound::from_f64(lower), Bound::from_f64(upper))
            .into_iter()
            .collect();
        Self {
            intervals,
            tolerance,
        }
    }

    /// The empty region.
    pub fn empty(tolerance: f64) -> Self {
        Self {
            intervals: Vec::new(),
            tolerance,
        }
    }

    /// The whole real line.
    pub fn full(tolerance: f64) -> Self {
        Self {
            intervals: vec![Interval {
                lower: Bound::NegInfinity,
                upper: Bound::PosInfinity,
            }],
            tolerance,
        }
    }

    /// Build from arbitrary intervals, sorting and merging overlaps.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>, tolerance: f64) -> Self {
        let mut sorted: Vec<Interval> = intervals.into_iter().collect();
        sorted.sort_by(|a, b| {
            a.lower
                .partial_cmp(&b.lower)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            if let Some(last) = merged.last_mut() {
                if interval.lower <= last.upper {
                    last.upper = max_bound(last.upper, interval.upper);
                    continue;
                }
            }
            merged.push(interval);
        }

        Self {
            intervals: merged,
            tolerance,
        }
    }

    /// Intervals in ascending order.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Boundary tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// True if the region contains nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// True if the region is the whole real line.
    pub fn is_full(&self) -> bool {
        matches!(
            self.intervals.as_slice(),
            [Interval {
                lower: Bound::NegInfinity,
                upper: Bound::PosInfinity,
            }]
        )
    }

    /// Total length of the region.
    pub fn size(&self) -> f64 {
        self.intervals.iter().map(Interval::length).sum()
    }

    /// Lowest bound, or `None` for the empty region.
    pub fn inf(&self) -> Option<Bound> {
        self.intervals.first().map(|i| i.lower)
    }

    /// Highest bound, or `None` for the empty region.
    pub fn sup(&self) -> Option<Bound> {
        self.intervals.last().map(|i| i.upper)
    }

    /// Locate `x` relative to the region.
    pub fn check_point(&self, x: f64) -> Location {
        let mut location = Location::Outside;
        for interval in &self.intervals {
            match interval.locate(x, self.tolerance) {
                Location::Inside => return Location::Inside,
                Location::Boundary => location = Location::Boundary,
                Location::Outside => {}
            }
        }
        location
    }

    /// Points in either region.
    pub fn union(&self, other: &IntervalsSet) -> IntervalsSet {
        Self::from_intervals(
            self.intervals.iter().chain(&other.intervals).copied(),
            self.tolerance,
        )
    }

    /// Points in both regions.
    pub fn intersection(&self, other: &IntervalsSet) -> IntervalsSet {
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.intervals.len() && j < other.intervals.len() {
            let a = self.intervals[i];
            let b = other.intervals[j];

            let lower = max_bound(a.lower, b.lower);
            let upper = min_bound(a.upper, b.upper);
            if let Some(overlap) = Interval::new(lower, upper) {
                result.push(overlap);
            }

            // Advance whichever interval ends first
            if a.upper < b.upper {
                i += 1;
            } else {
                j += 1;
            }
        }

        Self {
            intervals: result,
            tolerance: self.tolerance,
        }
    }

    /// Points not in the region (closure of the gaps between intervals).
    pub fn complement(&self) -> IntervalsSet {
        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);
        let mut previous = Bound::NegInfinity;

        for interval in &self.intervals {
            if previous < interval.lower {
                gaps.push(Interval {
                    lower: previous,
                    upper: interval.lower,
                });
            }
            previous = interval.upper;
        }
        if previous < Bound::PosInfinity {
            gaps.push(Interval {
                lower: previous,
                upper: Bound::PosInfinity,
            });
        }

        Self {
            intervals: gaps,
            tolerance: self.tolerance,
        }
    }

    /// Points in this region but not in `other`.
    pub fn difference(&self, other: &IntervalsSet) -> IntervalsSet {
        self.intersection(&other.complement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_bound_ordering() {
        assert!(Bound::NegInfinity < Bound::Finite(-1e300));
        assert!(Bound::Finite(1e300) < Bound::PosInfinity);
        assert!(Bound::Finite(1.0) < Bound::Finite(2.0));
        assert_eq!(Bound::from_f64(f64::NEG_INFINITY), Bound::NegInfinity);
        assert_eq!(Bound::from_f64(3.5).finite(), Some(3.5));
        assert_eq!(Bound::PosInfinity.to_f64(), f64::INFINITY);
    }

    #[test]
    fn test_reversed_bounds_are_empty() {
        assert!(IntervalsSet::new(2.0, 1.0, TOL).is_empty());
        assert!(Interval::new(Bound::PosInfinity, Bound::Finite(0.0)).is_none());
    }

    #[test]
    fn test_check_point() {
        let set = IntervalsSet::new(1.0, 3.0, TOL);
        assert_eq!(set.check_point(2.0), Location::Inside);
        assert_eq!(set.check_point(1.0), Location::Boundary);
        assert_eq!(set.check_point(3.0 + 1e-12), Location::Boundary);
        assert_eq!(set.check_point(0.5), Location::Outside);
        assert_eq!(set.check_point(3.5), Location::Outside);
    }

    #[test]
    fn test_check_point_unbounded() {
        let set = IntervalsSet::new(f64::NEG_INFINITY, 0.0, TOL);
        assert_eq!(set.check_point(-1e300), Location::Inside);
        assert_eq!(set.check_point(0.0), Location::Boundary);
        assert_eq!(set.check_point(1.0), Location::Outside);

        let full = IntervalsSet::full(TOL);
        assert_eq!(full.check_point(0.0), Location::Inside);
        assert_eq!(full.check_point(f64::MAX), Location::Inside);
    }

    #[test]
    fn test_union_keeps_disjoint_intervals() {
        let set = IntervalsSet::new(1.0, 2.0, TOL).union(&IntervalsSet::new(3.0, 4.0, TOL));
        assert_eq!(set.intervals().len(), 2);
        assert_relative_eq!(set.size(), 2.0);
        assert_eq!(set.inf(), Some(Bound::Finite(1.0)));
        assert_eq!(set.sup(), Some(Bound::Finite(4.0)));
    }

    #[test]
    fn test_union_merges_overlaps() {
        let set = IntervalsSet::new(3.0, 5.0, TOL)
            .union(&IntervalsSet::new(1.0, 2.0, TOL))
            .union(&IntervalsSet::new(2.0, 3.5, TOL));
        assert_eq!(set.intervals().len(), 1);
        assert_eq!(set.check_point(2.0), Location::Inside);
        assert_relative_eq!(set.size(), 4.0);
    }

    #[test]
    fn test_complement() {
        let full = IntervalsSet::full(TOL);
        assert!(full.complement().is_empty());
        assert!(IntervalsSet::empty(TOL).complement().is_full());

        let gaps = IntervalsSet::new(1.0, 2.0, TOL)
            .union(&IntervalsSet::new(3.0, 4.0, TOL))
            .complement();
        assert_eq!(gaps.intervals().len(), 3);
        assert_eq!(gaps.check_point(2.5), Location::Inside);
        assert_eq!(gaps.check_point(1.5), Location::Outside);
        assert_eq!(gaps.check_point(3.0), Location::Boundary);
        assert_eq!(gaps.size(), f64::INFINITY);
    }

    #[test]
    fn test_intersection_and_difference() {
        let a = IntervalsSet::new(0.0, 10.0, TOL);
        let b = IntervalsSet::new(2.0, 3.0, TOL).union(&IntervalsSet::new(8.0, 12.0, TOL));

        let both = a.intersection(&b);
        assert_eq!(both.intervals().len(), 2);
        assert_relative_eq!(both.size(), 3.0);

        let rest = a.difference(&b);
        assert_eq!(rest.intervals().len(), 2);
        assert_relative_eq!(rest.size(), 7.0);
        assert_eq!(rest.check_point(5.0), Location::Inside);
        assert_eq!(rest.check_point(9.0), Location::Outside);
    }
}
