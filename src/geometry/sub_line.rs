//! Sub-lines: a line restricted to a one-dimensional region.

use log::trace;
use serde::{Deserialize, Serialize};

use super::intervals::{Bound, IntervalsSet, Location};
use super::line::Line;
use super::segment::Segment;
use super::DEFAULT_TOLERANCE;
use crate::core::Vector2D;
use crate::core::math::linear_combination;

/// Part of a [`Line`] selected by an [`IntervalsSet`] of abscissas.
///
/// The region may be empty, bounded, half-infinite, the whole line, or a
/// union of disjoint intervals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubLine {
    line: Line,
    region: IntervalsSet,
}

/// Result of [`SubLine::split`].
#[derive(Clone, Debug, PartialEq)]
pub struct SplitSubLine {
    /// Part on the positive-offset (right-hand) side of the splitter
    pub plus: Option<SubLine>,
    /// Part on the negative-offset (left-hand) side of the splitter
    pub minus: Option<SubLine>,
}

impl SubLine {
    /// Sub-line from a line and a region of abscissas on it.
    pub fn new(line: Line, region: IntervalsSet) -> Self {
        Self { line, region }
    }

    /// Segment from `start` to `end` with [`DEFAULT_TOLERANCE`].
    pub fn from_endpoints(start: Vector2D, end: Vector2D) -> Self {
        Self::from_endpoints_with_tolerance(start, end, DEFAULT_TOLERANCE)
    }

    /// Segment from `start` to `end`, oriented from `start` towards `end`.
    pub fn from_endpoints_with_tolerance(start: Vector2D, end: Vector2D, tolerance: f64) -> Self {
        let line = Line::with_tolerance(start, end, tolerance);
        let region = IntervalsSet::new(line.abscissa(start), line.abscissa(end), tolerance);
        Self { line, region }
    }

    /// Sub-line covering a materialized segment on its own line.
    pub fn from_segment(segment: &Segment) -> Self {
        let line = *segment.line();
        let tolerance = line.tolerance();
        let (lower, upper) = segment.abscissa_range();
        let region = IntervalsSet::new(lower.to_f64(), upper.to_f64(), tolerance);
        Self { line, region }
    }

    /// Supporting line
    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Region of abscissas
    #[inline]
    pub fn region(&self) -> &IntervalsSet {
        &self.region
    }

    /// True if the region is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    /// Total length covered (infinite if unbounded).
    #[inline]
    pub fn length(&self) -> f64 {
        self.region.size()
    }

    /// One segment per interval of the region, in ascending abscissa.
    pub fn segments(&self) -> Vec<Segment> {
        self.region
            .intervals()
            .iter()
            .map(|interval| {
                Segment::new(
                    self.line.point_at_bound(interval.lower()),
                    self.line.point_at_bound(interval.upper()),
                    self.line,
                )
            })
            .collect()
    }

    /// Point where two sub-lines cross.
    ///
    /// Parallel supporting lines, coincident ones included, never
    /// intersect. Otherwise the crossing of the lines is returned when it
    /// lies in both regions: strictly inside when `include_end_points` is
    /// false, inside or on a boundary when it is true.
    pub fn intersection(&self, other: &SubLine, include_end_points: bool) -> Option<Vector2D> {
        let crossing = self.line.intersection(&other.line)?;

        let here = self.region.check_point(self.line.abscissa(crossing));
        let there = other.region.check_point(other.line.abscissa(crossing));
        trace!(
            "sub-line crossing at ({:.6}, {:.6}): {:?} / {:?}",
            crossing.x, crossing.y, here, there
        );

        let accepted = if include_end_points {
            here != Location::Outside && there != Location::Outside
        } else {
            here == Location::Inside && there == Location::Inside
        };
        accepted.then_some(crossing)
    }

    /// Split by a line into the parts on either side of it.
    ///
    /// When the lines cross, the region is cut at the crossing abscissa.
    /// When they are parallel the whole sub-line goes to one side, or to
    /// neither if it lies on the splitter within tolerance.
    pub fn split(&self, splitter: &Line) -> SplitSubLine {
        let tolerance = self.region.tolerance();

        let Some(crossing) = self.line.intersection(splitter) else {
            let offset = splitter.offset(self.line.point_at(0.0));
            return if offset < -tolerance {
                SplitSubLine {
                    plus: None,
                    minus: Some(self.clone()),
                }
            } else if offset > tolerance {
                SplitSubLine {
                    plus: Some(self.clone()),
                    minus: None,
                }
            } else {
                SplitSubLine {
                    plus: None,
                    minus: None,
                }
            };
        };

        let cut = self.line.abscissa(crossing);
        // Offset rate along this line's direction, independent of |cut|
        let (own, other) = (self.line.direction(), splitter.direction());
        let forward_is_plus = linear_combination(other.y, own.x, -other.x, own.y) > 0.0;

        let after = IntervalsSet::new(cut, f64::INFINITY, tolerance);
        let before = IntervalsSet::new(f64::NEG_INFINITY, cut, tolerance);
        let (plus_side, minus_side) = if forward_is_plus {
            (after, before)
        } else {
            (before, after)
        };

        SplitSubLine {
            plus: self.restricted(&plus_side),
            minus: self.restricted(&minus_side),
        }
    }

    /// Part of this sub-line inside `side`, or `None` if nothing remains
    /// beyond a boundary point.
    fn restricted(&self, side: &IntervalsSet) -> Option<SubLine> {
        let region = self.region.intersection(side);
        let tolerance = region.tolerance();
        let degenerate = region.intervals().iter().all(|i| match (i.lower(), i.upper()) {
            (Bound::Finite(a), Bound::Finite(b)) => b - a <= tolerance,
            _ => false,
        });
        if degenerate {
            None
        } else {
            Some(SubLine::new(self.line, region))
        }
    }
}
