//! Materialized piece of a sub-line.

use serde::{Deserialize, Serialize};

use super::intervals::Bound;
use super::line::Line;
use crate::core::Vector2D;

/// A segment of a [`Line`] between two points.
///
/// End points of unbounded pieces carry infinite coordinates, see
/// [`Line::point_at_bound`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Vector2D,
    end: Vector2D,
    line: Line,
}

impl Segment {
    /// Create a segment. `start` and `end` are expected to lie on `line`.
    #[inline]
    pub fn new(start: Vector2D, end: Vector2D, line: Line) -> Self {
        Self { start, end, line }
    }

    /// Start point
    #[inline]
    pub fn start(&self) -> Vector2D {
        self.start
    }

    /// End point
    #[inline]
    pub fn end(&self) -> Vector2D {
        self.end
    }

    /// Supporting line
    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Abscissa range covered on the supporting line, lowest first.
    ///
    /// An infinite start maps to [`Bound::NegInfinity`] and an infinite
    /// end to [`Bound::PosInfinity`].
    pub fn abscissa_range(&self) -> (Bound, Bound) {
        let start = if self.start.is_infinite() {
            Bound::NegInfinity
        } else {
            Bound::Finite(self.line.abscissa(self.start))
        };
        let end = if self.end.is_infinite() {
            Bound::PosInfinity
        } else {
            Bound::Finite(self.line.abscissa(self.end))
        };
        if end < start { (end, start) } else { (start, end) }
    }

    /// Length of the segment (infinite for unbounded pieces).
    pub fn length(&self) -> f64 {
        match self.abscissa_range() {
            (Bound::Finite(a), Bound::Finite(b)) => b - a,
            _ => f64::INFINITY,
        }
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance(&self, p: Vector2D) -> f64 {
        let (lower, upper) = self.abscissa_range();
        let mut abscissa = self.line.abscissa(p);
        if let Some(lo) = lower.finite() {
            abscissa = abscissa.max(lo);
        }
        if let Some(hi) = upper.finite() {
            abscissa = abscissa.min(hi);
        }
        p.distance(self.line.point_at(abscissa))
    }
}
