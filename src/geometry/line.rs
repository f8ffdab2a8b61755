//! Oriented infinite line in the plane.

use serde::{Deserialize, Serialize};

use super::intervals::{Bound, IntervalsSet};
use super::sub_line::SubLine;
use super::DEFAULT_TOLERANCE;
use crate::core::Vector2D;
use crate::core::math::{linear_combination, normalize_angle_positive};

/// An oriented line.
///
/// Stored in normal form: a unit direction `(cos, sin)` and the signed
/// offset of the origin. Points on the line are addressed by their
/// *abscissa*, the coordinate along the direction measured from the
/// projection of the origin.
///
/// # Offsets
///
/// ```text
/// offset(p) = sin * p.x - cos * p.y + origin_offset
/// ```
///
/// Positive on the right-hand side of the direction, negative on the left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    angle: f64,
    cos: f64,
    sin: f64,
    origin_offset: f64,
    tolerance: f64,
}

impl Line {
    /// Line through `p1` and `p2`, oriented from `p1` towards `p2`.
    ///
    /// Uses [`DEFAULT_TOLERANCE`].
    pub fn new(p1: Vector2D, p2: Vector2D) -> Self {
        Self::with_tolerance(p1, p2, DEFAULT_TOLERANCE)
    }

    /// Line through `p1` and `p2` with an explicit tolerance.
    ///
    /// Coincident points give the horizontal line through `p1`.
    pub fn with_tolerance(p1: Vector2D, p2: Vector2D, tolerance: f64) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let d = dx.hypot(dy);

        if d == 0.0 {
            return Self {
                angle: 0.0,
                cos: 1.0,
                sin: 0.0,
                origin_offset: p1.y,
                tolerance,
            };
        }

        // Direction from the deltas keeps axis-aligned lines exact
        let cos = dx / d;
        let sin = dy / d;
        Self {
            angle: normalize_angle_positive(dy.atan2(dx)),
            cos,
            sin,
            origin_offset: linear_combination(cos, p1.y, -sin, p1.x),
            tolerance,
        }
    }

    /// Line through `p` with direction `angle` (radians).
    pub fn from_angle(p: Vector2D, angle: f64, tolerance: f64) -> Self {
        let angle = normalize_angle_positive(angle);
        let (sin, cos) = angle.sin_cos();
        Self {
            angle,
            cos,
            sin,
            origin_offset: linear_combination(cos, p.y, -sin, p.x),
            tolerance,
        }
    }

    /// Direction angle in `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit direction vector.
    #[inline]
    pub fn direction(&self) -> Vector2D {
        Vector2D::new(self.cos, self.sin)
    }

    /// Signed offset of the origin.
    #[inline]
    pub fn origin_offset(&self) -> f64 {
        self.origin_offset
    }

    /// Tolerance used for parallelism and containment.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Abscissa of the projection of `p` onto the line.
    #[inline]
    pub fn abscissa(&self, p: Vector2D) -> f64 {
        linear_combination(self.cos, p.x, self.sin, p.y)
    }

    /// Point of the line at `abscissa`.
    #[inline]
    pub fn point_at(&self, abscissa: f64) -> Vector2D {
        Vector2D::new(
            linear_combination(abscissa, self.cos, -self.origin_offset, self.sin),
            linear_combination(abscissa, self.sin, self.origin_offset, self.cos),
        )
    }

    /// Point of the line at a possibly infinite bound.
    ///
    /// At infinity each coordinate becomes `±∞` following the direction
    /// (reversed for [`Bound::NegInfinity`]). A coordinate the direction
    /// does not move along keeps its finite value.
    pub fn point_at_bound(&self, bound: Bound) -> Vector2D {
        match bound {
            Bound::Finite(abscissa) => self.point_at(abscissa),
            Bound::NegInfinity => self.point_at_infinity(-1.0),
            Bound::PosInfinity => self.point_at_infinity(1.0),
        }
    }

    fn point_at_infinity(&self, sign: f64) -> Vector2D {
        let base = self.point_at(0.0);
        let coordinate = |component: f64, finite: f64| {
            if component.abs() < self.tolerance {
                finite
            } else {
                (sign * component).signum() * f64::INFINITY
            }
        };
        Vector2D::new(coordinate(self.cos, base.x), coordinate(self.sin, base.y))
    }

    /// Signed offset of `p` (positive on the right-hand side).
    #[inline]
    pub fn offset(&self, p: Vector2D) -> f64 {
        linear_combination(self.sin, p.x, -self.cos, p.y) + self.origin_offset
    }

    /// Unsigned distance from `p` to the line.
    #[inline]
    pub fn distance(&self, p: Vector2D) -> f64 {
        self.offset(p).abs()
    }

    /// True if `p` lies on the line within tolerance.
    #[inline]
    pub fn contains(&self, p: Vector2D) -> bool {
        self.distance(p) < self.tolerance
    }

    /// True if both lines have the same or opposite direction.
    #[inline]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        linear_combination(self.sin, other.cos, -self.cos, other.sin).abs() < self.tolerance
    }

    /// Crossing point of two lines, or `None` if they are parallel.
    pub fn intersection(&self, other: &Line) -> Option<Vector2D> {
        let d = linear_combination(self.sin, other.cos, -other.sin, self.cos);
        if d.abs() < self.tolerance {
            return None;
        }
        Some(Vector2D::new(
            linear_combination(self.cos, other.origin_offset, -other.cos, self.origin_offset) / d,
            linear_combination(self.sin, other.origin_offset, -other.sin, self.origin_offset) / d,
        ))
    }

    /// Same points, opposite orientation.
    pub fn reverse(&self) -> Line {
        Self {
            angle: normalize_angle_positive(self.angle + std::f64::consts::PI),
            cos: -self.cos,
            sin: -self.sin,
            origin_offset: -self.origin_offset,
            tolerance: self.tolerance,
        }
    }

    /// Sub-line covering the entire line.
    pub fn whole_line(&self) -> SubLine {
        SubLine::new(*self, IntervalsSet::full(self.tolerance))
    }
}
