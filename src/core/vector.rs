//! 2D vector type shared by the geometry module.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point or displacement in the Euclidean plane.
///
/// Coordinates may be infinite: segments of unbounded sub-lines end at
/// points at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

impl Vector2D {
    /// Origin of the plane.
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Vector2D) -> f64 {
        (*self - other).norm()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Vector2D) -> f64 {
        (*self - other).norm_squared()
    }

    /// Length of this vector
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length of this vector
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector with the same direction, or `self` for the zero vector.
    #[inline]
    pub fn normalized(&self) -> Vector2D {
        let len = self.norm();
        if len > 0.0 { *self * (1.0 / len) } else { *self }
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of the 3D cross product)
    #[inline]
    pub fn cross(&self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// True if either coordinate is infinite.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.x.is_infinite() || self.y.is_infinite())
    }

    /// True if either coordinate is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}
