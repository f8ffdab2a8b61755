//! Core types shared across Ganita.
//!
//! - [`Vector2D`]: point/displacement in the plane, infinite coordinates allowed
//! - [`math`]: small numeric helpers (linear combinations, angle wrapping)

pub mod math;
mod vector;

pub use vector::Vector2D;
