//! Default value functions for serde deserialization.

pub fn max_iterations() -> usize {
    100
}

pub fn tolerance() -> f64 {
    crate::geometry::DEFAULT_TOLERANCE
}
