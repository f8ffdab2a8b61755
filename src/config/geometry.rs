//! Geometry configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Geometry settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometrySection {
    /// Tolerance for parallelism and boundary tests
    #[serde(default = "defaults::tolerance")]
    pub tolerance: f64,
}

impl Default for GeometrySection {
    fn default() -> Self {
        Self {
            tolerance: defaults::tolerance(),
        }
    }
}
