//! Oriented lines and sub-lines in the plane.
//!
//! ## Components
//!
//! - [`Line`]: oriented line in normal form, abscissa mapping and offsets
//! - [`IntervalsSet`]: union of closed intervals on the line's abscissa
//! - [`SubLine`]: a line restricted to an [`IntervalsSet`]
//! - [`Segment`]: materialized piece of a sub-line, possibly unbounded
//!
//! ## Boundaries
//!
//! Regions carry a tolerance. A value within the tolerance of a finite
//! bound is [`Location::Boundary`], which is what separates inclusive from
//! strict [`SubLine::intersection`] queries.

mod intervals;
mod line;
mod segment;
mod sub_line;

pub use intervals::{Bound, Interval, IntervalsSet, Location};
pub use line::Line;
pub use segment::Segment;
pub use sub_line::{SplitSubLine, SubLine};

/// Tolerance used by constructors that do not take one.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
