//! Order book depth: from raw listing buckets to plot-ready cumulative curves.

pub mod axis;
pub mod curve;
pub mod geometry;
pub mod normalize;

pub use axis::{EXPANSION_COEFFICIENT, RatioBounds};
pub use curve::{SideCurve, log_height, top_count};
pub use geometry::{axis_labels, plot_points, side_geometry};
pub use normalize::{NormalizedSide, normalize_side};
