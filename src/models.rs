//! Shared data structures used throughout the application.

use serde::{Deserialize, Serialize};

/// A discrete quote: `give` units offered for `get` units, listed `listed_count` times.
///
/// `give == 0 && get == 0` marks the "rest" bucket, the overflow quantity
/// outside the priced range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingBucket {
    pub give: u64,
    pub get: u64,
    pub listed_count: i64,
}

impl ListingBucket {
    pub fn new(give: u64, get: u64, listed_count: i64) -> Self {
        Self {
            give,
            get,
            listed_count,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.give == 0 && self.get == 0
    }
}

/// Which half of the book a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Offered,
    Wanted,
}

/// Priced bucket on the common ratio axis, quantity in wanted-item units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedEntry {
    pub ratio: f64,
    pub listed_count_in_wanted_units: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativePoint {
    pub ratio: f64,
    pub cumulative_count: f64,
}

/// Opaque handle of a traded item; only the display name is known here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub base_name: String,
}

impl ItemRef {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
        }
    }
}

/// Both sides of the exchange book as the host sees them in one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookSnapshot {
    #[serde(default)]
    pub offered_stock: Vec<ListingBucket>,
    #[serde(default)]
    pub wanted_stock: Vec<ListingBucket>,
    pub wanted_item: ItemRef,
    pub offered_item: ItemRef,
}

/// Plotted ratio domain. Only constructed with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Spread between the best wanted and best offered price at a given depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpreadEstimate {
    Percent(f64),
    Unknown,
}

impl SpreadEstimate {
    pub fn percent(&self) -> Option<f64> {
        match self {
            SpreadEstimate::Percent(p) => Some(*p),
            SpreadEstimate::Unknown => None,
        }
    }
}

/// A curve point placed on the unit square: `unit` along the ratio axis,
/// `height` on the log-scaled quantity axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub ratio: f64,
    pub cumulative_count: f64,
    pub unit: f64,
    pub height: f64,
}

/// Vertex of an outline in unit space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    pub u: f64,
    pub v: f64,
}

/// Filled column between `u_start` and `u_end`, from the baseline up to `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBar {
    pub u_start: f64,
    pub u_end: f64,
    pub height: f64,
}

/// Everything a renderer needs to draw one side's depth area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SideGeometry {
    pub bars: Vec<StepBar>,
    /// Closed polygon, last vertex connects back to the first.
    pub outline: Vec<UnitPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub unit: f64,
    /// Display line below the graph, 0 being the first.
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FairValueMarker {
    pub ratio: f64,
    pub unit: f64,
    pub height: f64,
}

/// Output of one visualization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPayload {
    pub offered: Vec<PlotPoint>,
    pub wanted: Vec<PlotPoint>,
    pub axis: AxisRange,
    pub true_leftmost_ratio: f64,
    pub true_rightmost_ratio: f64,
    pub spread: SpreadEstimate,
    pub fair_value: Option<FairValueMarker>,
    pub offered_geometry: SideGeometry,
    pub wanted_geometry: SideGeometry,
    pub labels: Vec<AxisLabel>,
}
