pub mod fair_value;
pub mod spread;

pub use fair_value::{
    FAIR_VALUE_MARKER_HEIGHT, FairValueOracle, PriceTable, fair_ratio, locate_fair_value,
};
pub use spread::{estimate_spread, price_at_depth};
