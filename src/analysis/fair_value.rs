use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{AxisRange, FairValueMarker, ItemRef};

/// Height of the fair-value tick on the unit square.
pub const FAIR_VALUE_MARKER_HEIGHT: f64 = 0.3;

/// Reference valuation of items, e.g. a price index maintained by the host.
pub trait FairValueOracle {
    fn value_of(&self, item: &ItemRef) -> Option<f64>;
}

impl<F> FairValueOracle for F
where
    F: Fn(&ItemRef) -> Option<f64>,
{
    fn value_of(&self, item: &ItemRef) -> Option<f64> {
        self(item)
    }
}

/// Static value table keyed by item base name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new(prices: HashMap<String, f64>) -> Self {
        Self { prices }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FairValueOracle for PriceTable {
    fn value_of(&self, item: &ItemRef) -> Option<f64> {
        self.prices.get(&item.base_name).copied()
    }
}

/// Wanted value over offered value; absent if the oracle is missing either value.
pub fn fair_ratio(
    oracle: &dyn FairValueOracle,
    wanted: &ItemRef,
    offered: &ItemRef,
) -> Option<f64> {
    let wanted_value = oracle.value_of(wanted)?;
    let offered_value = oracle.value_of(offered)?;
    Some(wanted_value / offered_value)
}

/// Marker for `fair_ratio` when it lands inside the plotted domain,
/// bounds inclusive.
pub fn locate_fair_value(axis: &AxisRange, fair_ratio: Option<f64>) -> Option<FairValueMarker> {
    let ratio = fair_ratio?;
    let unit = axis.ratio_to_unit(ratio);
    (0.0..=1.0).contains(&unit).then_some(FairValueMarker {
        ratio,
        unit,
        height: FAIR_VALUE_MARKER_HEIGHT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PriceTable {
        PriceTable::new(HashMap::from([
            ("Chaos Orb".to_string(), 1.0),
            ("Divine Orb".to_string(), 150.0),
            ("Scrap".to_string(), 0.0),
        ]))
    }

    #[test]
    fn ratio_divides_wanted_by_offered() {
        let ratio = fair_ratio(&table(), &ItemRef::new("Divine Orb"), &ItemRef::new("Chaos Orb"));
        assert_eq!(ratio, Some(150.0));
    }

    #[test]
    fn missing_value_means_no_ratio() {
        let oracle = table();
        assert_eq!(
            fair_ratio(&oracle, &ItemRef::new("Mirror"), &ItemRef::new("Chaos Orb")),
            None
        );
        assert_eq!(
            fair_ratio(&oracle, &ItemRef::new("Chaos Orb"), &ItemRef::new("Mirror")),
            None
        );
    }

    #[test]
    fn closures_act_as_oracles() {
        let oracle = |item: &ItemRef| (item.base_name == "a").then_some(4.0);
        assert_eq!(fair_ratio(&oracle, &ItemRef::new("a"), &ItemRef::new("a")), Some(1.0));
        assert_eq!(fair_ratio(&oracle, &ItemRef::new("a"), &ItemRef::new("b")), None);
    }

    #[test]
    fn marker_bounds_are_inclusive() {
        let axis = AxisRange { min: 1.0, max: 3.0 };
        let low = locate_fair_value(&axis, Some(1.0)).unwrap();
        assert_eq!(low.unit, 0.0);
        let high = locate_fair_value(&axis, Some(3.0)).unwrap();
        assert_eq!(high.unit, 1.0);
        let mid = locate_fair_value(&axis, Some(2.0)).unwrap();
        assert_eq!(mid.unit, 0.5);
        assert_eq!(mid.height, FAIR_VALUE_MARKER_HEIGHT);
    }

    #[test]
    fn out_of_range_or_degenerate_ratio_is_omitted() {
        let axis = AxisRange { min: 1.0, max: 3.0 };
        assert!(locate_fair_value(&axis, Some(0.99)).is_none());
        assert!(locate_fair_value(&axis, Some(3.01)).is_none());
        assert!(locate_fair_value(&axis, None).is_none());
        assert!(locate_fair_value(&axis, Some(f64::NAN)).is_none());

        // a zero offered value divides to infinity
        let ratio = fair_ratio(&table(), &ItemRef::new("Chaos Orb"), &ItemRef::new("Scrap"));
        assert!(locate_fair_value(&axis, ratio).is_none());
    }
}
