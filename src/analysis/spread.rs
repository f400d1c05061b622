use crate::depth::SideCurve;
use crate::models::SpreadEstimate;

/// Price at which the side's depth first reaches `depth`, walking outward
/// from the crossing point. Falls back to the deepest priced point when the
/// side holds less than `depth` in total.
pub fn price_at_depth(curve: &SideCurve, depth: f64) -> Option<f64> {
    let mut deepest = None;
    for point in curve.outward() {
        if point.cumulative_count >= depth {
            return Some(point.ratio);
        }
        deepest = Some(point.ratio);
    }
    deepest
}

/// `(wanted / offered - 1) * 100` at the given depth.
///
/// Unknown when either side is empty, the book is inverted (negative spread)
/// or the result is not finite.
pub fn estimate_spread(offered: &SideCurve, wanted: &SideCurve, depth: u32) -> SpreadEstimate {
    let depth = f64::from(depth);
    let (Some(best_offered), Some(best_wanted)) =
        (price_at_depth(offered, depth), price_at_depth(wanted, depth))
    else {
        return SpreadEstimate::Unknown;
    };

    let spread = (best_wanted / best_offered - 1.0) * 100.0;
    if spread.is_finite() && spread >= 0.0 {
        SpreadEstimate::Percent(spread)
    } else {
        SpreadEstimate::Unknown
    }
}
