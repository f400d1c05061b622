use crate::depth::curve::SideCurve;
use crate::models::AxisRange;

/// Share of the true span added as margin on each side of the plot.
pub const EXPANSION_COEFFICIENT: f64 = 0.05;

/// Outermost priced ratios across both sides, before any tail extrapolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBounds {
    pub leftmost: f64,
    pub rightmost: f64,
}

impl RatioBounds {
    /// First and last ratio of the offered points followed by the wanted
    /// points. `None` when both sides are empty.
    pub fn from_curves(offered: &SideCurve, wanted: &SideCurve) -> Option<Self> {
        let mut combined = offered.points.iter().chain(wanted.points.iter());
        let first = combined.next()?;
        let last = combined.last().unwrap_or(first);
        Some(Self {
            leftmost: first.ratio,
            rightmost: last.ratio,
        })
    }

    pub fn expansion_amount(&self) -> f64 {
        (self.rightmost - self.leftmost) * EXPANSION_COEFFICIENT
    }

    /// Plotted domain, two expansion amounts wider than the bounds on each
    /// side. `None` when the domain would be empty or not finite.
    pub fn axis_range(&self) -> Option<AxisRange> {
        let expansion = self.expansion_amount();
        let min = self.leftmost - 2.0 * expansion;
        let max = self.rightmost + 2.0 * expansion;
        (min.is_finite() && max.is_finite() && min < max).then_some(AxisRange { min, max })
    }
}

impl AxisRange {
    /// Position of `ratio` on the axis, 0 at `min` and 1 at `max`.
    pub fn ratio_to_unit(&self, ratio: f64) -> f64 {
        (ratio - self.min) / (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NormalizedEntry, Side};

    fn curve(ratios: &[f64], side: Side) -> SideCurve {
        let entries: Vec<NormalizedEntry> = ratios
            .iter()
            .map(|&ratio| NormalizedEntry {
                ratio,
                listed_count_in_wanted_units: 1.0,
            })
            .collect();
        SideCurve::build(&entries, side)
    }

    #[test]
    fn bounds_span_offered_then_wanted() {
        let offered = curve(&[0.8, 0.5], Side::Offered);
        let wanted = curve(&[1.5, 1.0], Side::Wanted);
        let bounds = RatioBounds::from_curves(&offered, &wanted).unwrap();
        assert_eq!(bounds.leftmost, 0.5);
        assert_eq!(bounds.rightmost, 1.5);
        assert!((bounds.expansion_amount() - 0.05).abs() < 1e-12);

        let axis = bounds.axis_range().unwrap();
        assert!((axis.min - 0.4).abs() < 1e-12);
        assert!((axis.max - 1.6).abs() < 1e-12);
        assert!((axis.ratio_to_unit(1.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn one_sided_books_use_that_side() {
        let empty = curve(&[], Side::Offered);
        let wanted = curve(&[2.0, 4.0], Side::Wanted);
        let bounds = RatioBounds::from_curves(&empty, &wanted).unwrap();
        assert_eq!((bounds.leftmost, bounds.rightmost), (2.0, 4.0));

        let offered = curve(&[2.0, 4.0], Side::Offered);
        let empty = curve(&[], Side::Wanted);
        let bounds = RatioBounds::from_curves(&offered, &empty).unwrap();
        assert_eq!((bounds.leftmost, bounds.rightmost), (2.0, 4.0));
    }

    #[test]
    fn empty_book_has_no_bounds() {
        let offered = curve(&[], Side::Offered);
        let wanted = curve(&[], Side::Wanted);
        assert!(RatioBounds::from_curves(&offered, &wanted).is_none());
    }

    #[test]
    fn zero_span_has_no_axis() {
        let offered = curve(&[0.5], Side::Offered);
        let wanted = curve(&[0.5], Side::Wanted);
        let bounds = RatioBounds::from_curves(&offered, &wanted).unwrap();
        assert_eq!(bounds.expansion_amount(), 0.0);
        assert!(bounds.axis_range().is_none());
    }

    #[test]
    fn unit_mapping_is_inclusive_at_edges() {
        let axis = AxisRange { min: 1.0, max: 3.0 };
        assert_eq!(axis.ratio_to_unit(1.0), 0.0);
        assert_eq!(axis.ratio_to_unit(3.0), 1.0);
        assert_eq!(axis.ratio_to_unit(0.0), -0.5);
    }
}
