//! Unit-space plot geometry.
//!
//! Everything here lives on the unit square: `u` runs along the ratio axis,
//! `v` is the log-scaled depth. A renderer only has to scale and offset.

use std::collections::HashSet;

use crate::depth::axis::RatioBounds;
use crate::depth::curve::{SideCurve, log_height};
use crate::models::{
    AxisLabel, AxisRange, FairValueMarker, PlotPoint, Side, SideGeometry, StepBar, UnitPoint,
};
use crate::utils::format_number;

/// Place a curve's plotted points (tail included) on the unit square.
pub fn plot_points(curve: &SideCurve, axis: &AxisRange, top: f64) -> Vec<PlotPoint> {
    curve
        .plotted()
        .into_iter()
        .map(|p| PlotPoint {
            ratio: p.ratio,
            cumulative_count: p.cumulative_count,
            unit: axis.ratio_to_unit(p.ratio),
            height: log_height(p.cumulative_count, top),
        })
        .collect()
}

/// Step bars and outline for one side.
///
/// Offered depth is anchored at the left edge and each step takes the height
/// of its right point; wanted depth is anchored at the right edge and each
/// step takes the height of its left point.
pub fn side_geometry(side: Side, points: &[PlotPoint]) -> SideGeometry {
    let mut uv: Vec<UnitPoint> = points
        .iter()
        .map(|p| UnitPoint {
            u: p.unit,
            v: p.height,
        })
        .collect();
    match side {
        Side::Offered => uv.insert(0, UnitPoint { u: 0.0, v: 0.0 }),
        Side::Wanted => uv.push(UnitPoint { u: 1.0, v: 0.0 }),
    }

    let bars: Vec<StepBar> = uv
        .windows(2)
        .map(|pair| {
            let (l, r) = (pair[0], pair[1]);
            let height = match side {
                Side::Offered => r.v,
                Side::Wanted => l.v,
            };
            StepBar {
                u_start: l.u,
                u_end: r.u,
                height,
            }
        })
        .collect();

    let mut outline = Vec::with_capacity(bars.len() * 2 + uv.len());
    for bar in &bars {
        outline.push(UnitPoint {
            u: bar.u_start,
            v: bar.height,
        });
        outline.push(UnitPoint {
            u: bar.u_end,
            v: bar.height,
        });
    }
    outline.extend(uv.iter().rev().map(|p| UnitPoint { u: p.u, v: 0.0 }));

    SideGeometry { bars, outline }
}

/// Label rows below the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelRow {
    Bounds,
    BestPrices,
    FairValue,
}

/// Collects labels, dropping repeated texts and giving each row a display
/// line in order of first use.
#[derive(Default)]
struct LabelLayout {
    seen: HashSet<String>,
    rows: Vec<LabelRow>,
    labels: Vec<AxisLabel>,
}

impl LabelLayout {
    fn push(&mut self, row: LabelRow, value: f64, unit: f64) {
        let text = format_number(value, 2, 0.2, false);
        if !self.seen.insert(text.clone()) {
            return;
        }
        let line = match self.rows.iter().position(|r| *r == row) {
            Some(line) => line,
            None => {
                self.rows.push(row);
                self.rows.len() - 1
            }
        };
        self.labels.push(AxisLabel { text, unit, line });
    }
}

/// Axis labels: true bounds at the plot edges, the best price of each side,
/// and the fair value when its marker is shown.
pub fn axis_labels(
    axis: &AxisRange,
    bounds: &RatioBounds,
    offered: &SideCurve,
    wanted: &SideCurve,
    fair_value: Option<&FairValueMarker>,
) -> Vec<AxisLabel> {
    let mut layout = LabelLayout::default();
    layout.push(LabelRow::Bounds, bounds.leftmost, 0.0);
    layout.push(LabelRow::Bounds, bounds.rightmost, 1.0);
    if let Some(best) = offered.nearest() {
        layout.push(LabelRow::BestPrices, best.ratio, axis.ratio_to_unit(best.ratio));
    }
    if let Some(best) = wanted.nearest() {
        layout.push(LabelRow::BestPrices, best.ratio, axis.ratio_to_unit(best.ratio));
    }
    if let Some(marker) = fair_value {
        layout.push(LabelRow::FairValue, marker.ratio, marker.unit);
    }
    layout.labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalizedEntry;

    fn point(unit: f64, height: f64) -> PlotPoint {
        PlotPoint {
            ratio: 0.0,
            cumulative_count: 0.0,
            unit,
            height,
        }
    }

    fn curve(ratios: &[f64], side: Side) -> SideCurve {
        let entries: Vec<NormalizedEntry> = ratios
            .iter()
            .map(|&ratio| NormalizedEntry {
                ratio,
                listed_count_in_wanted_units: 3.0,
            })
            .collect();
        SideCurve::build(&entries, side)
    }

    #[test]
    fn offered_steps_start_at_left_edge() {
        let geometry = side_geometry(Side::Offered, &[point(0.2, 0.9), point(0.4, 0.5)]);
        assert_eq!(
            geometry.bars,
            vec![
                StepBar {
                    u_start: 0.0,
                    u_end: 0.2,
                    height: 0.9
                },
                StepBar {
                    u_start: 0.2,
                    u_end: 0.4,
                    height: 0.5
                },
            ]
        );
        let outline: Vec<(f64, f64)> = geometry.outline.iter().map(|p| (p.u, p.v)).collect();
        assert_eq!(
            outline,
            vec![
                (0.0, 0.9),
                (0.2, 0.9),
                (0.2, 0.5),
                (0.4, 0.5),
                (0.4, 0.0),
                (0.2, 0.0),
                (0.0, 0.0),
            ]
        );
    }

    #[test]
    fn wanted_steps_end_at_right_edge() {
        let geometry = side_geometry(Side::Wanted, &[point(0.6, 0.4), point(0.8, 0.7)]);
        let bars: Vec<(f64, f64, f64)> = geometry
            .bars
            .iter()
            .map(|b| (b.u_start, b.u_end, b.height))
            .collect();
        assert_eq!(bars, vec![(0.6, 0.8, 0.4), (0.8, 1.0, 0.7)]);
        assert_eq!(geometry.outline.len(), 4 + 3);
        assert_eq!(geometry.outline.last(), Some(&UnitPoint { u: 0.6, v: 0.0 }));
    }

    #[test]
    fn empty_side_has_no_bars() {
        let geometry = side_geometry(Side::Wanted, &[]);
        assert!(geometry.bars.is_empty());
        assert_eq!(geometry.outline, vec![UnitPoint { u: 1.0, v: 0.0 }]);
    }

    #[test]
    fn plot_points_scale_to_axis() {
        let wanted = curve(&[1.0, 3.0], Side::Wanted);
        let axis = AxisRange { min: 0.0, max: 4.0 };
        let points = plot_points(&wanted, &axis, 6.0);
        assert_eq!(points[0].unit, 0.25);
        assert_eq!(points[1].unit, 0.75);
        assert!((points[1].height - 7f64.ln() / 6f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn labels_dedupe_and_compact_lines() {
        let offered = curve(&[0.5], Side::Offered);
        let wanted = curve(&[2.0], Side::Wanted);
        let bounds = RatioBounds::from_curves(&offered, &wanted).unwrap();
        let axis = bounds.axis_range().unwrap();
        let marker = FairValueMarker {
            ratio: 1.25,
            unit: axis.ratio_to_unit(1.25),
            height: 0.3,
        };
        let labels = axis_labels(&axis, &bounds, &offered, &wanted, Some(&marker));
        let got: Vec<(&str, usize)> = labels.iter().map(|l| (l.text.as_str(), l.line)).collect();
        // best prices repeat the bounds, so the fair value moves up to line 1
        assert_eq!(got, vec![("0.5", 0), ("2", 0), ("1.25", 1)]);
        assert_eq!(labels[0].unit, 0.0);
        assert_eq!(labels[1].unit, 1.0);
    }

    #[test]
    fn labels_use_reciprocal_for_small_ratios() {
        let offered = curve(&[0.1, 0.15], Side::Offered);
        let wanted = curve(&[0.18, 0.3], Side::Wanted);
        let bounds = RatioBounds::from_curves(&offered, &wanted).unwrap();
        let axis = bounds.axis_range().unwrap();
        let labels = axis_labels(&axis, &bounds, &offered, &wanted, None);
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["1/10", "0.3", "1/6.7", "1/5.6"]);
        assert_eq!(labels[2].line, 1);
    }
}
