use crate::depth::axis::RatioBounds;
use crate::models::{CumulativePoint, NormalizedEntry, Side};

/// Cumulative depth of one side of the book.
#[derive(Debug, Clone, PartialEq)]
pub struct SideCurve {
    pub side: Side,
    /// Priced points in plot order: offered runs from the farthest price to the
    /// nearest, wanted from the nearest to the farthest.
    pub points: Vec<CumulativePoint>,
    /// Synthetic point standing in for the rest bucket, placed beyond the
    /// outermost priced point.
    pub tail: Option<CumulativePoint>,
}

impl SideCurve {
    /// Sort entries outward from the crossing point and accumulate.
    ///
    /// Offered entries are accumulated from the highest ratio down, wanted
    /// entries from the lowest up. Equal ratios keep their input order.
    pub fn build(entries: &[NormalizedEntry], side: Side) -> Self {
        let mut sorted = entries.to_vec();
        match side {
            Side::Offered => sorted.sort_by(|a, b| b.ratio.total_cmp(&a.ratio)),
            Side::Wanted => sorted.sort_by(|a, b| a.ratio.total_cmp(&b.ratio)),
        }

        let mut running = 0.0;
        let mut points: Vec<CumulativePoint> = sorted
            .iter()
            .map(|entry| {
                running += entry.listed_count_in_wanted_units;
                CumulativePoint {
                    ratio: entry.ratio,
                    cumulative_count: running,
                }
            })
            .collect();

        if side == Side::Offered {
            points.reverse();
        }

        Self {
            side,
            points,
            tail: None,
        }
    }

    /// Priced points ordered from the crossing point outward.
    pub fn outward(&self) -> Box<dyn Iterator<Item = &CumulativePoint> + '_> {
        match self.side {
            Side::Offered => Box::new(self.points.iter().rev()),
            Side::Wanted => Box::new(self.points.iter()),
        }
    }

    /// The priced point closest to the crossing point.
    pub fn nearest(&self) -> Option<&CumulativePoint> {
        self.outward().next()
    }

    /// Attach the rest bucket as one extrapolated point `expansion` beyond the
    /// true outer bound. Offered rest volume is in offered units and is
    /// converted through the outermost priced ratio.
    pub fn extend_tail(&mut self, rest_count: Option<i64>, bounds: &RatioBounds, expansion: f64) {
        let Some(rest) = rest_count.filter(|&c| c > 0) else {
            return;
        };
        let rest = rest as f64;
        self.tail = match self.side {
            Side::Offered => self.points.first().map(|first| CumulativePoint {
                ratio: bounds.leftmost - expansion,
                cumulative_count: rest / first.ratio + first.cumulative_count,
            }),
            Side::Wanted => self.points.last().map(|last| CumulativePoint {
                ratio: bounds.rightmost + expansion,
                cumulative_count: rest + last.cumulative_count,
            }),
        };
    }

    /// Priced points with the tail placed at its end of the plot.
    pub fn plotted(&self) -> Vec<CumulativePoint> {
        let mut out = Vec::with_capacity(self.points.len() + 1);
        match (self.side, self.tail) {
            (Side::Offered, Some(tail)) => {
                out.push(tail);
                out.extend_from_slice(&self.points);
            }
            (Side::Wanted, Some(tail)) => {
                out.extend_from_slice(&self.points);
                out.push(tail);
            }
            (_, None) => out.extend_from_slice(&self.points),
        }
        out
    }

    /// Deepest cumulative count, tail included.
    pub fn total(&self) -> f64 {
        let plotted = self.plotted();
        let outer = match self.side {
            Side::Offered => plotted.first(),
            Side::Wanted => plotted.last(),
        };
        outer.map(|p| p.cumulative_count).unwrap_or(0.0)
    }
}

/// Count the log scale is normalized against: the deeper of the two sides.
pub fn top_count(offered: &SideCurve, wanted: &SideCurve) -> f64 {
    offered.total().max(wanted.total())
}

/// `ln(count + 1) / ln(top)`; zero when `top <= 1` since the scale collapses.
pub fn log_height(cumulative_count: f64, top: f64) -> f64 {
    if top <= 1.0 {
        return 0.0;
    }
    (cumulative_count + 1.0).ln() / top.ln()
}
