//! One depth pass over a snapshot, and the loop that runs it periodically.

use crate::{
    analysis::{FairValueOracle, PriceTable, estimate_spread, fair_ratio, locate_fair_value},
    depth::{
        NormalizedSide, RatioBounds, SideCurve, axis_labels, normalize_side, plot_points,
        side_geometry, top_count,
    },
    models::{GraphPayload, ListingBucket, OrderBookSnapshot, Side, SpreadEstimate},
    report::{self, DepthReport},
    utils::format_spread,
};
use tokio::sync::watch;
use tracing;

/// Curves, axis, geometry and fair-value marker for a book.
///
/// Takes the priced curves the spread was estimated on. `None` when neither
/// side has a priced entry or the plotted domain would be empty. Rest buckets
/// are drawn as tails one expansion step beyond the true bounds.
pub fn build_graph(
    offered: &NormalizedSide,
    wanted: &NormalizedSide,
    mut offered_curve: SideCurve,
    mut wanted_curve: SideCurve,
    spread: SpreadEstimate,
    fair_ratio: Option<f64>,
) -> Option<GraphPayload> {
    let bounds = RatioBounds::from_curves(&offered_curve, &wanted_curve)?;
    let axis = bounds.axis_range()?;
    let expansion = bounds.expansion_amount();
    offered_curve.extend_tail(offered.rest_count(), &bounds, expansion);
    wanted_curve.extend_tail(wanted.rest_count(), &bounds, expansion);

    let top = top_count(&offered_curve, &wanted_curve);
    let offered_points = plot_points(&offered_curve, &axis, top);
    let wanted_points = plot_points(&wanted_curve, &axis, top);

    let fair_value = locate_fair_value(&axis, fair_ratio);
    let labels = axis_labels(
        &axis,
        &bounds,
        &offered_curve,
        &wanted_curve,
        fair_value.as_ref(),
    );

    Some(GraphPayload {
        offered_geometry: side_geometry(Side::Offered, &offered_points),
        wanted_geometry: side_geometry(Side::Wanted, &wanted_points),
        offered: offered_points,
        wanted: wanted_points,
        axis,
        true_leftmost_ratio: bounds.leftmost,
        true_rightmost_ratio: bounds.rightmost,
        spread,
        fair_value,
        labels,
    })
}

/// Sum of listed counts, saturating at `i64::MAX`.
fn total_volume(buckets: &[ListingBucket]) -> i64 {
    buckets
        .iter()
        .fold(0i64, |acc, b| acc.saturating_add(b.listed_count))
}

/// Run the whole pipeline on one snapshot. Pure: the snapshot is only read
/// and nothing is retained between calls.
pub fn evaluate_snapshot(
    snapshot: &OrderBookSnapshot,
    oracle: Option<&dyn FairValueOracle>,
    depth: u32,
) -> DepthReport {
    let offered = normalize_side(&snapshot.offered_stock, Side::Offered);
    let wanted = normalize_side(&snapshot.wanted_stock, Side::Wanted);

    let offered_curve = SideCurve::build(&offered.entries, Side::Offered);
    let wanted_curve = SideCurve::build(&wanted.entries, Side::Wanted);

    let spread = estimate_spread(&offered_curve, &wanted_curve, depth);
    let fair = oracle
        .and_then(|o| fair_ratio(o, &snapshot.wanted_item, &snapshot.offered_item));
    let graph = build_graph(&offered, &wanted, offered_curve, wanted_curve, spread, fair);

    DepthReport {
        wanted_item: snapshot.wanted_item.clone(),
        offered_item: snapshot.offered_item.clone(),
        total_wanted_volume: total_volume(&snapshot.wanted_stock),
        total_offered_volume: total_volume(&snapshot.offered_stock),
        offered_rows: report::offered_rows(&offered),
        wanted_rows: report::wanted_rows(&wanted),
        depth,
        spread,
        spread_text: format_spread(spread),
        graph,
    }
}

/// Spawn the evaluation loop: once a second, rebuild the report from the
/// latest snapshot and log it.
pub fn spawn_depth_evaluator(
    mut snapshot_rx: watch::Receiver<Option<OrderBookSnapshot>>,
    prices: Option<PriceTable>,
    depth: u32,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
        let mut ticks: u64 = 0;

        loop {
            ticker.tick().await;
            ticks += 1;

            let changed = snapshot_rx.has_changed().unwrap_or(false);
            let Some(snapshot) = snapshot_rx.borrow_and_update().clone() else {
                if ticks % 5 == 0 {
                    tracing::info!("[HEARTBEAT] waiting for snapshot");
                }
                continue;
            };

            let oracle = prices.as_ref().map(|p| p as &dyn FairValueOracle);
            let report = evaluate_snapshot(&snapshot, oracle, depth);

            if changed {
                let axis = report.graph.as_ref().map(|g| (g.axis.min, g.axis.max));
                let fair_unit = report
                    .graph
                    .as_ref()
                    .and_then(|g| g.fair_value)
                    .map(|m| m.unit);
                tracing::info!(
                    wanted = %report.wanted_item.base_name,
                    offered = %report.offered_item.base_name,
                    total_wanted = report.total_wanted_volume,
                    total_offered = report.total_offered_volume,
                    depth = report.depth,
                    spread = %report.spread_text,
                    ?axis,
                    ?fair_unit,
                    "[DEPTH] book updated"
                );
                tracing::debug!("\n{}", report::render_text(&report));
            } else if ticks % 5 == 0 {
                tracing::info!(
                    spread = %report.spread_text,
                    total_wanted = report.total_wanted_volume,
                    total_offered = report.total_offered_volume,
                    "[HEARTBEAT] book unchanged"
                );
            }
        }
    })
}
