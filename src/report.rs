//! Listing tables and the plain-text summary of one depth pass.

use std::fmt::Write;

use crate::depth::NormalizedSide;
use crate::models::{GraphPayload, ItemRef, SpreadEstimate};
use crate::utils::format_number;

/// One table line: formatted ratio and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub ratio: String,
    pub count: String,
}

/// Everything one pass over a snapshot produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthReport {
    pub wanted_item: ItemRef,
    pub offered_item: ItemRef,
    pub total_wanted_volume: i64,
    pub total_offered_volume: i64,
    pub offered_rows: Vec<ListingRow>,
    pub wanted_rows: Vec<ListingRow>,
    pub depth: u32,
    pub spread: SpreadEstimate,
    pub spread_text: String,
    /// Absent when the book has no plottable domain.
    pub graph: Option<GraphPayload>,
}

fn ratio_text(ratio: f64) -> String {
    format_number(ratio, 2, 0.2, false)
}

/// Offered listings in input order, counts in wanted units. The rest bucket
/// becomes a trailing `<ratio` row converted through the last listed ratio.
pub fn offered_rows(side: &NormalizedSide) -> Vec<ListingRow> {
    let mut rows: Vec<ListingRow> = side
        .entries
        .iter()
        .map(|e| ListingRow {
            ratio: ratio_text(e.ratio),
            count: e.listed_count_in_wanted_units.to_string(),
        })
        .collect();
    if let (Some(rest), Some(last)) = (side.rest_count(), side.entries.last()) {
        rows.push(ListingRow {
            ratio: format!("<{}", ratio_text(last.ratio)),
            count: format!("{:.1}", rest as f64 / last.ratio),
        });
    }
    rows
}

/// Wanted listings in input order. The rest bucket becomes a trailing
/// `>ratio` row with its raw count.
pub fn wanted_rows(side: &NormalizedSide) -> Vec<ListingRow> {
    let mut rows: Vec<ListingRow> = side
        .entries
        .iter()
        .map(|e| ListingRow {
            ratio: ratio_text(e.ratio),
            count: e.listed_count_in_wanted_units.to_string(),
        })
        .collect();
    if let (Some(rest), Some(last)) = (side.rest_count(), side.entries.last()) {
        rows.push(ListingRow {
            ratio: format!(">{}", ratio_text(last.ratio)),
            count: rest.to_string(),
        });
    }
    rows
}

fn write_table(out: &mut String, title: &str, count_header: &str, rows: &[ListingRow]) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "  {:<10} {}", "Ratio", count_header);
    for row in rows {
        let _ = writeln!(out, "  {:<10} {}", row.ratio, row.count);
    }
}

/// Plain-text rendition of a report for terminals and logs.
pub fn render_text(report: &DepthReport) -> String {
    let mut out = String::new();
    write_table(
        &mut out,
        "Offered item listings",
        "Count (in wanted items)",
        &report.offered_rows,
    );
    write_table(&mut out, "Wanted item listings", "Count", &report.wanted_rows);

    if let Some(graph) = &report.graph {
        let labels: Vec<&str> = graph.labels.iter().map(|l| l.text.as_str()).collect();
        let _ = writeln!(out, "Axis: {}", labels.join(" | "));
    }

    let _ = writeln!(
        out,
        "Total {} volume: {}",
        report.wanted_item.base_name, report.total_wanted_volume
    );
    let _ = writeln!(
        out,
        "Total {} volume: {}",
        report.offered_item.base_name, report.total_offered_volume
    );
    let _ = writeln!(out, "Spread depth: {}", report.depth);
    let _ = write!(out, "Spread: {}", report.spread_text);
    out
}
