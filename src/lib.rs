//! Core library for the market-depth project.
//!
//! Turns a two-sided exchange book of give/get listing buckets into
//! cumulative depth curves, a depth-weighted spread and a fair-value marker.
//! Every pass is a pure function of one snapshot; the binary (`main.rs`)
//! only feeds snapshots in and logs the results.

pub mod aggregator;
pub mod analysis;
pub mod config;
pub mod depth;
pub mod errors;
pub mod feed;
pub mod models;
pub mod report;
pub mod utils;
