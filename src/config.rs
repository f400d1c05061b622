//! Configuration loader and application settings.

use crate::errors::{AppError, Result};
use std::path::PathBuf;

pub const DEFAULT_SPREAD_DEPTH: u32 = 1;
pub const DEFAULT_MAX_SPREAD_DEPTH: u32 = 100;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// Consolidated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file the host keeps the current order book snapshot in.
    pub snapshot_path: PathBuf,
    /// Optional JSON price table backing the fair-value marker.
    pub fair_value_path: Option<PathBuf>,
    /// Depth used for the spread estimate, within `1..=max_spread_depth`.
    pub spread_depth: u32,
    pub max_spread_depth: u32,
    /// Snapshot reload period.
    pub poll_interval_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path = lookup("SNAPSHOT_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| AppError::Config("SNAPSHOT_PATH must be set".into()))?;
        let fair_value_path = lookup("FAIR_VALUE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let max_spread_depth = match lookup("MAX_SPREAD_DEPTH") {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => DEFAULT_MAX_SPREAD_DEPTH,
        };
        if max_spread_depth == 0 {
            return Err(AppError::Config(
                "MAX_SPREAD_DEPTH must be at least 1".into(),
            ));
        }

        let spread_depth = match lookup("SPREAD_DEPTH") {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => DEFAULT_SPREAD_DEPTH,
        };
        let poll_interval_secs = match lookup("POLL_INTERVAL_SECS") {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            snapshot_path,
            fair_value_path,
            spread_depth: clamp_depth(spread_depth, max_spread_depth),
            max_spread_depth,
            poll_interval_secs,
        })
    }
}

/// Keep a requested depth inside `1..=max_depth`.
pub fn clamp_depth(depth: u32, max_depth: u32) -> u32 {
    depth.clamp(1, max_depth.max(1))
}
