use anyhow::Result;
use market_depth::{aggregator, config::AppConfig, feed, models::OrderBookSnapshot, utils};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;
    tracing::info!(
        snapshot = %config.snapshot_path.display(),
        spread_depth = config.spread_depth,
        max_spread_depth = config.max_spread_depth,
        poll_interval_secs = config.poll_interval_secs,
        "[INIT] market-depth starting"
    );

    // Fair-value oracle is optional; without it no marker is drawn
    let prices = match &config.fair_value_path {
        Some(path) => {
            let table = feed::load_price_table(path).await?;
            if table.is_empty() {
                tracing::warn!(path = %path.display(), "[INIT] price table is empty");
            } else {
                tracing::info!(items = table.len(), "[INIT] price table loaded");
            }
            Some(table)
        }
        None => None,
    };

    let (snapshot_tx, snapshot_rx) = watch::channel::<Option<OrderBookSnapshot>>(None);
    let feed_task = feed::spawn_snapshot_watcher(
        config.snapshot_path.clone(),
        config.poll_interval_secs,
        snapshot_tx,
    )
    .await?;
    tracing::info!("[INIT] snapshot watcher started");

    let evaluator_task =
        aggregator::spawn_depth_evaluator(snapshot_rx, prices, config.spread_depth);

    // Wait indefinitely for the tasks (they never finish)
    let _ = futures::join!(feed_task, evaluator_task);
    Ok(())
}
