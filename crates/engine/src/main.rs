//! missionwatch - replays a game feed through the mission tracker.
//!
//! Usage: `missionwatch [FEED]` where FEED is a JSON-lines file or `-` for
//! stdin. Mission updates go to stdout, logs to stderr.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use missionwatch_engine::infrastructure::feed;
use missionwatch_engine::{
    EngineConfig, FeedDispatcher, InMemoryContactRegistry, MissionBoard, MissionTracker,
};

const FEED_CHANNEL_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "missionwatch_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env()
        .context("Invalid missionwatch configuration")?
        .with_feed_arg(std::env::args().nth(1));

    tracing::info!(
        feed = ?config.feed,
        unresolved = %config.tracker.unresolved,
        deferred_capacity = config.tracker.deferred_capacity,
        "Starting missionwatch"
    );

    let registry = Arc::new(InMemoryContactRegistry::new());
    let mut tracker = MissionTracker::new(registry.clone(), config.tracker);
    tracker.add_listener(|mission| {
        tracing::debug!(mission = %mission, "Mission updated");
    });

    let board = Arc::new(MissionBoard::new());
    let dispatcher = FeedDispatcher::new(registry, tracker, Arc::clone(&board));

    let reader = feed::open(&config.feed)
        .await
        .with_context(|| format!("Failed to open feed {:?}", config.feed))?;
    let (events_tx, events_rx) = mpsc::channel(FEED_CHANNEL_CAPACITY);
    let feed_task = tokio::spawn(feed::read_feed(reader, events_tx));

    let summary_json = config.summary_json;
    let dispatched = dispatcher
        .run(events_rx, |notice| {
            if !summary_json {
                println!("{}\n", notice.summary.checklist());
                return;
            }
            match serde_json::to_string(&notice.summary) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::warn!(error = %err, "Failed to serialize mission summary"),
            }
        })
        .await;

    let stats = feed_task
        .await
        .context("Feed reader task panicked")?
        .context("Feed reader failed")?;

    tracing::info!(
        lines = stats.lines,
        events = stats.events,
        skipped = stats.skipped,
        notices = dispatched.notices,
        active = board.current().len(),
        "Feed finished"
    );

    Ok(())
}
