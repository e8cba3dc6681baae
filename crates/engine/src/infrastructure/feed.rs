//! JSON-lines feed reader.
//!
//! Each non-blank line is one [`FeedEvent`]. Lines starting with `#` are
//! comments. Malformed lines are logged and skipped so a single bad record
//! does not end a replay.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use missionwatch_shared::FeedEvent;

use crate::config::FeedSource;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Feed I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed feed line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Counters for one pass over a feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub lines: usize,
    pub events: usize,
    pub skipped: usize,
}

/// Parses one feed line. Blank lines and comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<FeedEvent>, FeedError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| FeedError::Malformed {
            line: line_no,
            source,
        })
}

/// Opens the configured feed for line-by-line reading.
pub async fn open(source: &FeedSource) -> Result<Box<dyn AsyncBufRead + Send + Unpin>, FeedError> {
    match source {
        FeedSource::Stdin => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
        FeedSource::File(path) => {
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Reads events until end of input, forwarding them in order.
///
/// Stops early, without error, if the receiving side has gone away.
pub async fn read_feed<R>(reader: R, events: mpsc::Sender<FeedEvent>) -> Result<FeedStats, FeedError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = FeedStats::default();

    while let Some(line) = lines.next_line().await? {
        stats.lines += 1;

        let event = match parse_line(stats.lines, &line) {
            Ok(Some(FeedEvent::Unknown)) => {
                tracing::debug!(line = stats.lines, "Skipping unknown feed event");
                stats.skipped += 1;
                continue;
            }
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(error = %err, "Skipping malformed feed line");
                stats.skipped += 1;
                continue;
            }
        };

        if events.send(event).await.is_err() {
            tracing::debug!(line = stats.lines, "Feed receiver closed, stopping");
            break;
        }
        stats.events += 1;
    }

    Ok(stats)
}
