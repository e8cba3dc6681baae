//! Engine configuration from the environment.
//!
//! `.env.local` and `.env` in the working directory are loaded first; real
//! environment variables win over both.

use std::path::PathBuf;

use crate::use_cases::missions::{TrackerConfig, UnresolvedContactPolicy};

pub const FEED_VAR: &str = "MISSIONWATCH_FEED";
pub const POLICY_VAR: &str = "MISSIONWATCH_UNRESOLVED_POLICY";
pub const CAPACITY_VAR: &str = "MISSIONWATCH_DEFERRED_CAPACITY";
pub const SUMMARY_JSON_VAR: &str = "MISSIONWATCH_SUMMARY_JSON";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid value '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Where feed events are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl FeedSource {
    /// `-` means stdin; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "-" => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub feed: FeedSource,
    pub tracker: TrackerConfig,
    /// Print mission updates as JSON lines rather than checklists
    pub summary_json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            feed: FeedSource::Stdin,
            tracker: TrackerConfig::default(),
            summary_json: true,
        }
    }
}

impl EngineConfig {
    /// Loads `.env` files, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        for filename in [".env.local", ".env"] {
            if std::path::Path::new(filename).exists() {
                let _ = dotenvy::from_filename(filename);
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(FEED_VAR) {
            config.feed = FeedSource::parse(&raw);
        }

        if let Some(raw) = lookup(POLICY_VAR) {
            config.tracker.unresolved = raw
                .parse::<UnresolvedContactPolicy>()
                .map_err(|reason| ConfigError::invalid(POLICY_VAR, &raw, reason))?;
        }

        if let Some(raw) = lookup(CAPACITY_VAR) {
            config.tracker.deferred_capacity = raw
                .trim()
                .parse::<usize>()
                .map_err(|err| ConfigError::invalid(CAPACITY_VAR, &raw, err.to_string()))?;
        }

        if let Some(raw) = lookup(SUMMARY_JSON_VAR) {
            config.summary_json = parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid(SUMMARY_JSON_VAR, &raw, "expected true or false"))?;
        }

        Ok(config)
    }

    /// A positional command line argument names the feed.
    pub fn with_feed_arg(mut self, arg: Option<String>) -> Self {
        if let Some(arg) = arg {
            self.feed = FeedSource::parse(&arg);
        }
        self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
