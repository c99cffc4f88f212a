//! Offline copy of the raw feed.
//!
//! The cache sits in front of ingestion and is invisible to the pipeline:
//! callers fetch from the network first and fall back to a cached body only
//! while it is younger than the retention window.

use crate::CACHE_RETENTION_HOURS;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedFeed {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub body: String,
}

impl CachedFeed {
    pub fn new(url: impl Into<String>, body: impl Into<String>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            fetched_at,
            body: body.into(),
        }
    }

    /// Default retention window.
    pub fn retention() -> Duration {
        Duration::hours(CACHE_RETENTION_HOURS)
    }

    /// True while `now` is within `retention` of the fetch time.
    pub fn is_fresh(&self, now: DateTime<Utc>, retention: Duration) -> bool {
        now >= self.fetched_at && now - self.fetched_at < retention
    }

    /// The cached body, if it belongs to `url` and has not expired.
    pub fn serve(&self, url: &str, now: DateTime<Utc>) -> Option<&str> {
        (self.url == url && self.is_fresh(now, Self::retention())).then_some(self.body.as_str())
    }
}
