//! Core types and client-side data pipeline for the earthquake dashboard.
//!
//! Data flows one way:
//! raw CSV -> [`normalize`] -> full record set -> {[`sample`] -> chart,
//! [`search`] -> [`paginate`] -> table}, with [`table`] tracking the query
//! and page, [`selection`] shared by both views and [`stats`] feeding the
//! summary cards.

pub mod cache;
pub mod error;
#[cfg(feature = "api")]
pub mod feed;
pub mod normalize;
pub mod paginate;
pub mod project;
pub mod record;
pub mod sample;
pub mod search;
pub mod selection;
pub mod stats;
pub mod table;
pub mod ticket;
pub mod worker;

pub use error::IngestionError;
pub use record::{EarthquakeRecord, NumericField};

/// USGS summary feed: all earthquakes in the past 30 days.
pub const FEED_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.csv";

/// Upper bound on points drawn by the scatter chart.
pub const MAX_CHART_POINTS: usize = 2000;

/// Table rows per page.
pub const PAGE_SIZE: usize = 50;

/// Quiet period after the last keystroke before a search pass runs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a cached copy of the feed may be served when the network fails.
pub const CACHE_RETENTION_HOURS: i64 = 2;

/// Window used by the "Recent 24h" summary card.
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Number of page buttons shown in the pagination bar.
pub const PAGE_WINDOW: usize = 5;
