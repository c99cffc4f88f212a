//! Command implementations for the EQD CLI.
//!
//! Provides subcommands that load the earthquake feed (with an offline
//! cache) and run it through the same pipeline the dashboard uses.

use clap::{Args, Subcommand};
use eqd_core::{NumericField, FEED_URL, MAX_CHART_POINTS, PAGE_SIZE};
use std::path::PathBuf;

pub mod query;
pub mod source;
pub mod worker;

/// Where the feed comes from.
#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    /// Feed URL to fetch
    #[arg(long, global = true, default_value = FEED_URL)]
    pub url: String,

    /// Read the feed from a local CSV file instead of fetching it
    #[arg(short = 'i', long, global = true)]
    pub input: Option<PathBuf>,

    /// Offline cache file (defaults to a file in the system temp dir)
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    /// Neither read nor write the offline cache
    #[arg(long, global = true)]
    pub no_cache: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summary statistics for the whole feed
    Stats,

    /// Search by place, event id or magnitude and print one page of results
    Search {
        /// Case-insensitive substring; empty matches everything
        query: String,

        /// 1-based page number (clamped to the available pages)
        #[arg(short = 'p', long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = PAGE_SIZE)]
        page_size: usize,
    },

    /// Downsample for charting and print the projected points as JSON
    Sample {
        #[arg(short = 'm', long, default_value_t = MAX_CHART_POINTS)]
        max_points: usize,

        /// Event id that must survive sampling (repeatable)
        #[arg(long = "pin")]
        pins: Vec<String>,

        /// X axis field key (mag, depth, latitude, ...)
        #[arg(short = 'x', long, default_value = "mag")]
        x: NumericField,

        /// Y axis field key
        #[arg(short = 'y', long, default_value = "depth")]
        y: NumericField,
    },
}

pub async fn run(feed: FeedArgs, command: Command) -> anyhow::Result<()> {
    let records = source::load_records(&feed).await?;
    match command {
        Command::Stats => {
            query::run_stats(&records, chrono::Utc::now());
            Ok(())
        }
        Command::Search {
            query,
            page,
            page_size,
        } => {
            query::run_search(&records, &query, page, page_size);
            Ok(())
        }
        Command::Sample {
            max_points,
            pins,
            x,
            y,
        } => query::run_sample(records, max_points, pins, x, y).await,
    }
}
