//! Feed loading: local file, or network first with the offline cache as a
//! fallback.
//!
//! A successful fetch always refreshes the cache. When the network fails, a
//! cached copy younger than the retention window is served instead; an
//! expired or missing copy lets the original error through.

use crate::FeedArgs;
use anyhow::Context;
use chrono::Utc;
use eqd_core::{
    cache::CachedFeed,
    feed::fetch_feed,
    normalize::{normalize, ColumnAliases},
    EarthquakeRecord, IngestionError,
};
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use log::{info, warn};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_CACHE_FILE: &str = "eqd-feed-cache.json.gz";

/// Load and normalize the feed described by `args`.
pub async fn load_records(args: &FeedArgs) -> anyhow::Result<Vec<EarthquakeRecord>> {
    let body = load_body(args).await?;
    let records = normalize(&body, &ColumnAliases::default())
        .context("Earthquake feed is not in the expected format")?;
    info!("[EQD] source: {} records ready", records.len());
    Ok(records)
}

async fn load_body(args: &FeedArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read feed file {}", path.display()));
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;
    let cache_path = cache_path(args);

    match fetch_feed(&client, &args.url).await {
        Ok(body) => {
            if let Some(path) = &cache_path {
                let entry = CachedFeed::new(args.url.clone(), body.clone(), Utc::now());
                if let Err(e) = write_cache(path, &entry) {
                    warn!("[EQD] source: could not update cache: {}", e);
                }
            }
            Ok(body)
        }
        Err(fetch_error) => {
            warn!("[EQD] source: fetch failed: {}", fetch_error);
            let cached = cache_path
                .as_deref()
                .and_then(|path| read_cache(path).ok())
                .and_then(|entry| {
                    entry
                        .serve(&args.url, Utc::now())
                        .map(|body| (entry.fetched_at, body.to_string()))
                });
            match cached {
                Some((fetched_at, body)) => {
                    info!("[EQD] source: serving cached copy from {}", fetched_at);
                    Ok(body)
                }
                None => Err(fetch_error.into()),
            }
        }
    }
}

fn cache_path(args: &FeedArgs) -> Option<PathBuf> {
    if args.no_cache {
        return None;
    }
    Some(
        args.cache
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_CACHE_FILE)),
    )
}

/// Write a cache entry as gzip-compressed JSON.
pub fn write_cache(path: &Path, entry: &CachedFeed) -> Result<(), IngestionError> {
    let file = File::create(path).map_err(|e| IngestionError::Cache(e.to_string()))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, entry).map_err(|e| IngestionError::Cache(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| IngestionError::Cache(e.to_string()))?;
    Ok(())
}

pub fn read_cache(path: &Path) -> Result<CachedFeed, IngestionError> {
    let file = File::open(path).map_err(|e| IngestionError::Cache(e.to_string()))?;
    let decoder = GzDecoder::new(BufReader::new(file));
    serde_json::from_reader(decoder).map_err(|e| IngestionError::Cache(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn args(cache: Option<PathBuf>, input: Option<PathBuf>) -> FeedArgs {
        FeedArgs {
            // Nothing listens on port 9; the fetch fails fast.
            url: "http://127.0.0.1:9/all_month.csv".to_string(),
            input,
            cache,
            no_cache: false,
        }
    }

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json.gz");
        let entry = CachedFeed::new("u", "id,mag\na,1.0\n", Utc::now());
        write_cache(&path, &entry).unwrap();
        assert_eq!(read_cache(&path).unwrap(), entry);
    }

    #[test]
    fn test_read_missing_cache_is_cache_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_cache(&dir.path().join("absent"));
        assert!(matches!(result, Err(IngestionError::Cache(_))));
    }

    #[test]
    fn test_no_cache_disables_path() {
        let mut feed = args(Some(PathBuf::from("x")), None);
        assert_eq!(cache_path(&feed), Some(PathBuf::from("x")));
        feed.no_cache = true;
        assert_eq!(cache_path(&feed), None);
    }

    #[tokio::test]
    async fn test_local_input_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.csv");
        std::fs::write(&path, "id,mag,place\nus1,4.5,Somewhere\nus2,,Nowhere\n").unwrap();
        let records = load_records(&args(None, Some(path))).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "us1");
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_fresh_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json.gz");
        let feed = args(Some(path.clone()), None);
        let entry = CachedFeed::new(feed.url.clone(), "id,mag\ncached,2.0\n", Utc::now());
        write_cache(&path, &entry).unwrap();

        let records = load_records(&feed).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "cached");
    }

    #[tokio::test]
    async fn test_fetch_failure_with_expired_cache_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json.gz");
        let feed = args(Some(path.clone()), None);
        let stale = CachedFeed::new(
            feed.url.clone(),
            "id,mag\ncached,2.0\n",
            Utc::now() - ChronoDuration::hours(3),
        );
        write_cache(&path, &stale).unwrap();

        assert!(load_records(&feed).await.is_err());
    }
}
