/// Error types for feed ingestion
use thiserror::Error;

/// The feed could not be loaded as a table at all.
///
/// Row-level data problems never produce this error; bad rows are dropped
/// by the normalizer. Every variant is fatal to the session and is shown to
/// the user as a single message with a retry affordance.
#[derive(Error, Debug)]
pub enum IngestionError {
    /// HTTP transport failed
    #[cfg(feature = "api")]
    #[error("Unable to load earthquake data: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unable to load earthquake data: server returned HTTP {0}")]
    Status(u16),

    /// Browser fetch rejected or body unreadable
    #[error("Unable to load earthquake data: {0}")]
    Fetch(String),

    /// Header row could not be read
    #[error("Unable to parse earthquake feed: {0}")]
    Csv(#[from] csv::Error),

    /// Input had no header row
    #[error("Unable to parse earthquake feed: no header row")]
    EmptyFeed,

    /// Header lacks a column every record needs
    #[error("Unable to parse earthquake feed: missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Offline cache could not be read or written
    #[error("Offline cache error: {0}")]
    Cache(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_one_prefix() {
        let status = IngestionError::Status(503).to_string();
        assert_eq!(status, "Unable to load earthquake data: server returned HTTP 503");
        assert_eq!(status.matches("Unable to").count(), 1);

        let fetch = IngestionError::Fetch("TypeError: NetworkError".to_string()).to_string();
        assert_eq!(fetch, "Unable to load earthquake data: TypeError: NetworkError");
        assert_eq!(
            IngestionError::MissingColumn("mag").to_string(),
            "Unable to parse earthquake feed: missing required column 'mag'"
        );
    }
}
