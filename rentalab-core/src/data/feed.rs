//! Published-sheet feed client.
//!
//! The source is a publicly reachable CSV document behind HTTPS. The fetch is
//! a single synchronous attempt: there is no retry or backoff policy, and a
//! failed fetch is fatal for the session.

use std::time::Duration;

use chrono::NaiveDateTime;

/// Errors from the feed fetch. All fatal.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Network(String),

    #[error("feed responded with HTTP {0}")]
    HttpStatus(u16),

    #[error("feed body could not be read: {0}")]
    Body(String),
}

/// One fetched copy of the feed, with provenance.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// Raw response body.
    pub bytes: Vec<u8>,
    /// BLAKE3 hex digest of the body. Identifies the session's data snapshot.
    pub feed_hash: String,
    /// Local time of the fetch.
    pub fetched_at: NaiveDateTime,
}

impl FeedSnapshot {
    /// Build a snapshot from already-fetched bytes (tests, fixtures).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let feed_hash = blake3::hash(&bytes).to_hex().to_string();
        Self {
            bytes,
            feed_hash,
            fetched_at: chrono::Local::now().naive_local(),
        }
    }

    /// Digest prefix for status-line display.
    pub fn short_hash(&self) -> &str {
        &self.feed_hash[..self.feed_hash.len().min(12)]
    }
}

/// Blocking HTTP client for the published sheet.
pub struct FeedClient {
    client: reqwest::blocking::Client,
}

impl FeedClient {
    pub fn new(timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("rentalab/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Fetch the feed once. Non-2xx statuses and transport errors are
    /// returned as errors; no partial snapshot is ever produced.
    pub fn fetch(&self, url: &str) -> Result<FeedSnapshot, FeedError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| FeedError::Body(e.to_string()))?
            .to_vec();

        Ok(FeedSnapshot::from_bytes(bytes))
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_hash_is_deterministic() {
        let a = FeedSnapshot::from_bytes(b"Escandallo\nE1\n".to_vec());
        let b = FeedSnapshot::from_bytes(b"Escandallo\nE1\n".to_vec());
        assert_eq!(a.feed_hash, b.feed_hash);
        assert_eq!(a.short_hash().len(), 12);
    }

    #[test]
    fn snapshot_hash_tracks_content() {
        let a = FeedSnapshot::from_bytes(b"Escandallo\nE1\n".to_vec());
        let b = FeedSnapshot::from_bytes(b"Escandallo\nE2\n".to_vec());
        assert_ne!(a.feed_hash, b.feed_hash);
    }
}
