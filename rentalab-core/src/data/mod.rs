//! Feed access and normalization.

pub mod feed;
pub mod ingest;
pub mod numeric;

pub use feed::{FeedClient, FeedError, FeedSnapshot};
pub use ingest::{load_bytes, IngestError};
