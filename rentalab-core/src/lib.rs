//! Rentalab Core — escandallo profitability engine.
//!
//! This crate contains everything below the presentation layer:
//! - Domain types (line items, the escandallo table, derived allocation values)
//! - Feed fetch over HTTPS and CSV ingestion/normalization
//! - The allocation engine (per-line share and allocated value)
//! - Ranking with percentile-based tiers and primary-line consolidation
//! - Multiselect filters and the single-owner session store
//! - TOML runtime configuration

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod filter;
pub mod ranking;
pub mod store;

pub use config::AppConfig;
pub use domain::{ColumnPresence, Derived, EscandalloTable, LineItem};
pub use filter::FilterSelection;
pub use ranking::{rank, Kpis, RankingBoard, RankingEntry, Tier};
pub use store::{LoadError, SessionStore};
