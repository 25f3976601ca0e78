//! Session state — the single-owner mutable table, edits, and reset.
//!
//! The table is loaded once per session, mutated in place only by price
//! edits, and fully recomputed (never incrementally patched) after each one.
//! There is no ambient global: the store is passed by reference to whoever
//! needs it.

use crate::data::{FeedClient, FeedError, FeedSnapshot, IngestError};
use crate::domain::EscandalloTable;
use crate::engine;

/// Errors while building the session. Fatal — on failure there is no store,
/// and therefore no partially-initialized state to leak.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Exclusive owner of the session's line-item table.
pub struct SessionStore {
    table: EscandalloTable,
    feed_hash: String,
    fetched_at: chrono::NaiveDateTime,
}

impl SessionStore {
    /// Fetch, ingest, and derive: the full startup pass.
    pub fn load(client: &FeedClient, url: &str) -> Result<Self, LoadError> {
        let snapshot = client.fetch(url)?;
        Self::from_snapshot(snapshot)
    }

    /// Build the store from an already-fetched snapshot.
    pub fn from_snapshot(snapshot: FeedSnapshot) -> Result<Self, LoadError> {
        let mut table = crate::data::load_bytes(&snapshot.bytes)?;
        engine::recalculate(&mut table);
        Ok(Self {
            table,
            feed_hash: snapshot.feed_hash,
            fetched_at: snapshot.fetched_at,
        })
    }

    pub fn table(&self) -> &EscandalloTable {
        &self.table
    }

    pub fn feed_hash(&self) -> &str {
        &self.feed_hash
    }

    pub fn fetched_at(&self) -> chrono::NaiveDateTime {
        self.fetched_at
    }

    /// Write a new price onto every row keyed `(escandallo, codigo)`, then
    /// recompute the whole table. Returns the number of rows touched; 0 means
    /// the key matched nothing and the caller should surface a warning.
    pub fn apply_edit(&mut self, escandallo: &str, codigo: &str, precio: f64) -> usize {
        let mut touched = 0;
        for row in &mut self.table.rows {
            if row.escandallo == escandallo && row.codigo == codigo {
                row.precio_exw = precio;
                touched += 1;
            }
        }
        if touched > 0 {
            engine::recalculate(&mut self.table);
        }
        touched
    }

    /// The reset button: refetch and rebuild, discarding every edit. On
    /// failure the current table is left untouched.
    pub fn reload(&mut self, client: &FeedClient, url: &str) -> Result<(), LoadError> {
        let fresh = Self::load(client, url)?;
        *self = fresh;
        Ok(())
    }
}
