//! Persistence layer for the spacecraft registry.

mod migrations;
mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Page, Spacecraft};

/// Persistence operations the service layer depends on.
///
/// Object-safe so tests can substitute an instrumented in-memory double
/// for the SQLite implementation.
#[async_trait]
pub trait SpacecraftStore: Send + Sync {
    /// Looks up a spacecraft by id. `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<Spacecraft>>;

    /// Returns one page of the registry, ordered by id.
    async fn find_page(&self, page: u32, size: u32) -> Result<Page<Spacecraft>>;

    /// Returns every spacecraft whose name contains `fragment`.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Spacecraft>>;

    /// Inserts (id `None`) or updates (id `Some`) and returns the stored row.
    async fn save(&self, spacecraft: Spacecraft) -> Result<Spacecraft>;

    /// Removes the row with `id`, if any.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Returns true if a row with `id` exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
}
