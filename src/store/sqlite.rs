//! SQLite-backed spacecraft store.
//!
//! Wraps a tokio-rusqlite Connection that runs statements on a background
//! thread. WAL mode keeps readers cheap while a write is in flight.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::rusqlite;
use tokio_rusqlite::{params, Connection};

use super::{migrations, SpacecraftStore};
use crate::error::{Result, ServiceError};
use crate::models::{Page, Spacecraft};

// == Sqlite Store ==
/// Spacecraft store backed by a SQLite database.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database file at `path`.
    ///
    /// Creates the file if it doesn't exist, applies performance pragmas,
    /// and runs any pending migrations.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).await.map_err(ServiceError::from)?;
        Self::prepare(conn).await
    }

    /// Open an in-memory database for testing.
    #[allow(dead_code)]
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(ServiceError::from)?;
        Self::prepare(conn).await
    }

    async fn prepare(conn: Connection) -> Result<Self> {
        conn.call(|conn| -> Result<()> {
            conn.execute_batch(
                "PRAGMA journal_mode=WAL;
                 PRAGMA synchronous=NORMAL;
                 PRAGMA temp_store=MEMORY;
                 PRAGMA foreign_keys=ON;",
            )?;
            Ok(())
        })
        .await
        .map_err(ServiceError::from)?;

        migrations::run(&conn).await?;

        Ok(Self { conn })
    }
}

fn row_to_spacecraft(row: &rusqlite::Row<'_>) -> rusqlite::Result<Spacecraft> {
    Ok(Spacecraft {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        origin: row.get(3)?,
    })
}

#[async_trait]
impl SpacecraftStore for SqliteStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Spacecraft>> {
        self.conn
            .call(move |conn| -> Result<Option<Spacecraft>> {
                let result = conn.query_row(
                    "SELECT id, name, type, origin FROM spacecraft WHERE id = ?1",
                    params![id],
                    row_to_spacecraft,
                );

                match result {
                    Ok(s) => Ok(Some(s)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(ServiceError::from)
    }

    async fn find_page(&self, page: u32, size: u32) -> Result<Page<Spacecraft>> {
        self.conn
            .call(move |conn| -> Result<Page<Spacecraft>> {
                let total: i64 =
                    conn.query_row("SELECT COUNT(*) FROM spacecraft", [], |row| row.get(0))?;

                let mut stmt = conn.prepare(
                    "SELECT id, name, type, origin FROM spacecraft ORDER BY id LIMIT ?1 OFFSET ?2",
                )?;
                // Saturates for huge page numbers; an offset past the last
                // row simply reads back an empty page.
                let offset = i64::from(page).saturating_mul(i64::from(size));
                let content = stmt
                    .query_map(params![i64::from(size), offset], row_to_spacecraft)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;

                Ok(Page::new(content, page, size, total as u64))
            })
            .await
            .map_err(ServiceError::from)
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Spacecraft>> {
        let pattern = format!("%{fragment}%");
        self.conn
            .call(move |conn| -> Result<Vec<Spacecraft>> {
                let mut stmt = conn.prepare(
                    "SELECT id, name, type, origin FROM spacecraft WHERE name LIKE ?1 ORDER BY id",
                )?;
                let found = stmt
                    .query_map(params![pattern], row_to_spacecraft)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;

                Ok(found)
            })
            .await
            .map_err(ServiceError::from)
    }

    async fn save(&self, spacecraft: Spacecraft) -> Result<Spacecraft> {
        self.conn
            .call(move |conn| -> Result<Spacecraft> {
                match spacecraft.id {
                    Some(id) => {
                        conn.execute(
                            "INSERT INTO spacecraft (id, name, type, origin)
                             VALUES (?1, ?2, ?3, ?4)
                             ON CONFLICT(id) DO UPDATE SET
                                name = excluded.name,
                                type = excluded.type,
                                origin = excluded.origin",
                            params![id, spacecraft.name, spacecraft.kind, spacecraft.origin],
                        )?;
                        Ok(spacecraft)
                    }
                    None => {
                        conn.execute(
                            "INSERT INTO spacecraft (name, type, origin) VALUES (?1, ?2, ?3)",
                            params![spacecraft.name, spacecraft.kind, spacecraft.origin],
                        )?;
                        let id = conn.last_insert_rowid();
                        Ok(Spacecraft {
                            id: Some(id),
                            ..spacecraft
                        })
                    }
                }
            })
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| -> Result<()> {
                conn.execute("DELETE FROM spacecraft WHERE id = ?1", params![id])?;
                Ok(())
            })
            .await
            .map_err(ServiceError::from)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| -> Result<bool> {
                let exists: bool = conn.query_row(
                    "SELECT EXISTS(SELECT 1 FROM spacecraft WHERE id = ?1)",
                    params![id],
                    |row| row.get(0),
                )?;

                Ok(exists)
            })
            .await
            .map_err(ServiceError::from)
    }
}
