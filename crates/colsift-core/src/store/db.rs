//! SQLite-backed allow-list store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::AllowListStore;
use crate::allow_list::unseen_names;
use crate::normalize::normalize;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Handle to the allow-list database, stored under the XDG state directory
/// (`~/.local/state/colsift/allow_list.db`).
///
/// Each name is stored with its canonical key; the key column is unique so
/// two spellings of one column can never both be stored.
#[derive(Clone)]
pub struct AllowListDb {
    pool: Pool<Sqlite>,
}

impl AllowListDb {
    /// Open (or create) the default database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("colsift")?;
        let db_path = xdg_dirs.get_state_home().join("colsift").join("allow_list.db");
        Self::open_at(db_path).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let options = SqliteConnectOptions::from_str(&uri)?.busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;
        let db = AllowListDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "opened allow-list db");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS allowed_columns (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                canonical TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete the stored name matching `name` in any surface form.
    /// Returns the removed raw name, if there was one.
    pub async fn remove(&self, name: &str) -> Result<Option<String>> {
        let key = normalize(name);
        let row = sqlx::query(
            r#"
            DELETE FROM allowed_columns
            WHERE canonical = ?1
            RETURNING name
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.get("name")))
    }
}

#[async_trait]
impl AllowListStore for AllowListDb {
    async fn load(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT name FROM allowed_columns
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    async fn save(&self, names: &[String]) -> Result<()> {
        let now = unix_timestamp();
        let names = unseen_names(&[], names);
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM allowed_columns")
            .execute(&mut *tx)
            .await?;
        for name in &names {
            insert_name(&mut tx, name, now).await?;
        }
        tx.commit().await?;
        tracing::info!(count = names.len(), "saved allow-list");
        Ok(())
    }

    // No read before the first insert: a deferred transaction that reads
    // first cannot wait for the write lock and fails with SQLITE_BUSY when
    // another writer holds it. The unique key decides what is new.
    async fn add(&self, raw_names: &[String]) -> Result<Vec<String>> {
        let now = unix_timestamp();
        let candidates = unseen_names(&[], raw_names);
        let mut added = Vec::new();
        let mut tx = self.pool.begin().await?;
        for name in candidates {
            if insert_name(&mut tx, &name, now).await? {
                added.push(name);
            }
        }
        tx.commit().await?;
        if !added.is_empty() {
            tracing::info!(count = added.len(), "added allow-list names");
        }
        Ok(added)
    }
}

/// Insert unless the canonical key is already stored. Returns whether a row was written.
async fn insert_name(tx: &mut sqlx::Transaction<'_, Sqlite>, name: &str, now: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT OR IGNORE INTO allowed_columns (name, canonical, created_at)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(name)
    .bind(normalize(name).as_str())
    .bind(now)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() == 1)
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<AllowListDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = AllowListDb { pool };
    db.migrate().await?;
    Ok(db)
}
