use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use twenty48_core::best_score::BestScoreStore;
use twenty48_core::engine::Score;

const BEST_KEY: &str = "best";

/// Best score kept in a small SQLite database.
///
/// Schema:
/// - scores(score_key TEXT PRIMARY KEY, score_value INTEGER)
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Create or open the database at `path`, ensure schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS scores (
                score_key TEXT PRIMARY KEY,
                score_value INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(Self { path, conn })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for SqliteStore {
    fn load(&mut self) -> Result<Option<Score>> {
        let best = self
            .conn
            .query_row(
                "SELECT score_value FROM scores WHERE score_key = ?1",
                params![BEST_KEY],
                |row| row.get::<_, i64>(0),
            )
            .optional()
            .context("failed to read best score")?;
        Ok(best.map(|v| v.max(0) as Score))
    }

    fn save(&mut self, best: Score) -> Result<()> {
        let value = i64::try_from(best).unwrap_or(i64::MAX);
        self.conn
            .execute(
                "INSERT INTO scores (score_key, score_value) VALUES (?1, ?2)
                 ON CONFLICT(score_key) DO UPDATE SET score_value=excluded.score_value",
                params![BEST_KEY, value],
            )
            .context("failed to write best score")?;
        Ok(())
    }
}
