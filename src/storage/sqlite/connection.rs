use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::errors::{NewsError, NewsResult};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS news_read_status (
    id TEXT PRIMARY KEY NOT NULL,
    read_at TEXT NOT NULL
);
"#;

#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> NewsResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        tracing::debug!(path = %path.display(), "opening read status database");
        Self::init(Connection::open(path)?)
    }

    pub fn in_memory() -> NewsResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> NewsResult<Self> {
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>, NewsError> {
        self.conn
            .lock()
            .map_err(|_| NewsError::Database(rusqlite::Error::InvalidQuery))
    }
}
