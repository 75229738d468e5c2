use chrono::Utc;

use crate::domain::ReadStatus;
use crate::errors::NewsResult;
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::ReadStatusRepository;

pub struct SqliteReadStatusRepository {
    storage: SqliteStorage,
}

impl SqliteReadStatusRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }

    /// When `id` was first marked read, as an RFC 3339 timestamp
    pub fn read_at(&self, id: &str) -> NewsResult<Option<String>> {
        let conn = self.storage.connection()?;
        let result = conn.query_row(
            "SELECT read_at FROM news_read_status WHERE id = ?1",
            [id],
            |row| row.get(0),
        );

        match result {
            Ok(read_at) => Ok(Some(read_at)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl ReadStatusRepository for SqliteReadStatusRepository {
    fn load(&self) -> NewsResult<ReadStatus> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare("SELECT id FROM news_read_status")?;

        let status = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<ReadStatus, _>>()?;

        tracing::debug!(count = status.len(), "loaded news read status");
        Ok(status)
    }

    fn mark_read(&self, ids: &[String]) -> NewsResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let conn = self.storage.connection()?;
        let read_at = Utc::now().to_rfc3339();

        let tx = conn.unchecked_transaction()?;
        for id in ids {
            tx.execute(
                "INSERT OR IGNORE INTO news_read_status (id, read_at) VALUES (?1, ?2)",
                (id, &read_at),
            )?;
        }
        tx.commit()?;

        tracing::debug!(count = ids.len(), "marked news items as read");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_repo() -> SqliteReadStatusRepository {
        let storage = SqliteStorage::in_memory().unwrap();
        SqliteReadStatusRepository::new(storage)
    }

    #[test]
    fn test_load_empty() {
        let repo = setup_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_mark_and_load() {
        let repo = setup_repo();

        repo.mark_read(&["2024-01-01-a".to_string(), "2024-01-05-b".to_string()])
            .unwrap();

        let status = repo.load().unwrap();
        assert_eq!(status.len(), 2);
        assert!(status.contains("2024-01-01-a"));
        assert!(status.contains("2024-01-05-b"));
        assert!(!status.contains("2024-02-01-c"));
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let repo = setup_repo();
        let ids = vec!["2024-01-01-a".to_string()];

        repo.mark_read(&ids).unwrap();
        let first = repo.read_at("2024-01-01-a").unwrap();
        repo.mark_read(&ids).unwrap();

        assert_eq!(repo.load().unwrap().len(), 1);
        assert_eq!(repo.read_at("2024-01-01-a").unwrap(), first);
    }

    #[test]
    fn test_read_at_unknown_id() {
        let repo = setup_repo();
        assert_eq!(repo.read_at("2024-01-01-a").unwrap(), None);
    }

    #[test]
    fn test_repositories_share_storage() {
        let storage = SqliteStorage::in_memory().unwrap();
        let writer = SqliteReadStatusRepository::new(storage.clone());
        let reader = SqliteReadStatusRepository::new(storage);

        writer.mark_read(&["2024-01-01-a".to_string()]).unwrap();

        assert!(reader.load().unwrap().contains("2024-01-01-a"));
    }
}
