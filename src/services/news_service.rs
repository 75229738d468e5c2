use crate::domain::NewsItem;
use crate::errors::{NewsError, NewsResult};
use crate::repo::store::NewsItemStore;
use crate::repo::traits::MetadataRepository;
use crate::storage::traits::ReadStatusRepository;

pub struct NewsService<M: MetadataRepository, R: ReadStatusRepository> {
    metadata_repository: M,
    read_status_repository: R,
}

impl<M: MetadataRepository, R: ReadStatusRepository> NewsService<M, R> {
    pub fn new(metadata_repository: M, read_status_repository: R) -> Self {
        Self {
            metadata_repository,
            read_status_repository,
        }
    }

    /// List news items with their read flags filled in
    pub fn list(&self, only_unread: bool) -> NewsResult<Vec<NewsItem>> {
        let store = self.load_store()?;

        if only_unread {
            Ok(store.unread().cloned().collect())
        } else {
            Ok(store.into_items())
        }
    }

    /// Resolve news items to read and optionally mark them read.
    ///
    /// No selectors means every unread item. Each selector is an ordinal or
    /// an id; duplicates are dropped. Returned items carry the read flag they
    /// had before this call.
    pub fn read(&self, selectors: &[String], mark: bool) -> NewsResult<Vec<NewsItem>> {
        let store = self.load_store()?;

        let items: Vec<NewsItem> = if selectors.is_empty() {
            store.unread().cloned().collect()
        } else {
            let mut items: Vec<NewsItem> = Vec::new();
            for selector in selectors {
                let selector = selector.trim();
                if selector.is_empty() {
                    return Err(NewsError::InvalidInput(
                        "Empty news item selector".to_string(),
                    ));
                }

                let item = store
                    .find(selector)
                    .ok_or_else(|| NewsError::NewsItemNotFound(selector.to_string()))?;
                if !items.contains(item) {
                    items.push(item.clone());
                }
            }
            items
        };

        if mark && !items.is_empty() {
            let ids: Vec<String> = items.iter().map(|i| i.id().to_string()).collect();
            self.read_status_repository.mark_read(&ids)?;
        }

        Ok(items)
    }

    fn load_store(&self) -> NewsResult<NewsItemStore> {
        let read_status = self.read_status_repository.load()?;
        let mut store = NewsItemStore::from_listing(self.metadata_repository.list_news_items()?);
        store.apply_read_status(&read_status);
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::traits::MockMetadataRepository;
    use crate::storage::sqlite::{SqliteReadStatusRepository, SqliteStorage};

    fn metadata_repo() -> MockMetadataRepository {
        let mut repo = MockMetadataRepository::new();
        repo.expect_sync().times(0);
        repo.expect_list_news_items().returning(|| {
            let variants = [
                ("2024-01-01-a.md", "---\ntitle: First\n---\nA"),
                ("2024-01-05-b.md", "---\ntitle: Second\n---\nB"),
                ("2024-02-01-c.md", "C"),
            ]
            .iter()
            .map(|(name, contents)| NewsItem::new(name, contents).unwrap())
            .collect();
            Ok(NewsItemStore::new(variants, &[]).into_items())
        });
        repo
    }

    fn setup() -> (
        NewsService<MockMetadataRepository, SqliteReadStatusRepository>,
        SqliteReadStatusRepository,
    ) {
        let storage = SqliteStorage::in_memory().unwrap();
        let service = NewsService::new(
            metadata_repo(),
            SqliteReadStatusRepository::new(storage.clone()),
        );
        (service, SqliteReadStatusRepository::new(storage))
    }

    #[test]
    fn test_list_reconciles_read_status() {
        let (service, read_status) = setup();
        read_status.mark_read(&["2024-01-05-b".to_string()]).unwrap();

        let items = service.list(false).unwrap();

        let flags: Vec<bool> = items.iter().map(|i| i.is_read()).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_list_only_unread() {
        let (service, read_status) = setup();
        read_status.mark_read(&["2024-01-01-a".to_string()]).unwrap();

        let items = service.list(true).unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["2024-01-05-b", "2024-02-01-c"]);
    }

    #[test]
    fn test_read_all_unread_marks_them() {
        let (service, read_status) = setup();
        read_status.mark_read(&["2024-01-01-a".to_string()]).unwrap();

        let items = service.read(&[], true).unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| !i.is_read()));
        assert_eq!(read_status.load().unwrap().len(), 3);
        assert!(service.list(true).unwrap().is_empty());
    }

    #[test]
    fn test_read_by_ordinal_and_id() {
        let (service, read_status) = setup();

        let items = service
            .read(&["3".to_string(), "2024-01-01-a".to_string(), "1".to_string()], true)
            .unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["2024-02-01-c", "2024-01-01-a"]);

        let status = read_status.load().unwrap();
        assert!(status.contains("2024-02-01-c"));
        assert!(status.contains("2024-01-01-a"));
        assert!(!status.contains("2024-01-05-b"));
    }

    #[test]
    fn test_read_without_marking() {
        let (service, read_status) = setup();

        let items = service.read(&["2".to_string()], false).unwrap();

        assert_eq!(items[0].display_title(), "Second");
        assert!(read_status.load().unwrap().is_empty());
    }

    #[test]
    fn test_read_unknown_selector() {
        let (service, read_status) = setup();

        let result = service.read(&["1".to_string(), "42".to_string()], true);

        assert!(matches!(result, Err(NewsError::NewsItemNotFound(s)) if s == "42"));
        assert!(read_status.load().unwrap().is_empty());
    }

    #[test]
    fn test_read_blank_selector() {
        let (service, _) = setup();

        let result = service.read(&["  ".to_string()], true);

        assert!(matches!(result, Err(NewsError::InvalidInput(_))));
    }
}
