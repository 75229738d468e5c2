use tracing::info;

use crate::domain::NewsItem;
use crate::errors::NewsResult;
use crate::repo::traits::MetadataRepository;
use crate::storage::traits::ReadStatusRepository;

/// Outcome of an update: the news items the user has not read yet
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub unread: Vec<NewsItem>,
}

impl UpdateReport {
    pub fn has_unread(&self) -> bool {
        !self.unread.is_empty()
    }
}

pub struct UpdateService<M: MetadataRepository, R: ReadStatusRepository> {
    metadata_repository: M,
    read_status_repository: R,
}

impl<M: MetadataRepository, R: ReadStatusRepository> UpdateService<M, R> {
    pub fn new(metadata_repository: M, read_status_repository: R) -> Self {
        Self {
            metadata_repository,
            read_status_repository,
        }
    }

    /// Sync the metadata repository and collect unread news.
    ///
    /// A failed sync returns before read status is touched. The `is_read`
    /// flag of the returned items is left as listed.
    pub fn run(&self) -> NewsResult<UpdateReport> {
        self.metadata_repository.sync()?;

        let read_status = self.read_status_repository.load()?;
        let unread: Vec<NewsItem> = self
            .metadata_repository
            .list_news_items()?
            .into_iter()
            .filter(|item| !read_status.contains(item.id()))
            .collect();

        info!(unread = unread.len(), "update finished");
        Ok(UpdateReport { unread })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReadStatus;
    use crate::errors::NewsError;
    use crate::repo::store::NewsItemStore;
    use crate::repo::traits::MockMetadataRepository;
    use crate::storage::traits::MockReadStatusRepository;

    fn listing(ids: &[&str]) -> Vec<NewsItem> {
        let variants = ids
            .iter()
            .map(|id| NewsItem::new(&format!("{}.md", id), "Body").unwrap())
            .collect();
        NewsItemStore::new(variants, &[]).into_items()
    }

    fn metadata_repo(ids: &'static [&'static str]) -> MockMetadataRepository {
        let mut repo = MockMetadataRepository::new();
        repo.expect_sync().times(1).returning(|| Ok(()));
        repo.expect_list_news_items()
            .times(1)
            .returning(move || Ok(listing(ids)));
        repo
    }

    fn read_status_repo(read: &'static [&'static str]) -> MockReadStatusRepository {
        let mut repo = MockReadStatusRepository::new();
        repo.expect_load()
            .times(1)
            .returning(move || Ok(read.iter().copied().collect::<ReadStatus>()));
        repo.expect_mark_read().times(0);
        repo
    }

    #[test]
    fn test_reports_unread_in_order() {
        let service = UpdateService::new(
            metadata_repo(&["2024-02-01-c", "2024-01-01-a", "2024-01-05-b"]),
            read_status_repo(&["2024-01-01-a"]),
        );

        let report = service.run().unwrap();

        let ids: Vec<&str> = report.unread.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["2024-01-05-b", "2024-02-01-c"]);
        assert!(report.has_unread());
    }

    #[test]
    fn test_unread_items_keep_listing_state() {
        let service = UpdateService::new(
            metadata_repo(&["2024-01-01-a", "2024-01-05-b", "2024-02-01-c"]),
            read_status_repo(&["2024-01-01-a"]),
        );

        let report = service.run().unwrap();

        assert!(report.unread.iter().all(|i| !i.is_read()));
        let ordinals: Vec<u32> = report.unread.iter().map(|i| i.ordinal()).collect();
        assert_eq!(ordinals, vec![2, 3]);
    }

    #[test]
    fn test_all_read_reports_nothing() {
        let service = UpdateService::new(
            metadata_repo(&["2024-01-01-a", "2024-01-05-b"]),
            read_status_repo(&["2024-01-01-a", "2024-01-05-b"]),
        );

        let report = service.run().unwrap();

        assert!(!report.has_unread());
    }

    #[test]
    fn test_read_ids_without_items_are_ignored() {
        let service = UpdateService::new(
            metadata_repo(&["2024-01-05-b"]),
            read_status_repo(&["2023-12-31-gone"]),
        );

        let report = service.run().unwrap();

        assert_eq!(report.unread.len(), 1);
    }

    #[test]
    fn test_sync_failure_short_circuits() {
        let mut metadata = MockMetadataRepository::new();
        metadata
            .expect_sync()
            .times(1)
            .returning(|| Err(NewsError::RepoSync("offline".to_string())));
        metadata.expect_list_news_items().times(0);

        let mut read_status = MockReadStatusRepository::new();
        read_status.expect_load().times(0);

        let service = UpdateService::new(metadata, read_status);

        assert!(matches!(service.run(), Err(NewsError::RepoSync(_))));
    }

    #[test]
    fn test_read_status_failure_propagates() {
        let mut metadata = MockMetadataRepository::new();
        metadata.expect_sync().times(1).returning(|| Ok(()));
        metadata.expect_list_news_items().times(0);

        let mut read_status = MockReadStatusRepository::new();
        read_status
            .expect_load()
            .times(1)
            .returning(|| Err(NewsError::Database(rusqlite::Error::InvalidQuery)));

        let service = UpdateService::new(metadata, read_status);

        assert!(matches!(service.run(), Err(NewsError::Database(_))));
    }
}
