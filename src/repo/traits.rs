use crate::domain::NewsItem;
use crate::errors::NewsResult;

#[cfg_attr(test, mockall::automock)]
pub trait MetadataRepository: Send + Sync {
    /// Bring the local checkout up to date
    fn sync(&self) -> NewsResult<()>;

    /// All news items, in id order with ordinals assigned
    fn list_news_items(&self) -> NewsResult<Vec<NewsItem>>;
}
