use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::NewsItem;
use crate::errors::{NewsError, NewsResult};
use crate::repo::store::NewsItemStore;
use crate::repo::traits::MetadataRepository;

/// Directory of a metadata repository that holds news files
pub const NEWS_DIR: &str = "news";

/// A metadata repository checked out on the local filesystem
pub struct FsMetadataRepository {
    root: PathBuf,
    preferred_langs: Vec<String>,
}

impl FsMetadataRepository {
    pub fn new(root: impl Into<PathBuf>, preferred_langs: Vec<String>) -> Self {
        Self {
            root: root.into(),
            preferred_langs,
        }
    }

    pub fn news_dir(&self) -> PathBuf {
        self.root.join(NEWS_DIR)
    }

    /// Every news file in the news directory, language variants included
    fn read_variants(&self) -> NewsResult<Vec<NewsItem>> {
        let dir = self.news_dir();
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "no news directory in metadata repository");
            return Ok(Vec::new());
        }

        let mut entries = readable_entries(&dir, fs::read_dir(&dir)?);
        entries.sort_by_key(|e| e.path());

        let mut variants = Vec::new();
        for entry in entries {
            if !entry.file_type()?.is_file() {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            if !name.ends_with(".md") {
                continue;
            }

            let contents = match fs::read_to_string(entry.path()) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!(file = %name, error = %e, "skipping unreadable news file");
                    continue;
                }
            };

            match NewsItem::new(&name, &contents) {
                Some(item) => {
                    debug!(file = %name, id = %item.id(), "loaded news file");
                    variants.push(item);
                }
                None => debug!(file = %name, "not a news file"),
            }
        }

        Ok(variants)
    }
}

/// Keep the entries that could be read, logging the ones that could not
fn readable_entries<T>(dir: &Path, entries: impl Iterator<Item = io::Result<T>>) -> Vec<T> {
    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable news directory entry");
                None
            }
        })
        .collect()
}

impl MetadataRepository for FsMetadataRepository {
    fn sync(&self) -> NewsResult<()> {
        if !self.root.is_dir() {
            return Err(NewsError::RepoSync(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }

        info!(root = %self.root.display(), "metadata repository is up to date");
        Ok(())
    }

    fn list_news_items(&self) -> NewsResult<Vec<NewsItem>> {
        let variants = self.read_variants()?;
        let store = NewsItemStore::new(variants, &self.preferred_langs);

        debug!(count = store.len(), "listed news items");
        Ok(store.into_items())
    }
}
