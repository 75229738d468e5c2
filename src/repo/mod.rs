pub mod traits;
pub mod store;
pub mod fs;

pub use traits::MetadataRepository;
pub use store::NewsItemStore;
pub use fs::{FsMetadataRepository, NEWS_DIR};
