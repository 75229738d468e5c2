pub mod front_matter;
pub mod news_item;
pub mod porcelain;
pub mod read_status;

pub use front_matter::FrontMatter;
pub use news_item::{parse_news_filename, NewsItem, NewsItemNameMetadata};
pub use porcelain::{PorcelainEntityType, PorcelainNewsItem, UNSPECIFIED_LANG};
pub use read_status::ReadStatus;
