use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use regex::Regex;

use super::front_matter::FrontMatter;
use super::porcelain::{PorcelainEntityType, PorcelainNewsItem, UNSPECIFIED_LANG};

// The id group is lazy so that only the last dot-segment before `.md` can
// become the language tag.
const NEWS_FILENAME_PATTERN: &str = r"^(\d+-\d{2}-\d{2}-.*?)(?:\.([0-9A-Za-z_-]+))?\.md$";

fn news_filename_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NEWS_FILENAME_PATTERN).expect("news filename pattern is valid"))
}

/// Identity of a news item, shared by all of its language variants.
///
/// Equality, hashing and ordering look at `id` only. Ids start with a
/// zero-padded date, so lexical order is chronological order.
#[derive(Debug, Clone)]
pub struct NewsItemNameMetadata {
    pub id: String,
    pub lang: Option<String>,
}

impl NewsItemNameMetadata {
    pub fn new(id: impl Into<String>, lang: Option<String>) -> Self {
        Self {
            id: id.into(),
            lang,
        }
    }

    /// File name this identity was parsed from
    pub fn filename(&self) -> String {
        match &self.lang {
            Some(lang) => format!("{}.{}.md", self.id, lang),
            None => format!("{}.md", self.id),
        }
    }
}

impl PartialEq for NewsItemNameMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NewsItemNameMetadata {}

impl Hash for NewsItemNameMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for NewsItemNameMetadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NewsItemNameMetadata {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Parse a news file name such as `2024-01-01-release.en.md`.
///
/// Returns `None` for anything that is not a news file.
pub fn parse_news_filename(filename: &str) -> Option<NewsItemNameMetadata> {
    let caps = news_filename_regex().captures(filename)?;
    let id = caps.get(1)?.as_str();
    let lang = caps.get(2).map(|m| m.as_str().to_string());

    Some(NewsItemNameMetadata::new(id, lang))
}

/// One parsed news entry.
///
/// `ordinal` and `is_read` belong to the collection that owns the item and
/// can only be changed from inside the crate.
#[derive(Debug, Clone)]
pub struct NewsItem {
    metadata: NewsItemNameMetadata,
    front_matter: FrontMatter,
    ordinal: u32,
    is_read: bool,
}

impl NewsItem {
    pub fn new(filename: &str, contents: &str) -> Option<Self> {
        let metadata = parse_news_filename(filename)?;
        Some(Self::from_parts(metadata, FrontMatter::parse(contents)))
    }

    fn from_parts(metadata: NewsItemNameMetadata, front_matter: FrontMatter) -> Self {
        Self {
            metadata,
            front_matter,
            ordinal: 0,
            is_read: false,
        }
    }

    pub fn metadata(&self) -> &NewsItemNameMetadata {
        &self.metadata
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn lang(&self) -> Option<&str> {
        self.metadata.lang.as_deref()
    }

    /// The front matter `title` when it is a string, the id otherwise
    pub fn display_title(&self) -> &str {
        self.front_matter.get_str("title").unwrap_or(self.id())
    }

    pub fn content(&self) -> &str {
        self.front_matter.content()
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub(crate) fn set_ordinal(&mut self, ordinal: u32) {
        self.ordinal = ordinal;
    }

    pub(crate) fn set_read(&mut self, is_read: bool) {
        self.is_read = is_read;
    }

    pub fn to_porcelain(&self) -> PorcelainNewsItem {
        PorcelainNewsItem {
            ty: PorcelainEntityType::NewsItemV1,
            id: self.id().to_string(),
            ord: self.ordinal,
            is_read: self.is_read,
            lang: self.lang().unwrap_or(UNSPECIFIED_LANG).to_string(),
            display_title: self.display_title().to_string(),
            content: self.content().to_string(),
        }
    }
}

impl PartialEq for NewsItem {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata
    }
}

impl Eq for NewsItem {}

impl PartialOrd for NewsItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NewsItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.metadata.cmp(&other.metadata)
    }
}
