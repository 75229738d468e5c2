use serde::{Deserialize, Serialize};

use crate::errors::NewsResult;

/// Language marker emitted for news items that carry no language tag
/// (BCP 47 "undetermined").
pub const UNSPECIFIED_LANG: &str = "und";

/// Versioned type tag carried by every porcelain record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PorcelainEntityType {
    #[serde(rename = "news-item-v1")]
    NewsItemV1,
}

impl PorcelainEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PorcelainEntityType::NewsItemV1 => "news-item-v1",
        }
    }
}

impl std::fmt::Display for PorcelainEntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Machine-readable shape of a news item.
///
/// Field names are part of the external contract; bump the type tag when
/// changing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PorcelainNewsItem {
    #[serde(rename = "type")]
    pub ty: PorcelainEntityType,
    pub id: String,
    pub ord: u32,
    pub is_read: bool,
    pub lang: String,
    pub display_title: String,
    pub content: String,
}

impl PorcelainNewsItem {
    /// Single-line JSON, one record per line of output
    pub fn to_json_line(&self) -> NewsResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
