use std::collections::BTreeMap;

use crate::domain::{NewsItem, ReadStatus};

/// The owning collection of news items.
///
/// Only the store assigns ordinals and read flags.
#[derive(Debug, Clone, Default)]
pub struct NewsItemStore {
    items: Vec<NewsItem>,
}

impl NewsItemStore {
    /// Collapse language variants into one item per id, sort, and number
    /// the result from 1.
    pub fn new(variants: Vec<NewsItem>, preferred_langs: &[String]) -> Self {
        let mut by_id: BTreeMap<String, Vec<NewsItem>> = BTreeMap::new();
        for item in variants {
            by_id.entry(item.id().to_string()).or_default().push(item);
        }

        // BTreeMap iterates in byte-wise id order, which is the item order
        let mut items: Vec<NewsItem> = by_id
            .into_values()
            .filter_map(|variants| pick_variant(variants, preferred_langs))
            .collect();

        for (ordinal, item) in (1..).zip(items.iter_mut()) {
            item.set_ordinal(ordinal);
        }

        Self { items }
    }

    /// Take ownership of a listing that is already ordered and numbered
    pub fn from_listing(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    pub fn apply_read_status(&mut self, status: &ReadStatus) {
        for item in &mut self.items {
            item.set_read(status.contains(item.id()));
        }
    }

    /// Look an item up by ordinal (`"3"`) or by id
    pub fn find(&self, selector: &str) -> Option<&NewsItem> {
        match selector.parse::<u32>() {
            Ok(ordinal) => self.items.iter().find(|item| item.ordinal() == ordinal),
            Err(_) => self.items.iter().find(|item| item.id() == selector),
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn unread(&self) -> impl Iterator<Item = &NewsItem> {
        self.items.iter().filter(|item| !item.is_read())
    }

    pub fn into_items(self) -> Vec<NewsItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Choose the variant to show: an exact preferred language first, then a
/// preferred language's primary subtag (`en_US` → `en`), then the untagged
/// file, then the smallest tag.
fn pick_variant(mut variants: Vec<NewsItem>, preferred_langs: &[String]) -> Option<NewsItem> {
    let position = preferred_langs
        .iter()
        .find_map(|lang| variants.iter().position(|v| v.lang() == Some(lang.as_str())))
        .or_else(|| {
            preferred_langs.iter().find_map(|lang| {
                let primary = primary_subtag(lang);
                variants
                    .iter()
                    .position(|v| v.lang().map(primary_subtag) == Some(primary))
            })
        })
        .or_else(|| variants.iter().position(|v| v.lang().is_none()));

    match position {
        Some(position) => Some(variants.swap_remove(position)),
        None => variants.into_iter().min_by(|a, b| a.lang().cmp(&b.lang())),
    }
}

fn primary_subtag(lang: &str) -> &str {
    lang.split(['_', '-']).next().unwrap_or(lang)
}
