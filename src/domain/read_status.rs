use std::collections::HashSet;

/// Ids of the news items the user has already read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadStatus {
    ids: HashSet<String>,
}

impl ReadStatus {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for ReadStatus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ReadStatus {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
