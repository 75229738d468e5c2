use serde_json::{Map, Value};

/// A document made of an optional leading `---` delimited YAML block and a
/// free text body.
///
/// Parsing never fails: a missing, malformed or non-mapping block leaves the
/// metadata empty and keeps the whole text as the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    metadata: Map<String, Value>,
    content: String,
}

impl FrontMatter {
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let Some((block, body)) = split_block(text) else {
            return Self::body_only(text);
        };

        match parse_block(block) {
            Some(metadata) => Self {
                metadata,
                content: body.trim().to_string(),
            },
            None => {
                tracing::debug!("front matter block is not a YAML mapping, keeping it as body");
                Self::body_only(text)
            }
        }
    }

    fn body_only(text: &str) -> Self {
        Self {
            metadata: Map::new(),
            content: text.trim().to_string(),
        }
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Value of `key` if it is present and a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

fn is_delimiter(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// Split `text` into the raw block between the delimiters and the rest.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&text[block_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn parse_block(block: &str) -> Option<Map<String, Value>> {
    // An empty block is still a block
    if block.trim().is_empty() {
        return Some(Map::new());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(block).ok()?;

    match yaml {
        serde_yaml::Value::Null => Some(Map::new()),
        serde_yaml::Value::Mapping(mapping) => Some(
            mapping
                .into_iter()
                .filter_map(|(key, value)| {
                    let key = scalar_key(&key)?;
                    let value = serde_json::to_value(&value).ok()?;
                    Some((key, value))
                })
                .collect(),
        ),
        _ => None,
    }
}

fn scalar_key(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
