use std::{collections::HashMap, path::Path, sync::OnceLock};

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Key/value pairs read from the front matter block of a project file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Metadata(HashMap<String, String>);

impl Metadata {
    /// Value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn parse(block: &str) -> Self {
        let mut pairs = HashMap::new();
        for line in block.lines() {
            if let Some((name, value)) = line.split_once(':') {
                pairs.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
        Metadata(pairs)
    }
}

fn front_matter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // `---` must open the file and close on a line of its own
    PATTERN.get_or_init(|| {
        RegexBuilder::new(r"\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?(?:\n|\z)")
            .dot_matches_new_line(true)
            .multi_line(true)
            .build()
            .expect("front matter pattern is valid")
    })
}

/// Splits `content` into its front matter and the Markdown body that follows
/// the closing delimiter. Returns `None` when there is no complete block.
pub(crate) fn split_front_matter(content: &str) -> Option<(Metadata, &str)> {
    let caps = front_matter_pattern().captures(content)?;
    let block = caps.get(1).map_or("", |m| m.as_str());
    let end = caps.get(0)?.end();
    Some((Metadata::parse(block), &content[end..]))
}

/// Reads `path` and extracts its metadata along with the remaining body.
pub(crate) fn read_metadata(path: &Path) -> Result<(Metadata, String)> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let (metadata, body) =
        split_front_matter(&content).ok_or_else(|| Error::MissingFrontMatter {
            path: path.to_path_buf(),
        })?;
    Ok((metadata, body.to_string()))
}
