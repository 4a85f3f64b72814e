//! Serde layout of nbformat v4 documents
//!
//! Only the fields the reader needs are declared; everything else in the
//! document is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct RawNotebook {
    pub nbformat: u32,
    pub cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawCell {
    pub cell_type: String,
    #[serde(default)]
    pub source: Source,
    /// `Some` whenever the key is present, even with a `null` value
    #[serde(default, deserialize_with = "present")]
    pub attachments: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Cell source, stored either whole or as a list of lines
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Source {
    /// Lines already carry their own newlines, so they join with no separator
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.concat(),
        }
    }
}
