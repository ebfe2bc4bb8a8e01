use serde::{Deserialize, Serialize};

use crate::domain::ImageRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type", rename_all = "snake_case")]
pub enum Block {
    Block(TextBlock),
    Image(ImageRef),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H2,
    H3,
    Blockquote,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decorator {
    Strong,
    Em,
    Code,
}

impl Decorator {
    pub fn parse(mark: &str) -> Option<Self> {
        match mark {
            "strong" => Some(Self::Strong),
            "em" => Some(Self::Em),
            "code" => Some(Self::Code),
            _ => None,
        }
    }
}

impl TextBlock {
    pub fn link_for(&self, span: &Span) -> Option<&str> {
        span.marks.iter().find_map(|mark| {
            self.mark_defs
                .iter()
                .find(|def| def.key == *mark && def.kind == "link")
                .and_then(|def| def.href.as_deref())
        })
    }
}

#[cfg(test)]
#[path = "tests/blocks_tests.rs"]
mod tests;
