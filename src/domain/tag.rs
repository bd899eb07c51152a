use serde::{Deserialize, Serialize};

use crate::domain::types::{TagId, TagName};

/// Label attached to projects, shared between all owners.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

impl Tag {
    #[must_use]
    pub fn new(id: TagId, name: TagName) -> Self {
        Self { id, name }
    }
}

/// Splits the free-text "new tags" input into tag names.
///
/// Commas and whitespace both separate names; repeated names are dropped while
/// the first-seen order is kept.
pub fn parse_tag_names(raw: &str) -> Vec<TagName> {
    let mut names: Vec<TagName> = Vec::new();
    for part in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        if let Ok(name) = TagName::new(part) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
