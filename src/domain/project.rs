use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;
use crate::domain::types::{LinkUrl, ProfileId, ProjectId, ProjectTitle, RichText, TagId, TagName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub owner_id: ProfileId,
    pub title: ProjectTitle,
    pub description: Option<RichText>,
    pub demo_link: Option<LinkUrl>,
    pub source_link: Option<LinkUrl>,
    pub vote_total: i32,
    pub vote_ratio: i32,
    pub created_at: NaiveDateTime,
    pub tags: Vec<Tag>,
}

impl Project {
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }
}

/// Payload for a new project together with the tags it should be linked to.
#[derive(Clone, Debug)]
pub struct NewProject {
    pub owner_id: ProfileId,
    pub title: ProjectTitle,
    pub description: Option<RichText>,
    pub demo_link: Option<LinkUrl>,
    pub source_link: Option<LinkUrl>,
    /// Existing tags selected in the form.
    pub tag_ids: Vec<TagId>,
    /// Tag names to get-or-create and link.
    pub new_tags: Vec<TagName>,
}

/// Full replacement of the editable project attributes.
///
/// `tag_ids` replaces the current links; `new_tags` are added on top.
#[derive(Clone, Debug)]
pub struct UpdateProject {
    pub title: ProjectTitle,
    pub description: Option<RichText>,
    pub demo_link: Option<LinkUrl>,
    pub source_link: Option<LinkUrl>,
    pub tag_ids: Vec<TagId>,
    pub new_tags: Vec<TagName>,
}
