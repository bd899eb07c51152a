//! Forms for creating, editing and reviewing projects.

use serde::Deserialize;
use validator::Validate;

use crate::domain::project::{NewProject, UpdateProject};
use crate::domain::review::NewReview;
use crate::domain::tag::parse_tag_names;
use crate::domain::types::{
    LinkUrl, ProfileId, ProjectId, ProjectTitle, RichText, TagId, TagName, VoteValue,
};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data for creating or updating a project.
pub struct ProjectForm {
    /// Profile that owns the project.
    pub owner_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub demo_link: String,
    #[serde(default)]
    pub source_link: String,
    /// Checked existing tags; the key repeats once per checkbox.
    #[serde(default)]
    pub tags: Vec<i32>,
    /// Free-text tag names separated by commas or spaces.
    #[serde(default)]
    pub new_tags: String,
}

impl ProjectForm {
    /// Decodes an urlencoded body where `tags` may repeat.
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|err| FormError::Malformed(err.to_string()))
    }
}

/// Validated project attributes ready to become a domain command.
#[derive(Debug)]
pub struct ProjectPayload {
    pub owner_id: ProfileId,
    pub title: ProjectTitle,
    pub description: Option<RichText>,
    pub demo_link: Option<LinkUrl>,
    pub source_link: Option<LinkUrl>,
    pub tag_ids: Vec<TagId>,
    pub new_tags: Vec<TagName>,
}

fn optional_link(raw: &str) -> Result<Option<LinkUrl>, FormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    LinkUrl::new(raw)
        .map(Some)
        .map_err(|_| FormError::InvalidUrl)
}

impl TryFrom<ProjectForm> for ProjectPayload {
    type Error = FormError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut tag_ids = form
            .tags
            .iter()
            .map(|&id| TagId::new(id).map_err(|_| FormError::InvalidTag))
            .collect::<Result<Vec<_>, _>>()?;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        Ok(Self {
            owner_id: ProfileId::new(form.owner_id).map_err(|_| FormError::InvalidOwnerId)?,
            title: ProjectTitle::new(form.title).map_err(|_| FormError::InvalidTitle)?,
            description: RichText::new(&form.description),
            demo_link: optional_link(&form.demo_link)?,
            source_link: optional_link(&form.source_link)?,
            tag_ids,
            new_tags: parse_tag_names(&form.new_tags),
        })
    }
}

impl ProjectPayload {
    pub fn into_new_project(self) -> NewProject {
        NewProject {
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            demo_link: self.demo_link,
            source_link: self.source_link,
            tag_ids: self.tag_ids,
            new_tags: self.new_tags,
        }
    }

    pub fn into_update_project(self) -> UpdateProject {
        UpdateProject {
            title: self.title,
            description: self.description,
            demo_link: self.demo_link,
            source_link: self.source_link,
            tag_ids: self.tag_ids,
            new_tags: self.new_tags,
        }
    }
}

#[derive(Debug, Deserialize)]
/// Confirms a project deletion on behalf of its owner.
pub struct DeleteProjectForm {
    pub owner_id: i32,
}

impl DeleteProjectForm {
    pub fn owner_id(&self) -> Result<ProfileId, FormError> {
        ProfileId::new(self.owner_id).map_err(|_| FormError::InvalidOwnerId)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for voting on a project.
pub struct ReviewForm {
    /// Profile leaving the review.
    pub owner_id: i32,
    /// `up` or `down`.
    pub value: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub body: String,
}

#[derive(Debug)]
pub struct ReviewPayload {
    pub owner_id: ProfileId,
    pub value: VoteValue,
    pub body: Option<RichText>,
}

impl TryFrom<ReviewForm> for ReviewPayload {
    type Error = FormError;

    fn try_from(form: ReviewForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            owner_id: ProfileId::new(form.owner_id).map_err(|_| FormError::InvalidOwnerId)?,
            value: form
                .value
                .parse::<VoteValue>()
                .map_err(|_| FormError::InvalidVote)?,
            body: RichText::new(&form.body),
        })
    }
}

impl ReviewPayload {
    pub fn into_domain(self, project_id: ProjectId) -> NewReview {
        NewReview {
            owner_id: self.owner_id,
            project_id,
            body: self.body,
            value: self.value,
        }
    }
}
