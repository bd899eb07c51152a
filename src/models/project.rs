use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::project::{
    NewProject as DomainNewProject, Project as DomainProject,
    UpdateProject as DomainUpdateProject,
};
use crate::domain::types::{
    LinkUrl, ProfileId, ProjectId, ProjectTitle, RichText, TypeConstraintError,
};
use crate::models::profile::Profile;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Profile, foreign_key = owner_id))]
#[diesel(table_name = crate::schema::projects)]
/// Diesel model for [`crate::domain::project::Project`].
pub struct Project {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub demo_link: Option<String>,
    pub source_link: Option<String>,
    pub vote_total: i32,
    pub vote_ratio: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::projects)]
/// Insertable form of [`Project`].
pub struct NewProject<'a> {
    pub owner_id: i32,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub demo_link: Option<&'a str>,
    pub source_link: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Project`] record.
pub struct UpdateProject<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub demo_link: Option<&'a str>,
    pub source_link: Option<&'a str>,
}

impl TryFrom<Project> for DomainProject {
    type Error = TypeConstraintError;

    fn try_from(project: Project) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProjectId::try_from(project.id)?,
            owner_id: ProfileId::try_from(project.owner_id)?,
            title: ProjectTitle::new(project.title)?,
            description: project.description.and_then(RichText::new),
            demo_link: project.demo_link.map(LinkUrl::new).transpose()?,
            source_link: project.source_link.map(LinkUrl::new).transpose()?,
            vote_total: project.vote_total,
            vote_ratio: project.vote_ratio,
            created_at: project.created_at,
            tags: Vec::new(),
        })
    }
}

impl<'a> From<&'a DomainNewProject> for NewProject<'a> {
    fn from(project: &'a DomainNewProject) -> Self {
        Self {
            owner_id: project.owner_id.get(),
            title: project.title.as_str(),
            description: project.description.as_ref().map(RichText::as_str),
            demo_link: project.demo_link.as_ref().map(LinkUrl::as_str),
            source_link: project.source_link.as_ref().map(LinkUrl::as_str),
        }
    }
}

impl<'a> From<&'a DomainUpdateProject> for UpdateProject<'a> {
    fn from(project: &'a DomainUpdateProject) -> Self {
        Self {
            title: project.title.as_str(),
            description: project.description.as_ref().map(RichText::as_str),
            demo_link: project.demo_link.as_ref().map(LinkUrl::as_str),
            source_link: project.source_link.as_ref().map(LinkUrl::as_str),
        }
    }
}
