use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tag::Tag as DomainTag;
use crate::domain::types::{TagId, TagName, TypeConstraintError};
use crate::models::project::Project;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(primary_key(project_id, tag_id))]
#[diesel(belongs_to(Project, foreign_key = project_id))]
#[diesel(belongs_to(Tag, foreign_key = tag_id))]
#[diesel(table_name = crate::schema::project_tags)]
/// Association table linking projects to tags.
pub struct ProjectTag {
    pub project_id: i32,
    pub tag_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::project_tags)]
pub struct NewProjectTag {
    pub project_id: i32,
    pub tag_id: i32,
}

impl TryFrom<Tag> for DomainTag {
    type Error = TypeConstraintError;

    fn try_from(tag: Tag) -> Result<Self, Self::Error> {
        Ok(Self::new(TagId::try_from(tag.id)?, TagName::new(tag.name)?))
    }
}
