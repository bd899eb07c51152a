use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::skill::{NewSkill as DomainNewSkill, Skill as DomainSkill};
use crate::domain::types::{ProfileId, SkillId, SkillName, TypeConstraintError};
use crate::models::profile::Profile;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Profile, foreign_key = owner_id))]
#[diesel(table_name = crate::schema::skills)]
pub struct Skill {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    /// Empty string when the skill has no description.
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::skills)]
pub struct NewSkill<'a> {
    pub owner_id: i32,
    pub name: &'a str,
    pub description: &'a str,
}

impl TryFrom<Skill> for DomainSkill {
    type Error = TypeConstraintError;

    fn try_from(skill: Skill) -> Result<Self, Self::Error> {
        let description = skill.description.trim();
        Ok(Self {
            id: SkillId::try_from(skill.id)?,
            owner_id: ProfileId::try_from(skill.owner_id)?,
            name: SkillName::new(skill.name)?,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

impl<'a> From<&'a DomainNewSkill> for NewSkill<'a> {
    fn from(skill: &'a DomainNewSkill) -> Self {
        Self {
            owner_id: skill.owner_id.get(),
            name: skill.name.as_str(),
            description: skill.description.as_deref().unwrap_or(""),
        }
    }
}
