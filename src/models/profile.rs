use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::profile::{NewProfile as DomainNewProfile, Profile as DomainProfile};
use crate::domain::types::{
    LinkUrl, ProfileEmail, ProfileId, ProfileName, RichText, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::profiles)]
/// Diesel model for [`crate::domain::profile::Profile`].
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub location: Option<String>,
    pub short_intro: Option<String>,
    pub bio: Option<String>,
    pub social_github: Option<String>,
    pub social_twitter: Option<String>,
    pub social_linkedin: Option<String>,
    pub social_website: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::profiles)]
/// Insertable form of [`Profile`].
pub struct NewProfile<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub username: Option<&'a str>,
    pub location: Option<&'a str>,
    pub short_intro: Option<&'a str>,
    pub bio: Option<&'a str>,
}

fn link(value: Option<String>) -> Result<Option<LinkUrl>, TypeConstraintError> {
    value.map(LinkUrl::new).transpose()
}

impl TryFrom<Profile> for DomainProfile {
    type Error = TypeConstraintError;

    fn try_from(profile: Profile) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProfileId::try_from(profile.id)?,
            name: ProfileName::new(profile.name)?,
            email: profile.email.map(ProfileEmail::new).transpose()?,
            username: profile.username,
            location: profile.location,
            short_intro: profile.short_intro,
            bio: profile.bio.and_then(RichText::new),
            social_github: link(profile.social_github)?,
            social_twitter: link(profile.social_twitter)?,
            social_linkedin: link(profile.social_linkedin)?,
            social_website: link(profile.social_website)?,
            created_at: profile.created_at,
            skills: Vec::new(),
        })
    }
}

impl<'a> From<&'a DomainNewProfile> for NewProfile<'a> {
    fn from(profile: &'a DomainNewProfile) -> Self {
        Self {
            name: profile.name.as_str(),
            email: profile.email.as_ref().map(ProfileEmail::as_str),
            username: profile.username.as_deref(),
            location: profile.location.as_deref(),
            short_intro: profile.short_intro.as_deref(),
            bio: profile.bio.as_ref().map(RichText::as_str),
        }
    }
}
