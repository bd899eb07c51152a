use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::skill::Skill;
use crate::domain::types::{LinkUrl, ProfileEmail, ProfileId, ProfileName, RichText};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: ProfileName,
    pub email: Option<ProfileEmail>,
    pub username: Option<String>,
    pub location: Option<String>,
    pub short_intro: Option<String>,
    pub bio: Option<RichText>,
    pub social_github: Option<LinkUrl>,
    pub social_twitter: Option<LinkUrl>,
    pub social_linkedin: Option<LinkUrl>,
    pub social_website: Option<LinkUrl>,
    pub created_at: NaiveDateTime,
    /// Skills loaded alongside the profile; empty when not requested.
    pub skills: Vec<Skill>,
}

impl Profile {
    /// Splits skills into described ("top") and bare ("other") ones.
    pub fn partition_skills(&self) -> (Vec<Skill>, Vec<Skill>) {
        self.skills.iter().cloned().partition(Skill::is_featured)
    }
}

#[derive(Clone, Debug)]
pub struct NewProfile {
    pub name: ProfileName,
    pub email: Option<ProfileEmail>,
    pub username: Option<String>,
    pub location: Option<String>,
    pub short_intro: Option<String>,
    pub bio: Option<RichText>,
}

impl NewProfile {
    #[must_use]
    pub fn new(name: ProfileName) -> Self {
        Self {
            name,
            email: None,
            username: None,
            location: None,
            short_intro: None,
            bio: None,
        }
    }

    pub fn email(mut self, email: ProfileEmail) -> Self {
        self.email = Some(email);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into().trim().to_lowercase()).filter(|s| !s.is_empty());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into().trim().to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn short_intro(mut self, intro: impl Into<String>) -> Self {
        self.short_intro = Some(intro.into().trim().to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn bio(mut self, bio: impl AsRef<str>) -> Self {
        self.bio = RichText::new(bio);
        self
    }
}
