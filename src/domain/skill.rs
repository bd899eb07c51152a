use serde::{Deserialize, Serialize};

use crate::domain::types::{ProfileId, SkillId, SkillName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: SkillId,
    pub owner_id: ProfileId,
    pub name: SkillName,
    /// Skills with a description are highlighted on the profile page.
    pub description: Option<String>,
}

impl Skill {
    pub fn is_featured(&self) -> bool {
        self.description.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct NewSkill {
    pub owner_id: ProfileId,
    pub name: SkillName,
    pub description: Option<String>,
}

impl NewSkill {
    #[must_use]
    pub fn new(owner_id: ProfileId, name: SkillName, description: Option<String>) -> Self {
        Self {
            owner_id,
            name,
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
