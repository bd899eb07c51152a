//! Builders for domain records used across unit tests.

use chrono::NaiveDateTime;

use crate::domain::profile::Profile;
use crate::domain::project::Project;
use crate::domain::skill::Skill;
use crate::domain::tag::Tag;
use crate::domain::types::{
    ProfileId, ProfileName, ProjectId, ProjectTitle, SkillId, SkillName, TagId, TagName,
};

pub fn project(id: i32, title: &str, tags: &[&str]) -> Project {
    Project {
        id: ProjectId::new(id).unwrap(),
        owner_id: ProfileId::new(1).unwrap(),
        title: ProjectTitle::new(title).unwrap(),
        description: None,
        demo_link: None,
        source_link: None,
        vote_total: 0,
        vote_ratio: 0,
        created_at: NaiveDateTime::default(),
        tags: tags
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Tag::new(
                    TagId::new(i as i32 + 1).unwrap(),
                    TagName::new(*name).unwrap(),
                )
            })
            .collect(),
    }
}

pub fn owned_project(id: i32, owner_id: i32, title: &str) -> Project {
    Project {
        owner_id: ProfileId::new(owner_id).unwrap(),
        ..project(id, title, &[])
    }
}

pub fn profile(id: i32, skills: &[(&str, Option<&str>)]) -> Profile {
    let owner_id = ProfileId::new(id).unwrap();
    Profile {
        id: owner_id,
        name: ProfileName::new(format!("Dev #{id}")).unwrap(),
        email: None,
        username: None,
        location: None,
        short_intro: None,
        bio: None,
        social_github: None,
        social_twitter: None,
        social_linkedin: None,
        social_website: None,
        created_at: NaiveDateTime::default(),
        skills: skills
            .iter()
            .enumerate()
            .map(|(i, (name, description))| Skill {
                id: SkillId::new(id * 100 + i as i32 + 1).unwrap(),
                owner_id,
                name: SkillName::new(*name).unwrap(),
                description: description.map(str::to_string),
            })
            .collect(),
    }
}
