//! DTOs shaped for the profile templates.

use crate::domain::profile::Profile;
use crate::domain::project::Project;
use crate::domain::skill::Skill;
use crate::listing::Listing;

/// Data required to render the developers listing.
pub type ProfilesPageData = Listing<Profile>;

#[derive(Debug)]
pub struct ProfilePageData {
    pub profile: Profile,
    /// Skills with a description.
    pub top_skills: Vec<Skill>,
    pub other_skills: Vec<Skill>,
    pub projects: Vec<Project>,
}
