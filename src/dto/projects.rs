//! DTOs shaped for the project templates.

use serde::Serialize;

use crate::domain::profile::Profile;
use crate::domain::project::Project;
use crate::domain::review::Review;
use crate::domain::tag::Tag;
use crate::listing::Listing;

/// Data required to render the projects listing.
pub type ProjectsPageData = Listing<Project>;

/// Aggregated data required to render a single project page.
#[derive(Debug)]
pub struct ProjectPageData {
    pub project: Project,
    /// `None` when the owner profile is gone.
    pub owner: Option<Profile>,
    pub reviews: Vec<(Review, Profile)>,
}

/// Data required to render the create/update project form.
#[derive(Debug)]
pub struct ProjectFormData {
    /// Present when editing.
    pub project: Option<Project>,
    pub tags: Vec<TagOption>,
}

/// Tag checkbox on the project form.
#[derive(Debug, Serialize)]
pub struct TagOption {
    pub tag: Tag,
    /// Already linked to the edited project.
    pub checked: bool,
}
