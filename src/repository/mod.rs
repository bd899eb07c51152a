//! Persistence traits and their Diesel/SQLite implementation.
//!
//! Services depend on the narrow reader/writer traits; [`DieselRepository`]
//! implements all of them on top of a shared connection pool.

use crate::db::{DbConnection, DbPool};
use crate::domain::{
    profile::{NewProfile, Profile},
    project::{NewProject, Project, UpdateProject},
    review::{NewReview, Review, VoteTally},
    skill::{NewSkill, Skill},
    tag::Tag,
    types::{ProfileId, ProjectId, TagId},
};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod profile;
pub mod project;
pub mod review;
pub mod tag;

/// Diesel-backed repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|e| {
            log::error!("Failed to get connection from pool: {e}");
            e.into()
        })
    }
}

pub trait ProfileReader {
    /// Loads a profile together with its skills.
    fn get_profile_by_id(&self, id: ProfileId) -> RepositoryResult<Option<Profile>>;
    /// Loads every profile with its skills, oldest first.
    fn list_profiles(&self) -> RepositoryResult<Vec<Profile>>;
}

pub trait ProfileWriter {
    fn create_profile(&self, new_profile: &NewProfile) -> RepositoryResult<Profile>;
    fn create_skill(&self, new_skill: &NewSkill) -> RepositoryResult<Skill>;
}

pub trait ProjectReader {
    /// Loads a project together with its tags.
    fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
    /// Loads every project with its tags, best rated first.
    fn list_projects(&self) -> RepositoryResult<Vec<Project>>;
    fn list_projects_by_owner(&self, owner_id: ProfileId) -> RepositoryResult<Vec<Project>>;
}

pub trait ProjectWriter {
    /// Inserts the project and links its selected and new tags in one transaction.
    fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project>;
    /// Updates the project and replaces its tag links in one transaction.
    fn update_project(
        &self,
        project_id: ProjectId,
        updates: &UpdateProject,
    ) -> RepositoryResult<Project>;
    fn delete_project(&self, project_id: ProjectId) -> RepositoryResult<()>;
}

pub trait TagReader {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    /// Loads the tags behind `ids`; unknown ids are skipped.
    fn get_tags_by_ids(&self, ids: &[TagId]) -> RepositoryResult<Vec<Tag>>;
}

pub trait ReviewReader {
    /// Reviews of a project with their authors, newest first.
    fn list_reviews(&self, project_id: ProjectId) -> RepositoryResult<Vec<(Review, Profile)>>;
    fn has_reviewed(&self, project_id: ProjectId, owner_id: ProfileId) -> RepositoryResult<bool>;
}

pub trait ReviewWriter {
    /// Stores the review and persists the recomputed vote tally of its project.
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<(Review, VoteTally)>;
}
