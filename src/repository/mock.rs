//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::profile::{NewProfile, Profile};
use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::domain::review::{NewReview, Review, VoteTally};
use crate::domain::skill::{NewSkill, Skill};
use crate::domain::tag::Tag;
use crate::domain::types::{ProfileId, ProjectId, TagId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ProfileReader, ProfileWriter, ProjectReader, ProjectWriter, ReviewReader, ReviewWriter,
    TagReader,
};

mock! {
    pub Repository {}

    impl ProfileReader for Repository {
        fn get_profile_by_id(&self, id: ProfileId) -> RepositoryResult<Option<Profile>>;
        fn list_profiles(&self) -> RepositoryResult<Vec<Profile>>;
    }

    impl ProfileWriter for Repository {
        fn create_profile(&self, new_profile: &NewProfile) -> RepositoryResult<Profile>;
        fn create_skill(&self, new_skill: &NewSkill) -> RepositoryResult<Skill>;
    }

    impl ProjectReader for Repository {
        fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;
        fn list_projects(&self) -> RepositoryResult<Vec<Project>>;
        fn list_projects_by_owner(&self, owner_id: ProfileId) -> RepositoryResult<Vec<Project>>;
    }

    impl ProjectWriter for Repository {
        fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project>;
        fn update_project(
            &self,
            project_id: ProjectId,
            updates: &UpdateProject,
        ) -> RepositoryResult<Project>;
        fn delete_project(&self, project_id: ProjectId) -> RepositoryResult<()>;
    }

    impl TagReader for Repository {
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
        fn get_tags_by_ids(&self, ids: &[TagId]) -> RepositoryResult<Vec<Tag>>;
    }

    impl ReviewReader for Repository {
        fn list_reviews(&self, project_id: ProjectId) -> RepositoryResult<Vec<(Review, Profile)>>;
        fn has_reviewed(&self, project_id: ProjectId, owner_id: ProfileId) -> RepositoryResult<bool>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<(Review, VoteTally)>;
    }
}
