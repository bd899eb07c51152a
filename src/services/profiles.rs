//! Services behind the developers listing and profile pages.

use crate::domain::types::ProfileId;
use crate::dto::profiles::{ProfilePageData, ProfilesPageData};
use crate::listing::search_and_paginate;
use crate::pagination::RESULTS_PER_PAGE;
use crate::params::ListParams;
use crate::repository::{ProfileReader, ProjectReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads profiles matching the searched skill, one page at a time.
pub fn load_profiles_page<R>(repo: &R, params: &ListParams) -> ServiceResult<ProfilesPageData>
where
    R: ProfileReader + ?Sized,
{
    let profiles = repo.list_profiles().map_err(|err| {
        log::error!("Failed to list profiles: {err}");
        err
    })?;

    Ok(search_and_paginate(params, profiles, RESULTS_PER_PAGE))
}

/// Loads a profile with its skills split into top and other, plus its projects.
pub fn load_profile_page<R>(repo: &R, profile_id: i32) -> ServiceResult<ProfilePageData>
where
    R: ProfileReader + ProjectReader + ?Sized,
{
    let profile_id = ProfileId::new(profile_id).map_err(|_| ServiceError::NotFound)?;
    let profile = repo
        .get_profile_by_id(profile_id)?
        .ok_or(ServiceError::NotFound)?;

    let projects = repo.list_projects_by_owner(profile.id)?;
    let (top_skills, other_skills) = profile.partition_skills();

    Ok(ProfilePageData {
        profile,
        top_skills,
        other_skills,
        projects,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::fixtures::{owned_project, profile};
    use crate::repository::mock::MockRepository;

    #[test]
    fn profiles_page_filters_by_skill() {
        let mut repo = MockRepository::new();
        repo.expect_list_profiles().times(1).returning(|| {
            Ok(vec![
                profile(1, &[("Rust", None)]),
                profile(2, &[("Django", None), ("JavaScript", None)]),
                profile(3, &[("Trust & Safety", None)]),
            ])
        });

        let data = load_profiles_page(&repo, &ListParams::new().search("rust")).unwrap();

        let ids: Vec<i32> = data.page.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(data.search_query, "rust");
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(data.page.pages, vec![1]);
    }

    #[test]
    fn profile_page_splits_skills() {
        let mut repo = MockRepository::new();
        repo.expect_get_profile_by_id().returning(|id| {
            Ok(Some(profile(
                id.get(),
                &[("Rust", Some("Systems work")), ("SQL", None)],
            )))
        });
        repo.expect_list_projects_by_owner()
            .withf(|owner| owner.get() == 4)
            .returning(|owner| Ok(vec![owned_project(9, owner.get(), "Blog Engine")]));

        let data = load_profile_page(&repo, 4).unwrap();

        assert_eq!(data.top_skills.len(), 1);
        assert_eq!(data.top_skills[0].name.as_str(), "Rust");
        assert_eq!(data.other_skills[0].name.as_str(), "SQL");
        assert_eq!(data.projects.len(), 1);
    }

    #[test]
    fn missing_profile_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_profile_by_id().returning(|_| Ok(None));
        repo.expect_list_projects_by_owner().times(0);

        assert!(matches!(
            load_profile_page(&repo, 4),
            Err(ServiceError::NotFound)
        ));
    }
}
