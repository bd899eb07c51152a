//! Services behind the project listing, detail, edit and review pages.

use crate::domain::project::Project;
use crate::domain::review::VoteTally;
use crate::domain::types::{ProfileId, ProjectId, TagId};
use crate::dto::projects::{ProjectFormData, ProjectPageData, ProjectsPageData, TagOption};
use crate::forms::projects::{
    DeleteProjectForm, ProjectForm, ProjectPayload, ReviewForm, ReviewPayload,
};
use crate::listing::search_and_paginate;
use crate::pagination::RESULTS_PER_PAGE;
use crate::params::ListParams;
use crate::repository::{
    ProfileReader, ProjectReader, ProjectWriter, ReviewReader, ReviewWriter, TagReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Loads the searchable, paginated projects listing.
pub fn load_projects_page<R>(repo: &R, params: &ListParams) -> ServiceResult<ProjectsPageData>
where
    R: ProjectReader + ?Sized,
{
    let projects = repo.list_projects().map_err(|err| {
        log::error!("Failed to list projects: {err}");
        err
    })?;

    Ok(search_and_paginate(params, projects, RESULTS_PER_PAGE))
}

fn get_project<R>(repo: &R, project_id: i32) -> ServiceResult<Project>
where
    R: ProjectReader + ?Sized,
{
    let project_id = ProjectId::new(project_id).map_err(|_| ServiceError::NotFound)?;
    repo.get_project_by_id(project_id)?
        .ok_or(ServiceError::NotFound)
}

/// Loads a project with its owner and reviews.
pub fn load_project_page<R>(repo: &R, project_id: i32) -> ServiceResult<ProjectPageData>
where
    R: ProjectReader + ProfileReader + ReviewReader + ?Sized,
{
    let project = get_project(repo, project_id)?;
    let owner = repo.get_profile_by_id(project.owner_id)?;
    let reviews = repo.list_reviews(project.id)?;

    Ok(ProjectPageData {
        project,
        owner,
        reviews,
    })
}

/// Loads the data for the project form; `project_id` is set when editing.
pub fn load_project_form<R>(repo: &R, project_id: Option<i32>) -> ServiceResult<ProjectFormData>
where
    R: ProjectReader + TagReader + ?Sized,
{
    let project = project_id
        .map(|id| get_project(repo, id))
        .transpose()?;
    let tags = repo
        .list_tags()?
        .into_iter()
        .map(|tag| TagOption {
            checked: project.as_ref().is_some_and(|p| p.has_tag(tag.id)),
            tag,
        })
        .collect();

    Ok(ProjectFormData { project, tags })
}

fn ensure_profile_exists<R>(repo: &R, owner_id: ProfileId) -> ServiceResult<()>
where
    R: ProfileReader + ?Sized,
{
    match repo.get_profile_by_id(owner_id)? {
        Some(_) => Ok(()),
        None => Err(ServiceError::Form("Unknown profile.".to_string())),
    }
}

/// Every checked tag must already exist.
fn ensure_tags_exist<R>(repo: &R, tag_ids: &[TagId]) -> ServiceResult<()>
where
    R: TagReader + ?Sized,
{
    if repo.get_tags_by_ids(tag_ids)?.len() == tag_ids.len() {
        Ok(())
    } else {
        Err(ServiceError::Form("Unknown tag selected.".to_string()))
    }
}

/// Validates the form and creates the project with its tags.
pub fn create_project<R>(repo: &R, form: ProjectForm) -> ServiceResult<Project>
where
    R: ProjectWriter + ProfileReader + TagReader + ?Sized,
{
    let payload = ProjectPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected project form: {err}");
        err
    })?;
    ensure_profile_exists(repo, payload.owner_id)?;
    ensure_tags_exist(repo, &payload.tag_ids)?;

    let project = repo
        .create_project(&payload.into_new_project())
        .map_err(|err| {
            log::error!("Failed to create project: {err}");
            err
        })?;

    log::info!("Created project {} for profile {}", project.id, project.owner_id);
    Ok(project)
}

/// Validates the form and updates the project. Only its owner may edit it.
pub fn update_project<R>(repo: &R, project_id: i32, form: ProjectForm) -> ServiceResult<Project>
where
    R: ProjectReader + ProjectWriter + TagReader + ?Sized,
{
    let project = get_project(repo, project_id)?;
    let payload = ProjectPayload::try_from(form)?;

    if payload.owner_id != project.owner_id {
        return Err(ServiceError::Unauthorized);
    }
    ensure_tags_exist(repo, &payload.tag_ids)?;

    repo.update_project(project.id, &payload.into_update_project())
        .map_err(|err| {
            log::error!("Failed to update project {}: {err}", project.id);
            err.into()
        })
}

/// Deletes the project together with its tag links and reviews. Only its
/// owner may delete it.
pub fn delete_project<R>(repo: &R, project_id: i32, form: DeleteProjectForm) -> ServiceResult<()>
where
    R: ProjectReader + ProjectWriter + ?Sized,
{
    let project = get_project(repo, project_id)?;

    if form.owner_id()? != project.owner_id {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_project(project.id)?;
    log::info!("Deleted project {}", project.id);
    Ok(())
}

/// Records a vote on the project and returns the refreshed tally.
///
/// Owners cannot vote on their own projects and each profile votes once.
pub fn submit_review<R>(repo: &R, project_id: i32, form: ReviewForm) -> ServiceResult<VoteTally>
where
    R: ProjectReader + ProfileReader + ReviewReader + ReviewWriter + ?Sized,
{
    let project = get_project(repo, project_id)?;
    let payload = ReviewPayload::try_from(form)?;

    ensure_profile_exists(repo, payload.owner_id)?;

    if payload.owner_id == project.owner_id {
        return Err(ServiceError::Conflict(
            "You cannot review your own project.".to_string(),
        ));
    }

    if repo.has_reviewed(project.id, payload.owner_id)? {
        return Err(ServiceError::Conflict(
            "You have already submitted a review for this project.".to_string(),
        ));
    }

    let (_, tally) = repo
        .create_review(&payload.into_domain(project.id))
        .map_err(|err| {
            log::error!("Failed to save review for project {}: {err}", project.id);
            err
        })?;

    Ok(tally)
}
