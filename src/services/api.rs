//! Services backing the JSON API.

use crate::dto::api::ProjectsResponse;
use crate::params::ListParams;
use crate::repository::ProjectReader;
use crate::services::ServiceResult;
use crate::services::projects::load_projects_page;

/// Same listing as the projects page, shaped for JSON clients.
pub fn list_projects<R>(repo: &R, params: &ListParams) -> ServiceResult<ProjectsResponse>
where
    R: ProjectReader + ?Sized,
{
    let listing = load_projects_page(repo, params)?;

    Ok(ProjectsResponse {
        search_query: listing.search_query,
        page: listing.page.page,
        total_pages: listing.page.total_pages,
        pages: listing.page.pages,
        items: listing.page.items,
    })
}
