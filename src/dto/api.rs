//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::project::Project;

/// Result payload returned by [`crate::services::api::list_projects`].
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    /// Search text echoed back, empty when no filter was applied.
    pub search_query: String,
    pub page: usize,
    pub total_pages: usize,
    /// Navigation window around `page`.
    pub pages: Vec<usize>,
    pub items: Vec<Project>,
}
