//! Keyword search over listing collections.
//!
//! A record takes part in search by exposing its searchable text through
//! [`Searchable`]. The filter keeps records where any of those texts contains
//! the query, ignoring case, and never yields the same record twice.

use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::profile::Profile;
use crate::domain::project::Project;
use crate::domain::types::{ProfileId, ProjectId};
use crate::params::ListParams;

/// Attribute-extraction strategy for the keyword filter.
pub trait Searchable {
    type Key: Eq + Hash;

    /// Identity used to drop repeated records from the result.
    fn search_key(&self) -> Self::Key;

    /// Texts matched against the query.
    fn search_terms(&self) -> Vec<&str>;
}

/// Profiles match on their skill names.
impl Searchable for Profile {
    type Key = ProfileId;

    fn search_key(&self) -> ProfileId {
        self.id
    }

    fn search_terms(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Projects match on their title and tag names.
impl Searchable for Project {
    type Key = ProjectId;

    fn search_key(&self) -> ProjectId {
        self.id
    }

    fn search_terms(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.tags.iter().map(|t| t.name.as_str()))
            .collect()
    }
}

fn contains_keyword(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Narrows `records` by the `search_query` parameter.
///
/// Returns the filtered records and the query echoed back for the UI. Without
/// a query (or with an empty one) the records come back untouched.
pub fn filter<T: Searchable>(params: &ListParams, records: Vec<T>) -> (Vec<T>, String) {
    let search_query = params.search_query().to_string();
    if search_query.is_empty() {
        return (records, search_query);
    }

    // Lower-cased once; each term is lower-cased inside `contains_keyword`.
    let needle = search_query.to_lowercase();
    let mut seen = HashSet::new();

    let filtered = records
        .into_iter()
        .filter(|record| {
            record
                .search_terms()
                .iter()
                .any(|term| contains_keyword(term, &needle))
        })
        .filter(|record| seen.insert(record.search_key()))
        .collect();

    (filtered, search_query)
}

/// Profile listing search: matches any skill name.
pub fn search_profiles(params: &ListParams, profiles: Vec<Profile>) -> (Vec<Profile>, String) {
    filter(params, profiles)
}

/// Project listing search: matches the title or any tag name.
pub fn search_projects(params: &ListParams, projects: Vec<Project>) -> (Vec<Project>, String) {
    filter(params, projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::project;

    fn profile(id: i32, skills: &[&str]) -> Profile {
        let skills: Vec<(&str, Option<&str>)> = skills.iter().map(|s| (*s, None)).collect();
        crate::fixtures::profile(id, &skills)
    }

    fn fixture() -> Vec<Project> {
        vec![
            project(1, "Blog Engine", &["python", "web"]),
            project(2, "Chat Bot", &["python", "cli"]),
            project(3, "Rust Parser", &["rust"]),
            project(4, "Web Scraper", &["Python"]),
        ]
    }

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn keyword_match_ignores_term_case() {
        assert!(contains_keyword("Rust Parser", "rust"));
        assert!(contains_keyword("PYTHON", "yth"));
        assert!(!contains_keyword("Chat Bot", "web"));
    }

    #[test]
    fn absent_query_returns_everything() {
        let (projects, query) = search_projects(&ListParams::new(), fixture());
        assert_eq!(query, "");
        assert_eq!(projects, fixture());
    }

    #[test]
    fn empty_query_is_same_as_absent() {
        let (projects, query) = search_projects(&ListParams::new().search(""), fixture());
        assert_eq!(query, "");
        assert_eq!(projects, fixture());
    }

    #[test]
    fn matches_tags_without_duplicates() {
        let (projects, query) = search_projects(&ListParams::new().search("python"), fixture());
        assert_eq!(query, "python");
        assert_eq!(titles(&projects), vec!["Blog Engine", "Chat Bot", "Web Scraper"]);
    }

    #[test]
    fn matches_title_or_tag_case_insensitively() {
        let (projects, _) = search_projects(&ListParams::new().search("WEB"), fixture());
        // "Blog Engine" through its tag, "Web Scraper" through its title.
        assert_eq!(titles(&projects), vec!["Blog Engine", "Web Scraper"]);
    }

    #[test]
    fn substring_match_is_not_whole_word() {
        let (projects, _) = search_projects(&ListParams::new().search("ars"), fixture());
        assert_eq!(titles(&projects), vec!["Rust Parser"]);
    }

    #[test]
    fn query_is_echoed_raw() {
        let (projects, query) = search_projects(&ListParams::new().search(" Bot"), fixture());
        assert_eq!(query, " Bot");
        assert_eq!(titles(&projects), vec!["Chat Bot"]);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let (projects, query) = search_projects(&ListParams::new().search("%$#"), fixture());
        assert!(projects.is_empty());
        assert_eq!(query, "%$#");
    }

    #[test]
    fn repeated_records_in_input_are_collapsed() {
        let mut input = fixture();
        input.push(project(2, "Chat Bot", &["python", "cli"]));

        let (projects, _) = search_projects(&ListParams::new().search("chat"), input);

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id.get(), 2);
    }

    #[test]
    fn result_is_stable_across_calls() {
        let params = ListParams::new().search("p");
        let (first, _) = search_projects(&params, fixture());
        let (second, _) = search_projects(&params, fixture());
        assert_eq!(first, second);
    }

    #[test]
    fn profiles_match_on_skill_names() {
        let profiles = vec![
            profile(1, &["Rust", "SQL"]),
            profile(2, &["JavaScript", "CSS"]),
            profile(3, &["TypeScript", "Rust"]),
        ];

        let (found, query) = search_profiles(&ListParams::new().search("script"), profiles.clone());
        let ids: Vec<i32> = found.iter().map(|p| p.id.get()).collect();
        assert_eq!(query, "script");
        assert_eq!(ids, vec![2, 3]);

        let (found, _) = search_profiles(&ListParams::new().search("rust"), profiles);
        let ids: Vec<i32> = found.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn profile_name_is_not_searched() {
        let (found, _) = search_profiles(&ListParams::new().search("Dev"), vec![profile(1, &["Go"])]);
        assert!(found.is_empty());
    }
}
