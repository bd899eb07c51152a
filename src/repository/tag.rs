//! Tag persistence: listing, get-or-create and project linking.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::tag::Tag;
use crate::domain::types::{ProjectId, TagId, TagName};
use crate::models::tag::{NewProjectTag, NewTag, Tag as DbTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader};

/// Loads the tags of the given projects keyed by project id, sorted by name.
pub(crate) fn load_project_tags(
    conn: &mut SqliteConnection,
    project_ids: Vec<i32>,
) -> RepositoryResult<HashMap<i32, Vec<Tag>>> {
    use crate::schema::{project_tags, tags};

    let rows = project_tags::table
        .inner_join(tags::table)
        .filter(project_tags::project_id.eq_any(project_ids))
        .order((project_tags::project_id.asc(), tags::name.asc()))
        .select((project_tags::project_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut by_project: HashMap<i32, Vec<Tag>> = HashMap::new();
    for (project_id, db_tag) in rows {
        by_project
            .entry(project_id)
            .or_default()
            .push(Tag::try_from(db_tag)?);
    }
    Ok(by_project)
}

/// Links existing tags to a project; links that already exist are kept.
pub(crate) fn link_tags(
    conn: &mut SqliteConnection,
    project_id: ProjectId,
    tag_ids: &[TagId],
) -> RepositoryResult<usize> {
    use crate::schema::project_tags;

    let mut linked = 0;
    for tag_id in tag_ids {
        linked += diesel::insert_or_ignore_into(project_tags::table)
            .values(NewProjectTag {
                project_id: project_id.get(),
                tag_id: tag_id.get(),
            })
            .execute(conn)?;
    }
    Ok(linked)
}

/// Get-or-creates the named tags and links them to the project.
pub(crate) fn attach_tag_names(
    conn: &mut SqliteConnection,
    project_id: ProjectId,
    names: &[TagName],
) -> RepositoryResult<Vec<Tag>> {
    use crate::schema::tags;

    if names.is_empty() {
        return Ok(Vec::new());
    }

    for name in names {
        diesel::insert_or_ignore_into(tags::table)
            .values(NewTag {
                name: name.as_str(),
            })
            .execute(conn)?;
    }

    let raw_names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
    let mut by_name: HashMap<String, Tag> = tags::table
        .filter(tags::name.eq_any(raw_names))
        .select(DbTag::as_select())
        .load::<DbTag>(conn)?
        .into_iter()
        .map(|db_tag| -> RepositoryResult<(String, Tag)> {
            let tag = Tag::try_from(db_tag)?;
            Ok((tag.name.as_str().to_string(), tag))
        })
        .collect::<Result<_, RepositoryError>>()?;

    let tags = names
        .iter()
        .filter_map(|name| by_name.remove(name.as_str()))
        .collect::<Vec<_>>();

    let tag_ids = tags.iter().map(|t| t.id).collect::<Vec<_>>();
    link_tags(conn, project_id, &tag_ids)?;

    Ok(tags)
}

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        tags::table
            .order(tags::name.asc())
            .select(DbTag::as_select())
            .load::<DbTag>(&mut conn)?
            .into_iter()
            .map(|db_tag| Tag::try_from(db_tag).map_err(RepositoryError::from))
            .collect()
    }

    fn get_tags_by_ids(&self, ids: &[TagId]) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::tags;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.get()).collect();
        tags::table
            .filter(tags::id.eq_any(raw_ids))
            .order(tags::name.asc())
            .select(DbTag::as_select())
            .load::<DbTag>(&mut conn)?
            .into_iter()
            .map(|db_tag| Tag::try_from(db_tag).map_err(RepositoryError::from))
            .collect()
    }
}
