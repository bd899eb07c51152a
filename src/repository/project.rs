//! Repository implementation for showcased projects.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::domain::types::{ProfileId, ProjectId};
use crate::models::project::{
    NewProject as DbNewProject, Project as DbProject, UpdateProject as DbUpdateProject,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::tag::{attach_tag_names, link_tags, load_project_tags};
use crate::repository::{DieselRepository, ProjectReader, ProjectWriter};

fn with_tags(
    conn: &mut SqliteConnection,
    db_projects: Vec<DbProject>,
) -> RepositoryResult<Vec<Project>> {
    let ids = db_projects.iter().map(|p| p.id).collect();
    let mut tags_by_project = load_project_tags(conn, ids)?;

    db_projects
        .into_iter()
        .map(|db_project| -> RepositoryResult<Project> {
            let tags = tags_by_project.remove(&db_project.id).unwrap_or_default();
            let mut project = Project::try_from(db_project)?;
            project.tags = tags;
            Ok(project)
        })
        .collect()
}

fn reload(conn: &mut SqliteConnection, db_project: DbProject) -> RepositoryResult<Project> {
    with_tags(conn, vec![db_project])?
        .pop()
        .ok_or(RepositoryError::NotFound)
}

impl ProjectReader for DieselRepository {
    fn get_project_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_project = projects::table
            .find(id.get())
            .select(DbProject::as_select())
            .first::<DbProject>(&mut conn)
            .optional()?;

        match db_project {
            Some(db_project) => reload(&mut conn, db_project).map(Some),
            None => Ok(None),
        }
    }

    fn list_projects(&self) -> RepositoryResult<Vec<Project>> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_projects = projects::table
            .order((
                projects::vote_ratio.desc(),
                projects::vote_total.desc(),
                projects::title.asc(),
                projects::id.asc(),
            ))
            .select(DbProject::as_select())
            .load::<DbProject>(&mut conn)?;

        with_tags(&mut conn, db_projects)
    }

    fn list_projects_by_owner(&self, owner_id: ProfileId) -> RepositoryResult<Vec<Project>> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_projects = projects::table
            .filter(projects::owner_id.eq(owner_id.get()))
            .order(projects::created_at.desc())
            .then_order_by(projects::id.desc())
            .select(DbProject::as_select())
            .load::<DbProject>(&mut conn)?;

        with_tags(&mut conn, db_projects)
    }
}

impl ProjectWriter for DieselRepository {
    fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_new_project: DbNewProject = new_project.into();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let db_project = diesel::insert_into(projects::table)
                .values(&db_new_project)
                .returning(DbProject::as_returning())
                .get_result::<DbProject>(conn)?;

            let project_id = ProjectId::try_from(db_project.id)?;
            link_tags(conn, project_id, &new_project.tag_ids)?;
            attach_tag_names(conn, project_id, &new_project.new_tags)?;

            reload(conn, db_project)
        })
    }

    fn update_project(
        &self,
        project_id: ProjectId,
        updates: &UpdateProject,
    ) -> RepositoryResult<Project> {
        use crate::schema::{project_tags, projects};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProject = updates.into();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let db_project = diesel::update(projects::table.find(project_id.get()))
                .set(&db_updates)
                .returning(DbProject::as_returning())
                .get_result::<DbProject>(conn)?;

            diesel::delete(
                project_tags::table.filter(project_tags::project_id.eq(project_id.get())),
            )
            .execute(conn)?;
            link_tags(conn, project_id, &updates.tag_ids)?;
            attach_tag_names(conn, project_id, &updates.new_tags)?;

            reload(conn, db_project)
        })
    }

    fn delete_project(&self, project_id: ProjectId) -> RepositoryResult<()> {
        use crate::schema::{project_tags, projects, reviews};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                project_tags::table.filter(project_tags::project_id.eq(project_id.get())),
            )
            .execute(conn)?;
            diesel::delete(reviews::table.filter(reviews::project_id.eq(project_id.get())))
                .execute(conn)?;
            let deleted = diesel::delete(projects::table.find(project_id.get())).execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}
