#![allow(dead_code)]

use devsearch::db::{DbPool, establish_connection_pool};
use devsearch::domain::profile::{NewProfile, Profile};
use devsearch::domain::project::{NewProject, Project};
use devsearch::domain::skill::NewSkill;
use devsearch::domain::types::{ProfileId, ProfileName, ProjectTitle, SkillName};
use devsearch::repository::{DieselRepository, ProfileWriter, ProjectWriter};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create connection pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn create_profile(repo: &DieselRepository, name: &str, skills: &[(&str, &str)]) -> Profile {
    let profile = repo
        .create_profile(&NewProfile::new(ProfileName::new(name).unwrap()))
        .unwrap();

    for (skill, description) in skills {
        repo.create_skill(&NewSkill::new(
            profile.id,
            SkillName::new(*skill).unwrap(),
            Some(description.to_string()),
        ))
        .unwrap();
    }
    profile
}

pub fn new_project(owner_id: ProfileId, title: &str, new_tags: &str) -> NewProject {
    NewProject {
        owner_id,
        title: ProjectTitle::new(title).unwrap(),
        description: None,
        demo_link: None,
        source_link: None,
        tag_ids: vec![],
        new_tags: devsearch::domain::tag::parse_tag_names(new_tags),
    }
}

pub fn create_project(
    repo: &DieselRepository,
    owner_id: ProfileId,
    title: &str,
    new_tags: &str,
) -> Project {
    repo.create_project(&new_project(owner_id, title, new_tags))
        .unwrap()
}
