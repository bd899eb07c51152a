//! Repository implementation for developer profiles and their skills.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::profile::{NewProfile, Profile};
use crate::domain::skill::{NewSkill, Skill};
use crate::domain::types::ProfileId;
use crate::models::profile::{NewProfile as DbNewProfile, Profile as DbProfile};
use crate::models::skill::{NewSkill as DbNewSkill, Skill as DbSkill};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProfileReader, ProfileWriter};

/// Converts database rows into domain profiles with their skills attached.
fn with_skills(
    conn: &mut SqliteConnection,
    db_profiles: Vec<DbProfile>,
) -> RepositoryResult<Vec<Profile>> {
    use crate::schema::skills;

    let ids: Vec<i32> = db_profiles.iter().map(|p| p.id).collect();

    let db_skills = skills::table
        .filter(skills::owner_id.eq_any(ids))
        .order((skills::owner_id.asc(), skills::id.asc()))
        .select(DbSkill::as_select())
        .load::<DbSkill>(conn)?;

    let mut skills_by_owner: HashMap<i32, Vec<Skill>> = HashMap::new();
    for db_skill in db_skills {
        let owner_id = db_skill.owner_id;
        let skill = Skill::try_from(db_skill)?;
        skills_by_owner.entry(owner_id).or_default().push(skill);
    }

    db_profiles
        .into_iter()
        .map(|db_profile| -> RepositoryResult<Profile> {
            let skills = skills_by_owner.remove(&db_profile.id).unwrap_or_default();
            let mut profile = Profile::try_from(db_profile)?;
            profile.skills = skills;
            Ok(profile)
        })
        .collect()
}

impl ProfileReader for DieselRepository {
    fn get_profile_by_id(&self, id: ProfileId) -> RepositoryResult<Option<Profile>> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let db_profile = profiles::table
            .find(id.get())
            .select(DbProfile::as_select())
            .first::<DbProfile>(&mut conn)
            .optional()?;

        match db_profile {
            Some(db_profile) => Ok(with_skills(&mut conn, vec![db_profile])?.pop()),
            None => Ok(None),
        }
    }

    fn list_profiles(&self) -> RepositoryResult<Vec<Profile>> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let db_profiles = profiles::table
            .order((profiles::created_at.asc(), profiles::id.asc()))
            .select(DbProfile::as_select())
            .load::<DbProfile>(&mut conn)?;

        with_skills(&mut conn, db_profiles)
    }
}

impl ProfileWriter for DieselRepository {
    fn create_profile(&self, new_profile: &NewProfile) -> RepositoryResult<Profile> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let db_new_profile: DbNewProfile = new_profile.into();

        let db_profile = diesel::insert_into(profiles::table)
            .values(&db_new_profile)
            .returning(DbProfile::as_returning())
            .get_result::<DbProfile>(&mut conn)?;

        Profile::try_from(db_profile).map_err(RepositoryError::from)
    }

    fn create_skill(&self, new_skill: &NewSkill) -> RepositoryResult<Skill> {
        use crate::schema::skills;

        let mut conn = self.conn()?;
        let db_new_skill: DbNewSkill = new_skill.into();

        let db_skill = diesel::insert_into(skills::table)
            .values(&db_new_skill)
            .returning(DbSkill::as_returning())
            .get_result::<DbSkill>(&mut conn)?;

        Skill::try_from(db_skill).map_err(RepositoryError::from)
    }
}
