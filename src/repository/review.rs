//! Repository implementation for project reviews and vote tallies.

use diesel::prelude::*;

use crate::domain::profile::Profile;
use crate::domain::review::{NewReview, Review, VoteTally};
use crate::domain::types::{ProfileId, ProjectId, VoteValue};
use crate::models::profile::Profile as DbProfile;
use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self, project_id: ProjectId) -> RepositoryResult<Vec<(Review, Profile)>> {
        use crate::schema::{profiles, reviews};

        let mut conn = self.conn()?;
        let rows = reviews::table
            .inner_join(profiles::table)
            .filter(reviews::project_id.eq(project_id.get()))
            .order((reviews::created_at.desc(), reviews::id.desc()))
            .select((DbReview::as_select(), DbProfile::as_select()))
            .load::<(DbReview, DbProfile)>(&mut conn)?;

        rows.into_iter()
            .map(|(db_review, db_profile)| -> RepositoryResult<(Review, Profile)> {
                Ok((Review::try_from(db_review)?, Profile::try_from(db_profile)?))
            })
            .collect()
    }

    fn has_reviewed(&self, project_id: ProjectId, owner_id: ProfileId) -> RepositoryResult<bool> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let count: i64 = reviews::table
            .filter(reviews::project_id.eq(project_id.get()))
            .filter(reviews::owner_id.eq(owner_id.get()))
            .count()
            .get_result(&mut conn)?;

        Ok(count > 0)
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<(Review, VoteTally)> {
        use crate::schema::{projects, reviews};

        let mut conn = self.conn()?;
        let db_new_review: DbNewReview = new_review.into();
        let project_id = new_review.project_id.get();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let db_review = diesel::insert_into(reviews::table)
                .values(&db_new_review)
                .returning(DbReview::as_returning())
                .get_result::<DbReview>(conn)?;

            let votes = reviews::table
                .filter(reviews::project_id.eq(project_id))
                .select(reviews::value)
                .load::<String>(conn)?
                .iter()
                .map(|value| value.parse::<VoteValue>())
                .collect::<Result<Vec<_>, _>>()?;

            let tally = VoteTally::from_votes(votes);

            diesel::update(projects::table.find(project_id))
                .set((
                    projects::vote_total.eq(tally.total),
                    projects::vote_ratio.eq(tally.ratio),
                ))
                .execute(conn)?;

            Ok((Review::try_from(db_review)?, tally))
        })
    }
}
