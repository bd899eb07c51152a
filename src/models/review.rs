use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::domain::types::{
    ProfileId, ProjectId, ReviewId, RichText, TypeConstraintError, VoteValue,
};
use crate::models::profile::Profile;
use crate::models::project::Project;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Profile, foreign_key = owner_id))]
#[diesel(belongs_to(Project, foreign_key = project_id))]
#[diesel(table_name = crate::schema::reviews)]
pub struct Review {
    pub id: i32,
    pub owner_id: i32,
    pub project_id: i32,
    pub body: Option<String>,
    pub value: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub owner_id: i32,
    pub project_id: i32,
    pub body: Option<&'a str>,
    pub value: &'static str,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReviewId::try_from(review.id)?,
            owner_id: ProfileId::try_from(review.owner_id)?,
            project_id: ProjectId::try_from(review.project_id)?,
            body: review.body.and_then(RichText::new),
            value: review.value.parse::<VoteValue>()?,
            created_at: review.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(review: &'a DomainNewReview) -> Self {
        Self {
            owner_id: review.owner_id.get(),
            project_id: review.project_id.get(),
            body: review.body.as_ref().map(RichText::as_str),
            value: review.value.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vote_is_rejected() {
        let db = Review {
            id: 1,
            owner_id: 1,
            project_id: 1,
            body: None,
            value: "meh".to_string(),
            created_at: NaiveDateTime::default(),
        };
        assert!(DomainReview::try_from(db).is_err());
    }

    #[test]
    fn from_domain_new_review() {
        let domain = DomainNewReview {
            owner_id: ProfileId::new(4).unwrap(),
            project_id: ProjectId::new(9).unwrap(),
            body: RichText::new("Nice work"),
            value: VoteValue::Down,
        };
        let new: NewReview = (&domain).into();
        assert_eq!(new.owner_id, 4);
        assert_eq!(new.project_id, 9);
        assert_eq!(new.body, Some("Nice work"));
        assert_eq!(new.value, "down");
    }
}
