use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProfileId, ProjectId, ReviewId, RichText, VoteValue};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub owner_id: ProfileId,
    pub project_id: ProjectId,
    pub body: Option<RichText>,
    pub value: VoteValue,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewReview {
    pub owner_id: ProfileId,
    pub project_id: ProjectId,
    pub body: Option<RichText>,
    pub value: VoteValue,
}

/// Derived vote aggregate persisted on the project after every review.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct VoteTally {
    pub total: i32,
    /// Share of up votes, as a rounded percentage.
    pub ratio: i32,
}

impl VoteTally {
    pub fn from_votes<I>(votes: I) -> Self
    where
        I: IntoIterator<Item = VoteValue>,
    {
        let (total, up) = votes.into_iter().fold((0i32, 0i32), |(total, up), vote| {
            (total + 1, up + i32::from(vote == VoteValue::Up))
        });

        let ratio = if total == 0 {
            0
        } else {
            (f64::from(up) * 100.0 / f64::from(total)).round() as i32
        };

        Self { total, ratio }
    }
}
