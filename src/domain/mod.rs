//! Domain aggregates exposed by the devsearch service layer.

pub mod profile;
pub mod project;
pub mod review;
pub mod skill;
pub mod tag;
pub mod types;
