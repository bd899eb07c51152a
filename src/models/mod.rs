//! Database models shared across the devsearch repository.

#[cfg(feature = "server")]
pub mod config;
pub mod profile;
pub mod project;
pub mod review;
pub mod skill;
pub mod tag;
