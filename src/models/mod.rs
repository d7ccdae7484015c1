//! Data models for the users admin core.
//!
//! These models match the REST server's JSON shape (camelCase) for seamless interoperability.

mod user;

pub use user::*;
