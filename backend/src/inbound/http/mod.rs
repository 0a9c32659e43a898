//! HTTP inbound adapter exposing the read-only roster endpoints.
//!
//! Handlers are grouped per resource and depend only on the
//! [`crate::domain::ports::RosterQuery`] port carried in [`state::HttpState`].

pub mod academic_sessions;
pub mod classes;
pub mod courses;
pub mod enrollments;
pub mod envelopes;
pub mod error;
pub mod health;
pub mod orgs;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
