//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the roster port and remain testable without a generated
//! dataset.

use std::sync::Arc;

use crate::domain::ports::RosterQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only roster lookups.
    pub roster: Arc<dyn RosterQuery>,
}

impl HttpState {
    /// Build state from the roster port implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::InMemoryRosterQuery;
    /// use backend::inbound::http::state::HttpState;
    /// use chrono::Utc;
    /// use roster_data::{GeneratorOptions, generate_roster};
    ///
    /// let dataset = Arc::new(generate_roster(&GeneratorOptions::seeded(1), Utc::now()));
    /// let state = HttpState::new(Arc::new(InMemoryRosterQuery::new(dataset)));
    /// assert_eq!(state.roster.courses().len(), 50);
    /// ```
    pub fn new(roster: Arc<dyn RosterQuery>) -> Self {
        Self { roster }
    }
}
