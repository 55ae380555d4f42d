//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the [`UserRepository`] port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Build state around a repository implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use users_api::domain::ports::FixtureUserRepository;
    /// use users_api::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureUserRepository::new()));
    /// # let _ = state;
    /// ```
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
