//! Port abstraction for the user record store and its single error kind.

use std::num::IntErrorKind;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{CreatedUser, DeletedUser, NewUser, UpdatedUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures surfaced by the record store driver.
    ///
    /// The message carries the driver's own text so clients see the raw
    /// cause rather than a generic placeholder.
    pub enum StoreError {
        /// No usable connection to the store.
        Connection { message: String } => "store connection failed: {message}",
        /// The store rejected or failed to run the statement.
        Query { message: String } => "store query failed: {message}",
    }
}

/// Record repository: one parameterised statement per operation.
///
/// Identifiers for `update` and `delete` arrive exactly as they appeared in
/// the request path; coercing them to the integer key is part of the store
/// call. Neither operation checks that the row existed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every record in the store's natural scan order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a record and return the assigned id with the echoed fields.
    async fn create(&self, user: &NewUser) -> Result<CreatedUser, StoreError>;

    /// Replace the supplied fields on the matching row.
    async fn update(&self, id: &str, changes: &UserChanges) -> Result<UpdatedUser, StoreError>;

    /// Remove the matching row.
    async fn delete(&self, id: &str) -> Result<DeletedUser, StoreError>;
}

/// Coerce a raw path identifier the way the store does for an integer key.
///
/// # Errors
/// Returns [`StoreError::Query`] carrying PostgreSQL's own wording: an
/// out-of-range message for integers that overflow 32 bits, and a syntax
/// message for anything else that is not an integer.
pub fn parse_user_id(raw: &str) -> Result<UserId, StoreError> {
    raw.trim()
        .parse::<i32>()
        .map(UserId::new)
        .map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => StoreError::query(format!(
                "value \"{raw}\" is out of range for type integer"
            )),
            _ => StoreError::query(format!("invalid input syntax for type integer: \"{raw}\"")),
        })
}

#[derive(Debug, Default)]
struct FixtureState {
    rows: Vec<User>,
    next_id: i32,
    failure: Option<StoreError>,
}

/// In-memory repository used by tests and local tooling.
///
/// Behaves like the SQL adapter: ids start at 1 and increase monotonically,
/// rows keep insertion order, and updates or deletes of missing ids succeed
/// silently. [`FixtureUserRepository::failing`] makes every call fail with
/// the given error without touching stored rows.
#[derive(Debug, Default)]
pub struct FixtureUserRepository {
    state: Mutex<FixtureState>,
}

impl FixtureUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose every operation fails with `error`.
    #[must_use]
    pub fn failing(error: StoreError) -> Self {
        let repo = Self::default();
        repo.fail_with(Some(error));
        repo
    }

    /// Inject or clear a failure for subsequent calls.
    pub fn fail_with(&self, error: Option<StoreError>) {
        self.lock().failure = error;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FixtureState> {
        // A poisoned lock only means a test panicked mid-call; the rows are
        // still consistent because every mutation is a single statement.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn guard(state: &FixtureState) -> Result<(), StoreError> {
        state.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let state = self.lock();
        Self::guard(&state)?;
        Ok(state.rows.clone())
    }

    async fn create(&self, user: &NewUser) -> Result<CreatedUser, StoreError> {
        let mut state = self.lock();
        Self::guard(&state)?;
        state.next_id += 1;
        let id = UserId::new(state.next_id);
        state
            .rows
            .push(User::new(id, user.name.clone().flatten(), user.email.clone().flatten()));
        Ok(CreatedUser {
            id,
            fields: user.clone(),
        })
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<UpdatedUser, StoreError> {
        let mut state = self.lock();
        Self::guard(&state)?;
        let key = parse_user_id(id)?;
        if changes.is_empty() {
            return Err(StoreError::query("no fields supplied for update"));
        }
        if let Some(row) = state.rows.iter_mut().find(|row| row.id == key) {
            if let Some(name) = &changes.name {
                row.name.clone_from(name);
            }
            if let Some(email) = &changes.email {
                row.email.clone_from(email);
            }
        }
        Ok(UpdatedUser {
            id: id.to_owned(),
            changes: changes.clone(),
        })
    }

    async fn delete(&self, id: &str) -> Result<DeletedUser, StoreError> {
        let mut state = self.lock();
        Self::guard(&state)?;
        let key = parse_user_id(id)?;
        state.rows.retain(|row| row.id != key);
        Ok(DeletedUser::new(id))
    }
}
