//! Mapping from Diesel and connection failures to [`StoreError`].
//!
//! Messages are passed through from the driver so the HTTP adapter can echo
//! the store's own explanation back to clients.

use tracing::debug;

use crate::domain::StoreError;

use super::connection::StoreClientError;

/// Map a connection checkout failure into a store connection error.
pub(crate) fn map_client_error(error: StoreClientError) -> StoreError {
    StoreError::connection(error.to_string())
}

/// Map Diesel error variants into connection or query failures.
///
/// Only a closed connection counts as a connection failure; everything the
/// server rejects, and everything the query builder refuses to render, is a
/// query failure.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StoreError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => StoreError::query(info.message()),
        DieselError::NotFound => StoreError::query("record not found"),
        other => StoreError::query(other.to_string()),
    }
}
