//! Diesel table definitions for the record store.
//!
//! The table is provisioned outside this service; no migrations ship with
//! the crate. The equivalent DDL is:
//!
//! ```sql
//! CREATE TABLE users (
//!     id    SERIAL PRIMARY KEY,
//!     name  VARCHAR,
//!     email VARCHAR
//! );
//! ```

diesel::table! {
    /// User records.
    ///
    /// `id` is assigned by the `SERIAL` sequence; `name` and `email` are
    /// free-form and nullable.
    users (id) {
        /// Primary key assigned by the store.
        id -> Int4,
        /// Display name as supplied by the caller.
        name -> Nullable<Varchar>,
        /// Contact address as supplied by the caller.
        email -> Nullable<Varchar>,
    }
}
