//! Domain primitives and ports.
//!
//! Purpose: define the user record types exchanged between the HTTP adapter
//! and the store adapter, and the [`ports::UserRepository`] boundary both
//! sides agree on. Types here carry serde contracts but no framework
//! concerns.
//!
//! Public surface:
//! - User, UserId: persisted record and its store-assigned key.
//! - NewUser, UserChanges: caller-supplied field values.
//! - CreatedUser, UpdatedUser, DeletedUser: operation results echoed to clients.

pub mod ports;
pub mod user;

pub use self::ports::StoreError;
pub use self::user::{
    CreatedUser, DeletedUser, NewUser, USER_DELETED_MESSAGE, UpdatedUser, User, UserChanges,
    UserId,
};
