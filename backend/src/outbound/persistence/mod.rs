//! PostgreSQL persistence adapter using Diesel.
//!
//! This module provides the concrete implementation of the domain
//! [`UserRepository`](crate::domain::ports::UserRepository) port, backed by
//! a single shared `diesel-async` connection.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel models
//!   and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and the table
//!   definition (`schema.rs`) are never exposed to the domain layer.
//! - **Driver errors pass through**: failures become
//!   [`StoreError`](crate::domain::StoreError) carrying the driver's text.
//!
//! # Example
//!
//! ```no_run
//! use users_api::outbound::persistence::{DieselUserRepository, StoreClient, StoreConfig};
//!
//! # async fn wire() {
//! let config = StoreConfig::new("localhost", "myuser", "mypassword", "mydatabase");
//! let client = StoreClient::connect(&config).await;
//! let repo = DieselUserRepository::new(client);
//! # }
//! ```

mod connection;
mod diesel_error_mapping;
mod diesel_user_repository;
mod models;
mod schema;

pub use connection::{DEFAULT_STORE_PORT, StoreClient, StoreClientError, StoreConfig};
pub use diesel_user_repository::DieselUserRepository;
