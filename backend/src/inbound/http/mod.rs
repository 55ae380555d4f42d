//! HTTP inbound adapter exposing the users REST endpoints, static assets
//! and health probes.

pub mod assets;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
