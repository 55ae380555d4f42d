//! Users CRUD service: REST handlers over a single PostgreSQL table, a
//! static frontend and generated OpenAPI documentation.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
