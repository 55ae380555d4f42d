//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] is assembled at compile time from the `#[utoipa::path]`
//! annotations on the handlers and the schema wrappers in
//! [`crate::inbound::http::schemas`]. It is served at `/docs.json`, rendered
//! by Swagger UI at `/docs/`, and exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::{ErrorBody, ErrorDetail};
use crate::inbound::http::schemas::{
    DeletedUserSchema, UpdatedUserSchema, UserInputSchema, UserSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Documentation",
        version = "1.0.0",
        description = "API Documentation for the User API"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserInputSchema,
        UpdatedUserSchema,
        DeletedUserSchema,
        ErrorBody,
        ErrorDetail
    )),
    tags(
        (name = "Users", description = "User management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
