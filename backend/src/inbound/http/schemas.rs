//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts and register under the
//! short names clients see in the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// The user id.
    #[schema(example = 1)]
    id: i32,
    /// The user name.
    #[schema(example = "John Doe")]
    name: String,
    /// The user email.
    #[schema(example = "john@example.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::NewUser`] and
/// [`crate::domain::UserChanges`].
///
/// Neither field is enforced at runtime; updates send whichever fields
/// should change. Numbers and booleans are stored as text, and `null`
/// clears the column.
#[derive(ToSchema)]
#[schema(as = UserInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserInputSchema {
    /// The user name.
    #[schema(example = "John Doe")]
    name: Option<String>,
    /// The user email.
    #[schema(example = "john@example.com")]
    email: Option<String>,
}

/// OpenAPI schema for [`crate::domain::UpdatedUser`].
///
/// The id is echoed exactly as it appeared in the request path.
#[derive(ToSchema)]
#[schema(as = UpdatedUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdatedUserSchema {
    /// Path identifier, verbatim.
    #[schema(example = "1")]
    id: String,
    /// The user name, when supplied.
    #[schema(example = "John Doe")]
    name: Option<String>,
    /// The user email, when supplied.
    #[schema(example = "new@example.com")]
    email: Option<String>,
}

/// OpenAPI schema for [`crate::domain::DeletedUser`].
#[derive(ToSchema)]
#[schema(as = DeletedUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeletedUserSchema {
    /// Fixed confirmation text.
    #[schema(example = "User deleted")]
    message: String,
    /// Path identifier, verbatim.
    #[schema(example = "1")]
    id: String,
}
