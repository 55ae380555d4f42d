//! User record model.
//!
//! A user is the only entity the service manages. `name` and `email` are
//! caller-supplied and never validated: a missing field is stored as `NULL`
//! and read back as `None`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
///
/// Serialised transparently as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record as returned by list queries.
///
/// Absent fields serialise as `null`, matching the stored column values.
///
/// # Examples
/// ```
/// use users_api::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), Some("John Doe".into()), None);
/// let json = serde_json::to_value(&user).expect("serialise user");
/// assert_eq!(json["id"], 1);
/// assert!(json["email"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name, if one was supplied.
    pub name: Option<String>,
    /// Contact address, if one was supplied.
    pub email: Option<String>,
}

impl User {
    /// Assemble a user record.
    #[must_use]
    pub const fn new(id: UserId, name: Option<String>, email: Option<String>) -> Self {
        Self { id, name, email }
    }
}

/// A field as it appeared in a request body.
///
/// `None` when the key was absent, `Some(None)` for an explicit `null`, and
/// `Some(Some(text))` for any JSON scalar. Numbers keep their JSON spelling
/// and booleans become `"1"` or `"0"`, the way a SQL driver renders them
/// into a text column.
pub type SuppliedField = Option<Option<String>>;

/// Field values for a new user.
///
/// Both fields are optional on the wire; the service does not enforce
/// presence. Absent and `null` fields are both stored as `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name to store.
    #[serde(
        default,
        deserialize_with = "scalar_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: SuppliedField,
    /// Contact address to store.
    #[serde(
        default,
        deserialize_with = "scalar_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: SuppliedField,
}

impl NewUser {
    /// Name to insert, with `null` and absence both collapsing to `None`.
    #[must_use]
    pub fn stored_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Option::as_deref)
    }

    /// Email to insert, with `null` and absence both collapsing to `None`.
    #[must_use]
    pub fn stored_email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Option::as_deref)
    }
}

/// Partial replacement of user fields.
///
/// An absent field leaves the stored column untouched; an explicit `null`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    /// Replacement display name.
    #[serde(
        default,
        deserialize_with = "scalar_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: SuppliedField,
    /// Replacement contact address.
    #[serde(
        default,
        deserialize_with = "scalar_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: SuppliedField,
}

impl UserChanges {
    /// Report whether no field is being replaced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Decode a present field: `null` or any JSON scalar, rendered as text.
///
/// Only called when the key exists; `#[serde(default)]` covers absence.
fn scalar_field<'de, D>(deserializer: D) -> Result<SuppliedField, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarText).map(Some)
}

struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("null, a string, a number or a boolean")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Some(if value { "1" } else { "0" }.to_owned()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }
}

/// Result of a successful insert: the fresh id plus the echoed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Identifier assigned by the store.
    pub id: UserId,
    /// Echoed input fields.
    #[serde(flatten)]
    pub fields: NewUser,
}

/// Result of an update: the path identifier verbatim plus the echoed changes.
///
/// The identifier stays a string because it is never parsed by the HTTP
/// layer; coercion happens inside the store call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedUser {
    /// Identifier exactly as it appeared in the request path.
    pub id: String,
    /// Echoed change set.
    #[serde(flatten)]
    pub changes: UserChanges,
}

/// Confirmation message returned once a delete statement ran.
pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedUser {
    /// Fixed confirmation text.
    pub message: String,
    /// Identifier exactly as it appeared in the request path.
    pub id: String,
}

impl DeletedUser {
    /// Build the confirmation for the given raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            message: USER_DELETED_MESSAGE.to_owned(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn created_user_omits_missing_fields() {
        let created = CreatedUser {
            id: UserId::new(7),
            fields: NewUser {
                name: Some(Some("Ada".into())),
                email: None,
            },
        };

        let value = serde_json::to_value(&created).expect("serialise");
        assert_eq!(value, json!({ "id": 7, "name": "Ada" }));
    }

    #[rstest]
    fn updated_user_keeps_string_id() {
        let updated = UpdatedUser {
            id: "1".into(),
            changes: UserChanges {
                name: Some(None),
                email: Some(Some("new@example.com".into())),
            },
        };

        let value = serde_json::to_value(&updated).expect("serialise");
        assert_eq!(
            value,
            json!({ "id": "1", "name": null, "email": "new@example.com" })
        );
    }

    #[rstest]
    fn listed_user_serialises_nulls() {
        let user = User::new(UserId::new(3), None, Some("x@example.com".into()));
        let value = serde_json::to_value(&user).expect("serialise");
        assert_eq!(value.get("name"), Some(&Value::Null));
    }

    #[rstest]
    #[case(json!({}), true)]
    #[case(json!({ "name": "Ada" }), false)]
    #[case(json!({ "name": null }), false)]
    #[case(json!({ "email": "a@b.c", "extra": 1 }), false)]
    fn user_changes_emptiness(#[case] body: Value, #[case] empty: bool) {
        let changes: UserChanges = serde_json::from_value(body).expect("deserialise");
        assert_eq!(changes.is_empty(), empty);
    }

    #[rstest]
    #[case(json!({}), None)]
    #[case(json!({ "name": null }), Some(None))]
    #[case(json!({ "name": "Ada" }), Some(Some("Ada")))]
    #[case(json!({ "name": 123 }), Some(Some("123")))]
    #[case(json!({ "name": -7 }), Some(Some("-7")))]
    #[case(json!({ "name": 1.5 }), Some(Some("1.5")))]
    #[case(json!({ "name": true }), Some(Some("1")))]
    #[case(json!({ "name": false }), Some(Some("0")))]
    fn supplied_fields_distinguish_absent_null_and_scalars(
        #[case] body: Value,
        #[case] expected: Option<Option<&str>>,
    ) {
        let changes: UserChanges = serde_json::from_value(body).expect("deserialise");
        assert_eq!(changes.name.as_ref().map(Option::as_deref), expected);
    }

    #[rstest]
    #[case(json!({ "name": ["Ada"] }))]
    #[case(json!({ "name": { "first": "Ada" } }))]
    fn compound_values_are_rejected(#[case] body: Value) {
        let err = serde_json::from_value::<NewUser>(body).expect_err("compound value");
        assert!(err.to_string().contains("a string, a number or a boolean"));
    }

    #[rstest]
    fn new_user_collapses_null_for_storage() {
        let user: NewUser =
            serde_json::from_value(json!({ "name": null, "email": 42 })).expect("deserialise");

        assert_eq!(user.stored_name(), None);
        assert_eq!(user.stored_email(), Some("42"));
        assert_eq!(
            serde_json::to_value(&user).expect("serialise"),
            json!({ "name": null, "email": "42" })
        );
    }

    #[rstest]
    fn deleted_user_uses_fixed_message() {
        let deleted = DeletedUser::new("42");
        assert_eq!(deleted.message, "User deleted");
        assert_eq!(deleted.id, "42");
    }
}
