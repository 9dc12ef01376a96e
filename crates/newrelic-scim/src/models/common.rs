//! Pieces shared by the user and group wire shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// SCIM Core User schema URI.
pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// SCIM Core Group schema URI.
pub const GROUP_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";

/// SCIM Patch Operation message schema URI.
pub const PATCH_OP_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:PatchOp";

/// SCIM Error message schema URI. A response whose first schema equals this
/// value carries a protocol error even when the HTTP status is 2xx.
pub const ERROR_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// New Relic user extension schema URI, listed in `schemas`.
pub const NEWRELIC_USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:extension:newrelic:2.0:User";

/// Attribute key holding `nrUserType` in a user type change request.
pub const NEWRELIC_USER_TYPE_ATTRIBUTE: &str =
    "urn:ietf:params:scim:schemas:extension:newrelic:2.1:User";

/// Timezone sent when the caller leaves it empty.
pub const DEFAULT_TIMEZONE: &str = "Europe/Istanbul";

/// Resource path segment for users.
pub const USERS_PATH: &str = "Users";

/// Resource path segment for groups.
pub const GROUPS_PATH: &str = "Groups";

/// Fill protocol-required values an outgoing document is missing.
///
/// Implementations only touch empty fields and are idempotent.
pub trait FillDefaults {
    fn fill_defaults(&mut self);
}

/// Replace an empty schema list with `defaults`. Non-empty lists are left alone.
pub(crate) fn fill_schemas(schemas: &mut Vec<String>, defaults: &[&str]) {
    if schemas.is_empty() {
        schemas.extend(defaults.iter().map(|s| (*s).to_string()));
    }
}

/// A decoded SCIM document that declares its schemas.
pub trait ScimDocument {
    fn schemas(&self) -> &[String];

    /// Whether the first declared schema is the SCIM error message schema.
    fn is_error_message(&self) -> bool {
        self.schemas()
            .first()
            .is_some_and(|schema| schema == ERROR_SCHEMA)
    }
}

/// Accessors shared by [`crate::models::UserErrorResponse`] and
/// [`crate::models::GroupErrorResponse`].
pub trait ScimErrorDetails: ScimDocument {
    fn status(&self) -> &str;
    fn detail(&self) -> &str;
    fn scim_type(&self) -> &str;

    /// Whether this shape was decoded from a body declaring the error schema.
    /// A missing `status` does not make the error disappear.
    fn is_present(&self) -> bool {
        self.is_error_message()
    }
}

/// Resource metadata assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    #[serde(deserialize_with = "null_as_default")]
    pub resource_type: String,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Reference to a related resource: a group on a user, or a member on a group.
///
/// Single-resource and list responses both use this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberRef {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Decode JSON `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accept `"404"` or `404` for the error `status` field.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}
