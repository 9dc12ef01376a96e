//! User wire shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::common::{
    fill_schemas, null_as_default, string_or_number, FillDefaults, MemberRef, Meta, ScimDocument,
    ScimErrorDetails, DEFAULT_TIMEZONE, NEWRELIC_USER_SCHEMA, USER_SCHEMA,
};

/// Name components of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Name {
    #[serde(deserialize_with = "null_as_default")]
    pub family_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub given_name: String,
}

/// One email address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
}

impl Email {
    pub fn primary(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            primary: true,
        }
    }
}

/// User document sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub schemas: Vec<String>,
    pub user_name: String,
    pub name: Name,
    pub emails: Vec<Email>,
    pub active: bool,
    pub timezone: String,
}

impl User {
    /// Active user with the given user name and no other attributes.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            active: true,
            ..Self::default()
        }
    }
}

impl FillDefaults for User {
    fn fill_defaults(&mut self) {
        fill_schemas(&mut self.schemas, &[USER_SCHEMA]);
        if self.timezone.is_empty() {
            self.timezone = DEFAULT_TIMEZONE.to_string();
        }
    }
}

/// A user as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub external_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: Name,
    #[serde(deserialize_with = "null_as_default")]
    pub emails: Vec<Email>,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<MemberRef>,
}

impl ScimDocument for UserResponse {
    fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

/// Result of listing or filtering users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsersResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: Vec<String>,
    #[serde(rename = "Resources", deserialize_with = "null_as_default")]
    pub resources: Vec<UserResponse>,
}

impl ScimDocument for UsersResponse {
    fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

impl UsersResponse {
    /// First matching user, as returned by a user name search.
    #[must_use]
    pub fn first(&self) -> Option<&UserResponse> {
        self.resources.first()
    }
}

/// SCIM error payload returned by user endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserErrorResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scim_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "string_or_number")]
    pub status: String,
}

impl ScimDocument for UserErrorResponse {
    fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

impl ScimErrorDetails for UserErrorResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn detail(&self) -> &str {
        &self.detail
    }

    fn scim_type(&self) -> &str {
        &self.scim_type
    }
}

/// New Relic user type, sent as the `nrUserType` extension attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "Full User")]
    Full,
    #[serde(rename = "Core User")]
    Core,
    #[serde(rename = "Basic User")]
    Basic,
}

impl UserType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "Full User",
            Self::Core => "Core User",
            Self::Basic => "Basic User",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the [`UserType`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    /// Accepts the display form ("Core User") or the bare variant ("core").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.trim_end_matches(" user") {
            "full" => Ok(Self::Full),
            "core" => Ok(Self::Core),
            "basic" => Ok(Self::Basic),
            _ => Err(UnknownUserType(s.to_string())),
        }
    }
}

/// Body of the New Relic user extension attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelicUserExtension {
    pub nr_user_type: UserType,
}

/// Request body for changing a user's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTypeBody {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(rename = "urn:ietf:params:scim:schemas:extension:newrelic:2.1:User")]
    pub extension: NewRelicUserExtension,
}

impl UserTypeBody {
    #[must_use]
    pub fn new(user_type: UserType) -> Self {
        Self {
            schemas: Vec::new(),
            extension: NewRelicUserExtension {
                nr_user_type: user_type,
            },
        }
    }
}

impl FillDefaults for UserTypeBody {
    fn fill_defaults(&mut self) {
        fill_schemas(&mut self.schemas, &[USER_SCHEMA, NEWRELIC_USER_SCHEMA]);
    }
}
