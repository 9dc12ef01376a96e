//! Group wire shapes, including the PATCH document used for membership changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::{
    fill_schemas, null_as_default, string_or_number, FillDefaults, MemberRef, Meta, ScimDocument,
    ScimErrorDetails, GROUP_SCHEMA, PATCH_OP_SCHEMA,
};

/// Attribute path targeted by membership patches.
pub const MEMBERS_PATH: &str = "members";

/// Group document sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    pub schemas: Vec<String>,
    pub display_name: String,
}

impl Group {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            schemas: Vec::new(),
            display_name: display_name.into(),
        }
    }
}

impl FillDefaults for Group {
    fn fill_defaults(&mut self) {
        fill_schemas(&mut self.schemas, &[GROUP_SCHEMA]);
    }
}

/// A group as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<MemberRef>,
}

impl ScimDocument for GroupResponse {
    fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

/// Result of listing or filtering groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: Vec<String>,
    #[serde(rename = "Resources", deserialize_with = "null_as_default")]
    pub resources: Vec<GroupResponse>,
}

impl ScimDocument for GroupsResponse {
    fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

impl GroupsResponse {
    #[must_use]
    pub fn first(&self) -> Option<&GroupResponse> {
        self.resources.first()
    }
}

/// SCIM error payload returned by group endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupErrorResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scim_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "string_or_number")]
    pub status: String,
}

impl ScimDocument for GroupErrorResponse {
    fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

impl ScimErrorDetails for GroupErrorResponse {
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

/// Membership change verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberOp {
    Add,
    Remove,
}

impl MemberOp {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Remove => "Remove",
        }
    }
}

impl fmt::Display for MemberOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single id reference inside a patch operation value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchValue {
    pub value: String,
}

/// One operation of a PATCH request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: MemberOp,
    pub path: String,
    pub value: Vec<PatchValue>,
}

/// PATCH request body for group membership changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroup {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(rename = "Operations")]
    pub operations: Vec<PatchOperation>,
}

impl UpdateGroup {
    /// Single `op` on the `members` path referencing `user_id`.
    pub fn member_op(op: MemberOp, user_id: impl Into<String>) -> Self {
        Self {
            schemas: Vec::new(),
            operations: vec![PatchOperation {
                op,
                path: MEMBERS_PATH.to_string(),
                value: vec![PatchValue {
                    value: user_id.into(),
                }],
            }],
        }
    }
}

impl FillDefaults for UpdateGroup {
    fn fill_defaults(&mut self) {
        fill_schemas(&mut self.schemas, &[PATCH_OP_SCHEMA]);
    }
}
