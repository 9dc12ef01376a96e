//! SCIM wire shapes for requests and responses.

pub mod common;
pub mod group;
pub mod user;

pub use common::{
    FillDefaults, MemberRef, Meta, ScimDocument, ScimErrorDetails, DEFAULT_TIMEZONE,
    ERROR_SCHEMA, GROUPS_PATH, GROUP_SCHEMA, NEWRELIC_USER_SCHEMA, NEWRELIC_USER_TYPE_ATTRIBUTE,
    PATCH_OP_SCHEMA, USERS_PATH, USER_SCHEMA,
};
pub use group::{
    Group, GroupErrorResponse, GroupResponse, GroupsResponse, MemberOp, PatchOperation,
    PatchValue, UpdateGroup, MEMBERS_PATH,
};
pub use user::{
    Email, Name, NewRelicUserExtension, UnknownUserType, User, UserErrorResponse, UserResponse,
    UserType, UserTypeBody, UsersResponse,
};
