//! Group operations (`/Groups`).

use reqwest::Method;

use crate::client::ScimClient;
use crate::error::ScimClientResult;
use crate::models::{
    FillDefaults, Group, GroupErrorResponse, GroupResponse, GroupsResponse, MemberOp,
    UpdateGroup, GROUPS_PATH,
};
use crate::reply::ScimReply;

pub type GroupReply = ScimReply<GroupResponse, GroupErrorResponse>;
pub type GroupsReply = ScimReply<GroupsResponse, GroupErrorResponse>;

impl ScimClient {
    /// List groups (GET /Groups).
    pub async fn list_groups(&self) -> ScimClientResult<GroupsReply> {
        self.fetch(self.resource_url(GROUPS_PATH, None)).await
    }

    /// Get a group by id (GET /Groups/:id).
    pub async fn get_group_by_id(&self, group_id: &str) -> ScimClientResult<GroupReply> {
        self.fetch(self.resource_url(GROUPS_PATH, Some(group_id)))
            .await
    }

    /// Find groups by exact display name (GET /Groups?filter=displayName eq "...").
    pub async fn get_group_by_name(&self, display_name: &str) -> ScimClientResult<GroupsReply> {
        self.search(
            self.resource_url(GROUPS_PATH, None),
            "displayName",
            display_name,
        )
        .await
    }

    /// Create a group (POST /Groups).
    pub async fn create_group(&self, mut group: Group) -> ScimClientResult<GroupReply> {
        group.fill_defaults();
        self.send_json(Method::POST, self.resource_url(GROUPS_PATH, None), &group)
            .await
    }

    /// Replace a group (PUT /Groups/:id).
    pub async fn update_group(
        &self,
        group_id: &str,
        mut group: Group,
    ) -> ScimClientResult<GroupReply> {
        group.fill_defaults();
        self.send_json(
            Method::PUT,
            self.resource_url(GROUPS_PATH, Some(group_id)),
            &group,
        )
        .await
    }

    /// Add or remove one member (PATCH /Groups/:id).
    pub async fn group_member_op(
        &self,
        group_id: &str,
        user_id: &str,
        op: MemberOp,
    ) -> ScimClientResult<GroupReply> {
        let mut patch = UpdateGroup::member_op(op, user_id);
        patch.fill_defaults();
        self.send_json(
            Method::PATCH,
            self.resource_url(GROUPS_PATH, Some(group_id)),
            &patch,
        )
        .await
    }

    pub async fn add_user_to_group(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> ScimClientResult<GroupReply> {
        self.group_member_op(group_id, user_id, MemberOp::Add).await
    }

    pub async fn remove_user_from_group(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> ScimClientResult<GroupReply> {
        self.group_member_op(group_id, user_id, MemberOp::Remove)
            .await
    }

    /// Delete a group (DELETE /Groups/:id).
    pub async fn delete_group(&self, group_id: &str) -> ScimClientResult<()> {
        self.remove(self.resource_url(GROUPS_PATH, Some(group_id)))
            .await
    }
}
