//! User operations (`/Users`).

use reqwest::Method;

use crate::client::ScimClient;
use crate::error::ScimClientResult;
use crate::models::{
    FillDefaults, User, UserErrorResponse, UserResponse, UserType, UserTypeBody, UsersResponse,
    USERS_PATH,
};
use crate::reply::ScimReply;

pub type UserReply = ScimReply<UserResponse, UserErrorResponse>;
pub type UsersReply = ScimReply<UsersResponse, UserErrorResponse>;

impl ScimClient {
    /// List users (GET /Users).
    pub async fn list_users(&self) -> ScimClientResult<UsersReply> {
        self.fetch(self.resource_url(USERS_PATH, None)).await
    }

    /// Get a user by id (GET /Users/:id).
    pub async fn get_user_by_id(&self, user_id: &str) -> ScimClientResult<UserReply> {
        self.fetch(self.resource_url(USERS_PATH, Some(user_id)))
            .await
    }

    /// Find users by exact user name (GET /Users?filter=userName eq "...").
    pub async fn get_user_by_name(&self, user_name: &str) -> ScimClientResult<UsersReply> {
        self.search(self.resource_url(USERS_PATH, None), "userName", user_name)
            .await
    }

    /// Create a user (POST /Users). Empty schemas and timezone are defaulted.
    pub async fn create_user(&self, mut user: User) -> ScimClientResult<UserReply> {
        user.fill_defaults();
        self.send_json(Method::POST, self.resource_url(USERS_PATH, None), &user)
            .await
    }

    /// Replace a user (PUT /Users/:id). Empty schemas and timezone are defaulted.
    pub async fn update_user(&self, user_id: &str, mut user: User) -> ScimClientResult<UserReply> {
        user.fill_defaults();
        self.send_json(
            Method::PUT,
            self.resource_url(USERS_PATH, Some(user_id)),
            &user,
        )
        .await
    }

    /// Change a user's New Relic user type (PUT /Users/:id).
    pub async fn change_user_type(
        &self,
        user_id: &str,
        user_type: UserType,
    ) -> ScimClientResult<UserReply> {
        let mut body = UserTypeBody::new(user_type);
        body.fill_defaults();
        self.send_json(
            Method::PUT,
            self.resource_url(USERS_PATH, Some(user_id)),
            &body,
        )
        .await
    }

    /// Delete a user (DELETE /Users/:id).
    pub async fn delete_user(&self, user_id: &str) -> ScimClientResult<()> {
        self.remove(self.resource_url(USERS_PATH, Some(user_id)))
            .await
    }
}
