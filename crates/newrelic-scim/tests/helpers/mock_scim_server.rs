//! Mock New Relic SCIM endpoint built on wiremock.
//!
//! Provides a client wired to the mock plus canned SCIM payloads for users,
//! groups and error documents.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{MockServer, Request};

use newrelic_scim::models::{ERROR_SCHEMA, GROUP_SCHEMA, USER_SCHEMA};
use newrelic_scim::{ClientConfig, ScimClient};

pub const TEST_TOKEN: &str = "test-token-123";

pub const LIST_RESPONSE_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:ListResponse";

pub struct MockScimServer {
    pub server: MockServer,
}

impl MockScimServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client pointed at the mock with the test bearer token.
    pub fn client(&self) -> ScimClient {
        let config = ClientConfig::new(TEST_TOKEN).with_base_url(self.uri());
        ScimClient::from_config(config).expect("client should build")
    }

    /// Client whose requests time out after `timeout`.
    pub fn client_with_timeout(&self, timeout: Duration) -> ScimClient {
        let config = ClientConfig::new(TEST_TOKEN).with_base_url(self.uri());
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("http client should build");
        ScimClient::with_http_client(&config, http_client).expect("client should build")
    }

    /// Requests received so far.
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
    }

    /// JSON body of the single received request.
    pub async fn only_request_body(&self) -> Value {
        let requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_slice(&requests[0].body).expect("request body is JSON")
    }
}

pub fn user_json(id: &str, user_name: &str) -> Value {
    json!({
        "schemas": [USER_SCHEMA],
        "id": id,
        "externalId": null,
        "userName": user_name,
        "name": { "familyName": "Doe", "givenName": "Jane" },
        "emails": [{ "value": user_name, "primary": true }],
        "timezone": "Europe/Istanbul",
        "active": true,
        "meta": {
            "resourceType": "User",
            "created": "2024-03-01T12:00:00.000Z",
            "lastModified": "2024-03-02T12:00:00.000Z"
        },
        "groups": []
    })
}

pub fn users_list_json(users: Vec<Value>) -> Value {
    json!({
        "totalResults": users.len(),
        "schemas": [LIST_RESPONSE_SCHEMA],
        "Resources": users
    })
}

pub fn group_json(id: &str, display_name: &str, member_ids: &[&str]) -> Value {
    let members: Vec<Value> = member_ids
        .iter()
        .map(|m| json!({ "type": "User", "value": m }))
        .collect();
    json!({
        "schemas": [GROUP_SCHEMA],
        "id": id,
        "displayName": display_name,
        "meta": {
            "resourceType": "Group",
            "created": "2024-03-01T12:00:00.000Z",
            "lastModified": "2024-03-02T12:00:00.000Z"
        },
        "members": members
    })
}

pub fn groups_list_json(groups: Vec<Value>) -> Value {
    json!({
        "totalResults": groups.len(),
        "schemas": [LIST_RESPONSE_SCHEMA],
        "Resources": groups
    })
}

pub fn error_json(status: &str, scim_type: &str, detail: &str) -> Value {
    json!({
        "schemas": [ERROR_SCHEMA],
        "scimType": scim_type,
        "detail": detail,
        "status": status
    })
}
