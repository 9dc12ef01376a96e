//! Transport-level tests: authentication headers, status handling, timeouts.

mod helpers;

use helpers::mock_scim_server::{user_json, users_list_json, MockScimServer, TEST_TOKEN};
use newrelic_scim::{ClientConfig, ScimClient, ScimClientError};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_requests_carry_bearer_and_json_content_type() {
    let server = MockScimServer::new().await;

    Mock::given(method("GET"))
        .and(path("/Users"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_list_json(vec![])))
        .expect(1)
        .mount(&server.server)
        .await;

    server.client().list_users().await.unwrap();
}

#[tokio::test]
async fn test_write_requests_carry_single_content_type() {
    let server = MockScimServer::new().await;

    Mock::given(method("POST"))
        .and(path("/Groups"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
            "id": "g-1",
            "displayName": "Admins"
        })))
        .mount(&server.server)
        .await;

    server
        .client()
        .create_group(newrelic_scim::models::Group::new("Admins"))
        .await
        .unwrap();

    let requests = server.requests().await;
    let content_types: Vec<_> = requests[0]
        .headers
        .get_all("content-type")
        .iter()
        .collect();
    assert_eq!(content_types.len(), 1);
    assert_eq!(content_types[0], "application/json");
}

#[tokio::test]
async fn test_unauthorized_is_status_error() {
    let server = MockScimServer::new().await;

    Mock::given(method("GET"))
        .and(path("/Users/u-1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server.server)
        .await;

    let err = server.client().get_user_by_id("u-1").await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(!err.is_transport());
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockScimServer::new().await;

    Mock::given(method("GET"))
        .and(path("/Users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server.server)
        .await;

    let result = server.client().get_user_by_id("u-1").await;
    assert!(matches!(result, Err(ScimClientError::Decode(_))));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockScimServer::new().await;

    Mock::given(method("GET"))
        .and(path("/Users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_list_json(vec![]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server.server)
        .await;

    let client = server.client_with_timeout(Duration::from_millis(100));
    let err = client.list_users().await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, ScimClientError::Http(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and release a port so nothing listens on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{port}/");

    let client = ScimClient::from_config(ClientConfig::new(TEST_TOKEN).with_base_url(uri)).unwrap();
    let err = client.delete_user("u-1").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockScimServer::new().await;

    Mock::given(method("GET"))
        .and(path("/scim/v2/Users/u-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u-7", "jdoe")))
        .expect(1)
        .mount(&server.server)
        .await;

    let config = ClientConfig::new(TEST_TOKEN).with_base_url(format!("{}/scim/v2", server.uri()));
    let client = ScimClient::from_config(config).unwrap();

    let reply = client.get_user_by_id("u-7").await.unwrap();
    assert_eq!(reply.resource.id, "u-7");
}

#[tokio::test]
async fn test_cloned_clients_run_concurrently() {
    let server = MockScimServer::new().await;

    Mock::given(method("GET"))
        .and(path("/Users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u-1", "one")))
        .mount(&server.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Users/u-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u-2", "two")))
        .mount(&server.server)
        .await;

    let client = server.client();
    let other = client.clone();
    let (first, second) = tokio::join!(client.get_user_by_id("u-1"), other.get_user_by_id("u-2"));

    assert_eq!(first.unwrap().resource.user_name, "one");
    assert_eq!(second.unwrap().resource.user_name, "two");
}
