//! Integration tests for token persistence across the query path.
//!
//! These tests exercise the interplay between the REST client, the
//! on-disk token store, and the authentication endpoint.

use std::path::Path;

use serde_json::json;
use simaland_api::{
    ApiConfig, BaseUrl, Login, Password, RestClient, RestError, TokenStore, TOKEN_FILE_NAME,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client with token persistence under `token_dir`.
fn create_persistent_client(server: &MockServer, token_dir: &Path) -> RestClient {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .login(Login::new("test").unwrap())
        .password(Password::new("password").unwrap())
        .token_path(token_dir)
        .build()
        .unwrap();
    RestClient::new(config)
}

#[tokio::test]
async fn test_persisted_token_is_adopted_on_first_query() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(TOKEN_FILE_NAME), "cached-token").unwrap();

    // Only a call carrying the cached token succeeds; no auth expected
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "Bearer cached-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_persistent_client(&server, dir.path());
    let response = client.get("user").await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.raw_body, "ok");
    assert_eq!(
        client.current_token().await,
        Some("cached-token".to_string())
    );
}

#[tokio::test]
async fn test_refresh_persists_minted_token_to_disk() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(TOKEN_FILE_NAME), "stale-token").unwrap();

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": "fresh-token"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_persistent_client(&server, dir.path());
    let response = client.get("user").await.unwrap();

    assert_eq!(response.raw_body, "ok");
    let persisted = std::fs::read_to_string(dir.path().join(TOKEN_FILE_NAME)).unwrap();
    assert_eq!(persisted, "fresh-token");
}

#[tokio::test]
async fn test_delete_token_removes_file_and_memory() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join(TOKEN_FILE_NAME);
    std::fs::write(&token_file, "token").unwrap();

    let client = create_persistent_client(&server, dir.path());
    client.delete_token().await.unwrap();

    assert!(!token_file.exists());
    assert!(client.current_token().await.is_none());

    let store = TokenStore::new(Some(dir.path()));
    assert!(store.read().unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_token_directory_surfaces_on_persistence_not_construction() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": "fresh-token"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    // Construction succeeds regardless of the path
    let client = create_persistent_client(&server, &missing);

    // The failure surfaces when a refresh attempts to persist the token
    let err = client.get("user").await.unwrap_err();
    assert!(matches!(err, RestError::TokenStore { .. }));
}

#[tokio::test]
async fn test_client_without_token_path_never_touches_disk() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": "memory-token"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "Bearer memory-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .login(Login::new("test").unwrap())
        .password(Password::new("password").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(config);

    let response = client.get("user").await.unwrap();
    assert_eq!(response.raw_body, "ok");
    assert_eq!(
        client.current_token().await,
        Some("memory-token".to_string())
    );
}
