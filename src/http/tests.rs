//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn breeds_url(server: &MockServer) -> String {
    format!("{}/breeds", server.uri())
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.user_agent.starts_with("breed-loader/"));
}

#[test]
fn test_http_client_config_from_api() {
    let api = crate::config::ApiConfig {
        url: "https://catfact.ninja/breeds".to_string(),
        timeout_secs: Some(15),
        user_agent: "cats/2".to_string(),
    };

    let config = HttpClientConfig::from_api(&api);
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.user_agent, "cats/2");
}

#[test]
fn test_request_config_query() {
    let config = RequestConfig::new().query("limit", 1000);
    assert_eq!(config.query.get("limit"), Some(&"1000".to_string()));
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"breed": "Abyssinian"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let data: serde_json::Value = client
        .get_json_with_config(&breeds_url(&mock_server), RequestConfig::new().query("limit", 3))
        .await
        .unwrap();

    assert_eq!(data["data"][0]["breed"], "Abyssinian");
}

#[tokio::test]
async fn test_http_client_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "cats/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig {
        user_agent: "cats/9".to_string(),
        ..HttpClientConfig::default()
    };
    let client = HttpClient::with_config(config).unwrap();

    let _: serde_json::Value = client
        .get_json_with_config(&breeds_url(&mock_server), RequestConfig::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let result: crate::Result<serde_json::Value> = client
        .get_json_with_config(&breeds_url(&mock_server), RequestConfig::new())
        .await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let result: crate::Result<serde_json::Value> = client
        .get_json_with_config(&breeds_url(&mock_server), RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn test_http_client_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let result: crate::Result<serde_json::Value> = client
        .get_json_with_config(&breeds_url(&mock_server), RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

#[tokio::test]
async fn test_http_client_invalid_url() {
    let client = HttpClient::new().unwrap();
    let result: crate::Result<serde_json::Value> = client
        .get_json_with_config("not a url", RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
}
