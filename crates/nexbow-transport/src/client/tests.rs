//! Unit tests for the download transport

use super::*;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_download_text_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_string("content"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/endpoint", mock_server.uri());

    let body = transport.download_text(&url).await.unwrap();
    assert_eq!(body, "content");
}

#[tokio::test]
async fn test_download_text_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/endpoint", mock_server.uri());

    let error = transport.download_text(&url).await.unwrap_err();
    assert_eq!(error.to_string(), format!("{} (HTTP 404)", url));
}

#[tokio::test]
async fn test_download_text_connection_failure() {
    let transport = HttpTransport::new().unwrap();

    // Nothing listens on this port; the native connect error must surface.
    let result = transport.download_text("http://127.0.0.1:9/endpoint").await;

    match result.unwrap_err() {
        NexbowError::Network { message, .. } => assert!(!message.is_empty()),
        other => panic!("Expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_download_to_file_writes_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_string("abcdefg"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/endpoint", mock_server.uri());

    let temp_dir = tempfile::tempdir().unwrap();
    let destination = temp_dir.path().join("package.tar.gz");

    let resolved = transport.download_to_file(&url, &destination).await.unwrap();
    assert_eq!(resolved, destination);
    assert_eq!(std::fs::read_to_string(&destination).unwrap(), "abcdefg");
}

#[tokio::test]
async fn test_download_to_file_non_success_status_leaves_no_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/endpoint"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let url = format!("{}/endpoint", mock_server.uri());

    let temp_dir = tempfile::tempdir().unwrap();
    let destination = temp_dir.path().join("package.tar.gz");

    let error = transport
        .download_to_file(&url, &destination)
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), format!("{} (HTTP 404)", url));
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_download_to_file_connection_failure() {
    let transport = HttpTransport::new().unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let destination = temp_dir.path().join("package.tar.gz");

    let result = transport
        .download_to_file("http://127.0.0.1:9/endpoint", &destination)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        NexbowError::Network { .. }
    ));
}
