//! Integration test: the fetcher against a local endpoint serving canned JSON.

mod common;

use common::api_server::{MockServer, Reply};
use fbdl_core::fetch::Fetcher;
use fbdl_core::http::HttpOptions;
use fbdl_core::{QualityTag, ResolveError};

const WATCH: &str = "https://www.facebook.com/watch?v=123";

fn fetcher_for(server: &MockServer) -> Fetcher {
    Fetcher::new(server.url(), HttpOptions::default()).unwrap()
}

#[tokio::test]
async fn hd_response_normalizes_to_two_variants() {
    let server = MockServer::start(Reply::json(
        r#"{"status":true,"data":{"url":"http://cdn/video.mp4","quality":"HD","thumbnail":"http://cdn/thumb.jpg"}}"#,
    ));
    let result = fetcher_for(&server).fetch_info(WATCH).await.unwrap();

    assert!(result.success);
    assert_eq!(result.thumbnail_url, "http://cdn/thumb.jpg");
    let tags: Vec<_> = result.variants.iter().map(|v| v.quality()).collect();
    assert_eq!(tags, vec![QualityTag::Hd, QualityTag::Sd]);
    assert!(result
        .variants
        .iter()
        .all(|v| v.media_url() == "http://cdn/video.mp4"));
}

#[tokio::test]
async fn video_url_is_sent_as_encoded_query_parameter() {
    let server = MockServer::start(Reply::json(r#"{"status":true,"data":{}}"#));
    fetcher_for(&server).fetch_info(WATCH).await.unwrap();

    assert_eq!(server.hits(), 1);
    assert_eq!(
        server.targets(),
        vec!["/?url=https%3A%2F%2Fwww.facebook.com%2Fwatch%3Fv%3D123".to_string()]
    );
}

#[tokio::test]
async fn non_success_status_is_network_error() {
    let server = MockServer::start(Reply::status("500 Internal Server Error"));
    let err = fetcher_for(&server).fetch_info(WATCH).await.unwrap_err();
    assert!(matches!(err, ResolveError::Network(ref m) if m.contains("500")), "{err}");
    assert_eq!(server.hits(), 1, "no retries");
}

#[tokio::test]
async fn status_false_is_api_error() {
    let server = MockServer::start(Reply::json(r#"{"status":false,"data":{"url":"x"}}"#));
    let err = fetcher_for(&server).fetch_info(WATCH).await.unwrap_err();
    assert!(matches!(err, ResolveError::Api(_)), "{err}");
}

#[tokio::test]
async fn missing_data_is_api_error() {
    let server = MockServer::start(Reply::json(r#"{"status":true}"#));
    let err = fetcher_for(&server).fetch_info(WATCH).await.unwrap_err();
    assert!(matches!(err, ResolveError::Api(_)), "{err}");
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let fetcher = Fetcher::new(&format!("http://127.0.0.1:{port}/"), HttpOptions::default()).unwrap();
    let err = fetcher.fetch_info(WATCH).await.unwrap_err();
    assert!(matches!(err, ResolveError::Network(_)), "{err}");
}
