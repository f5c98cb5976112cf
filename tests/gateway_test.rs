#[path = "common/mod.rs"]
mod common;

use common::{result_page, tmdb_body};
use httpmock::prelude::*;
use serde_json::json;

use marquee::catalog::{CatalogGateway, TmdbGateway};
use marquee::error::MarqueeError;

// ============================================================================
// TMDB gateway against a mock server
// ============================================================================

#[tokio::test]
async fn test_search_parses_result_page() {
    let server = MockServer::start_async().await;
    let page = result_page("Batman", 1, 3, 7);
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/3/search/movie");
            then.status(200).json_body(tmdb_body(&page));
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "test-token").unwrap();
    let result = gateway.search_movies("Batman", 1).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result, page);
    assert_eq!(
        result.results[0].poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/w500/poster100.jpg")
    );
}

#[tokio::test]
async fn test_search_sends_bearer_token_and_query_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/3/search/movie")
                .header("authorization", "Bearer test-token")
                .header("accept", "application/json")
                .query_param("query", "the dark knight")
                .query_param("page", "2");
            then.status(200)
                .json_body(tmdb_body(&result_page("the dark knight", 2, 1, 2)));
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "test-token").unwrap();
    let result = gateway.search_movies("the dark knight", 2).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.page, 2);
}

#[tokio::test]
async fn test_search_sends_language_when_configured() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/3/search/movie")
                .query_param("language", "de-DE");
            then.status(200).json_body(tmdb_body(&result_page("Heat", 1, 1, 1)));
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "test-token")
        .unwrap()
        .with_language("de-DE");
    gateway.search_movies("Heat", 1).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/3/search/movie");
            then.status(200).json_body(tmdb_body(&result_page("Alien", 1, 1, 1)));
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3/"), "test-token").unwrap();
    gateway.search_movies("Alien", 1).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_optional_fields_default() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/3/search/movie");
            then.status(200).json_body(json!({
                "page": 1,
                "results": [{
                    "id": 11,
                    "title": "Star Wars",
                    "poster_path": null,
                    "release_date": ""
                }],
                "total_pages": 1
            }));
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "test-token").unwrap();
    let result = gateway.search_movies("Star Wars", 1).await.unwrap();

    let movie = &result.results[0];
    assert_eq!(movie.overview, "");
    assert_eq!(movie.vote_average, 0.0);
    assert!(movie.poster_url().is_none());
    assert!(movie.release_year().is_none());
    assert!(result.total_results.is_none());
}

// ============================================================================
// Failures collapse into one generic error
// ============================================================================

#[tokio::test]
async fn test_unauthorized_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/3/search/movie");
            then.status(401).json_body(json!({
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key.",
                "success": false
            }));
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "bad-token").unwrap();
    let err = gateway.search_movies("Batman", 1).await.unwrap_err();

    assert!(matches!(err, MarqueeError::SearchFailed));
    assert_eq!(err.to_string(), "Failed to fetch movies");
}

#[tokio::test]
async fn test_server_error_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/3/search/movie");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "test-token").unwrap();
    let err = gateway.search_movies("Batman", 1).await.unwrap_err();

    assert!(matches!(err, MarqueeError::SearchFailed));
}

#[tokio::test]
async fn test_malformed_body_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/3/search/movie");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let gateway = TmdbGateway::new(&server.url("/3"), "test-token").unwrap();
    let err = gateway.search_movies("Batman", 1).await.unwrap_err();

    assert!(matches!(err, MarqueeError::SearchFailed));
}

#[tokio::test]
async fn test_unreachable_host_is_generic_failure() {
    // Nothing listens on port 9 of localhost in the test environment.
    let gateway = TmdbGateway::new("http://127.0.0.1:9/3", "test-token").unwrap();
    let err = gateway.search_movies("Batman", 1).await.unwrap_err();

    assert!(matches!(err, MarqueeError::SearchFailed));
}
