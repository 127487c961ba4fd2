use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moviemood_api::{
    error::ProviderError,
    models::{BrowseCategory, ContentType},
    services::{
        providers::{CatalogProvider, TmdbClient},
        query::{genre_query, mood_query},
    },
};

const ACCESS_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJhdWQiOiJ0ZXN0In0.signature";

fn client(server: &MockServer, credential: &str, timeout: Duration) -> TmdbClient {
    TmdbClient::new(
        credential.to_string(),
        server.uri(),
        "US".to_string(),
        timeout,
    )
    .unwrap()
}

#[tokio::test]
async fn test_access_token_uses_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .and(query_param("access_token", ACCESS_TOKEN))
        .and(query_param("with_genres", "18,10752"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{"id": 857, "title": "Saving Private Ryan", "vote_average": 8.2, "release_date": "1998-07-24"}],
            "total_pages": 1,
            "total_results": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmdb = client(&server, ACCESS_TOKEN, Duration::from_secs(5));
    let query = mood_query("SadEmotional", 1).unwrap();
    let page = tmdb.discover_page(&query, 1).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Saving Private Ryan");
    assert_eq!(page.total_results, 1);
}

#[tokio::test]
async fn test_api_key_is_sent_as_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/tv"))
        .and(query_param("api_key", "plainkey"))
        .and(query_param("page", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 7, "results": [], "total_pages": 7, "total_results": 130
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmdb = client(&server, "plainkey", Duration::from_secs(5));
    let query = genre_query(BrowseCategory::Tv, 18, 1);
    let page = tmdb.discover_page(&query, 7).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 7);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_non_success_status_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let tmdb = client(&server, "badkey", Duration::from_secs(5));
    let query = genre_query(BrowseCategory::Movie, 28, 1);
    let err = tmdb.discover_page(&query, 1).await.unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Invalid API key");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let tmdb = client(&server, "key", Duration::from_secs(5));
    let query = genre_query(BrowseCategory::Movie, 28, 1);
    let err = tmdb.discover_page(&query, 1).await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn test_slow_provider_times_out_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"page": 1, "results": [], "total_pages": 0, "total_results": 0}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let tmdb = client(&server, "key", Duration::from_millis(200));
    let query = genre_query(BrowseCategory::Movie, 28, 1);
    let err = tmdb.discover_page(&query, 1).await.unwrap_err();

    match err {
        ProviderError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_credits_and_images() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/603/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cast": [{"name": "Keanu Reeves", "character": "Neo", "order": 0}],
            "crew": [{"name": "Lilly Wachowski", "job": "Director"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/movie/603/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "backdrops": [{"file_path": "/b.jpg", "width": 1920, "height": 1080}]
        })))
        .mount(&server)
        .await;

    let tmdb = client(&server, "key", Duration::from_secs(5));

    let credits = tmdb.credits(ContentType::Movie, 603).await.unwrap();
    assert_eq!(credits.director.as_deref(), Some("Lilly Wachowski"));
    assert_eq!(credits.cast[0].character.as_deref(), Some("Neo"));

    let images = tmdb.images(ContentType::Movie, 603).await.unwrap();
    assert_eq!(images.backdrops.len(), 1);
    assert_eq!(images.backdrops[0].width, 1920);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tv/0"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let tmdb = client(&server, "key", Duration::from_secs(5));
    let err = tmdb.details(ContentType::Tv, 0).await.unwrap_err();
    assert!(matches!(err, ProviderError::NotFound));
}

#[tokio::test]
async fn test_missing_discover_endpoint_is_status_error() {
    let server = MockServer::start().await;

    let tmdb = client(&server, "key", Duration::from_secs(5));
    let query = genre_query(BrowseCategory::Movie, 28, 1);
    let err = tmdb.discover_page(&query, 1).await.unwrap_err();

    match err {
        ProviderError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {:?}", other),
    }
}
