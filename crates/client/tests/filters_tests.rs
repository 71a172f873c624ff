//! Saved filter results tests.
//!
//! # Invariants
//! - Every page is requested in order with `startAt`/`maxResults`
//! - Items from all pages are returned in server order
//! - The walk stops once `pageInfo` reports the last page

mod common;

use common::*;
use jama_client::ClientError;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_get_filter_results_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/97/results"))
        .and(query_param("startAt", "0"))
        .and(query_param("maxResults", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("filters/results_page1.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let auth = RequestAuth::basic("sync-bot", "hunter2");
    let page = endpoints::get_filter_results_page(&client, &mock_server.uri(), &auth, 97, 0, 2)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, 501);
    assert_eq!(page.data[1].document_key.as_deref(), Some("PRJ-REQ-2"));
    let page_info = page.meta.page_info.unwrap();
    assert_eq!(page_info.total_results, 4);
    assert!(!page_info.is_last());
}

#[tokio::test]
async fn test_get_filter_results_follows_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/97/results"))
        .and(query_param("startAt", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("filters/results_page1.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/97/results"))
        .and(query_param("startAt", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("filters/results_page2.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = basic_client(&mock_server.uri());
    let items = client.get_filter_results(97).await.unwrap();

    let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![501, 502, 503, 504]);
    assert_eq!(items[2].item_type, Some(77));
}

#[tokio::test]
async fn test_get_filter_results_rejects_page_that_does_not_advance() {
    let mock_server = MockServer::start().await;

    // Server ignores startAt and always answers with the first page
    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/97/results"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("filters/results_page1.json")),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut client = basic_client(&mock_server.uri());
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        client.get_filter_results(97),
    )
    .await
    .expect("filter walk should terminate");

    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "{err:?}");
    assert!(err.to_string().contains("startAt=2"));
}

#[tokio::test]
async fn test_get_filter_results_rejects_zero_result_count_with_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/8/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"status": "OK", "pageInfo": {"startIndex": 0, "resultCount": 0, "totalResults": 5}},
            "data": [{"id": 1, "itemType": 142, "fields": {}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = basic_client(&mock_server.uri());
    let err = client.get_filter_results(8).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_filter_results_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/5/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"status": "OK", "pageInfo": {"startIndex": 0, "resultCount": 0, "totalResults": 0}},
            "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = basic_client(&mock_server.uri());
    let items = client.get_filter_results(5).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_get_filter_results_stops_on_empty_page() {
    let mock_server = MockServer::start().await;

    // Server claims more results but sends none
    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/5/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"status": "OK", "pageInfo": {"startIndex": 0, "resultCount": 0, "totalResults": 10}},
            "data": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = basic_client(&mock_server.uri());
    assert!(client.get_filter_results(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_filter_results_missing_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/filters/404/results"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "meta": {"status": "Not Found", "message": "Filter 404 not found"}
        })))
        .mount(&mock_server)
        .await;

    let mut client = basic_client(&mock_server.uri());
    let err = client.get_filter_results(404).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("Filter 404 not found"));
}
