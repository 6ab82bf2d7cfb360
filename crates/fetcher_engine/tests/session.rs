use std::sync::Arc;

use fetcher_engine::{FetchFailure, FetchSession, FetchSettings, YouTubeCommentApi};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn snippet(id: &str) -> Value {
    json!({
        "videoId": "vid123",
        "authorDisplayName": format!("author-{id}"),
        "authorChannelId": {"value": format!("UC-{id}")},
        "publishedAt": "2024-01-15T03:00:00Z",
        "updatedAt": "2024-01-15T03:00:00Z",
        "textOriginal": format!("text {id}"),
        "textDisplay": format!("<p>text {id}</p>"),
        "likeCount": 3
    })
}

fn thread(id: &str, replies: &[&str]) -> Value {
    let mut item = json!({
        "id": id,
        "snippet": {"topLevelComment": {"snippet": snippet(id)}}
    });
    if !replies.is_empty() {
        let comments: Vec<Value> = replies
            .iter()
            .map(|r| json!({"id": r, "snippet": snippet(r)}))
            .collect();
        item["replies"] = json!({ "comments": comments });
    }
    item
}

fn page(items: Vec<Value>, token: Option<&str>) -> Value {
    let mut body = json!({ "items": items });
    if let Some(token) = token {
        body["nextPageToken"] = json!(token);
    }
    body
}

fn session_for(server: &MockServer, result_cap: Option<u64>) -> FetchSession {
    let mut settings = FetchSettings::new("test-key");
    settings.result_cap = result_cap;
    FetchSession::with_api(
        "vid123",
        settings,
        Arc::new(YouTubeCommentApi::with_endpoint(server.uri())),
    )
}

#[tokio::test]
async fn flattening_preserves_document_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![thread("A", &["a1", "a2"]), thread("B", &[])],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, None);
    let batch = session.next_page().await.unwrap().unwrap();

    let ids: Vec<&str> = batch.iter().map(|r| r.comment_id.as_str()).collect();
    assert_eq!(ids, ["A", "a1", "a2", "B"]);
    let levels: Vec<bool> = batch.iter().map(|r| r.is_top_level).collect();
    assert_eq!(levels, [true, false, false, true]);

    // Replies do not count against the raw top-level tally.
    assert_eq!(session.fetched(), 2);

    // No next-page token: the session is exhausted without another request.
    assert!(session.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn result_cap_bounds_top_level_comments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("pageToken", ""))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![thread("t1", &[]), thread("t2", &["r1", "r2"])],
            Some("p2"),
        )))
        .expect(1)
        .mount(&server)
        .await;
    // The remaining budget clamps the second request to a single result.
    Mock::given(method("GET"))
        .and(query_param("pageToken", "p2"))
        .and(query_param("maxResults", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![thread("t3", &[])], Some("p3"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("pageToken", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], None)))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server, Some(3));
    let mut top_level = 0usize;
    while let Some(batch) = session.next_page().await.unwrap() {
        top_level += batch.iter().filter(|r| r.is_top_level).count();
    }

    assert_eq!(top_level, 3);
    assert_eq!(session.fetched(), 3);
}

#[tokio::test]
async fn cancellation_stops_before_the_next_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("pageToken", ""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![thread("t1", &[])], Some("p2"))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("pageToken", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], None)))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server, None);
    let batch = session.next_page().await.unwrap().unwrap();
    assert_eq!(batch.len(), 1);

    session.cancel();
    assert!(session.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn zero_cap_issues_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], None)))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = session_for(&server, Some(0));
    assert!(session.next_page().await.unwrap().is_none());
    assert_eq!(session.fetched(), 0);
}

#[tokio::test]
async fn provider_error_surfaces_verbatim_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": {"message": "API key not valid."}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, None);
    let err = session.next_page().await.unwrap_err();
    assert_eq!(err.kind, FetchFailure::Provider);
    assert_eq!(err.message, "API key not valid.");
    assert_eq!(err.to_string(), "API key not valid.");

    // Terminal outcomes are sticky; no further requests are issued.
    assert!(session.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn malformed_body_ends_the_session_with_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, None);
    let err = session.next_page().await.unwrap_err();
    assert_eq!(err.kind, FetchFailure::Decode);

    // Transport-level failures are terminal too; no further requests.
    assert!(session.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn missing_item_collection_ends_normally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, None);
    assert!(session.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn page_request_carries_expected_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("part", "snippet,replies"))
        .and(query_param("videoId", "vid123"))
        .and(query_param("maxResults", "100"))
        .and(query_param("order", "time"))
        .and(query_param("pageToken", ""))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server, None);
    assert!(session.next_page().await.unwrap().is_none());
}
