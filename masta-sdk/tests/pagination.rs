use httpmock::prelude::*;
use masta::{Id, MastaClient, Pagination};
use serde_json::json;

fn account(id: &str) -> serde_json::Value {
    json!({ "id": id, "username": format!("user{id}"), "acct": format!("user{id}") })
}

fn status(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "uri": format!("https://example.social/statuses/{id}"),
        "content": format!("<p>status {id}</p>"),
        "created_at": "2024-01-01T00:00:00Z",
        "account": account("1"),
    })
}

fn query_has(req: &HttpMockRequest, key: &str) -> bool {
    req.query_params
        .as_ref()
        .is_some_and(|params| params.iter().any(|(k, _)| k == key))
}

fn first_page(req: &HttpMockRequest) -> bool {
    !query_has(req, "max_id") && !query_has(req, "min_id") && !query_has(req, "since_id")
}

fn no_min_id(req: &HttpMockRequest) -> bool {
    !query_has(req, "min_id")
}

fn no_since_id(req: &HttpMockRequest) -> bool {
    !query_has(req, "since_id")
}

#[tokio::test]
async fn next_link_drives_the_following_request() {
    let server = MockServer::start_async().await;
    let client = MastaClient::new(&server.base_url(), "token").unwrap();

    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/timelines/home")
                .matches(first_page);
            then.status(200)
                .header(
                    "Link",
                    format!(
                        r#"<{}>; rel="next", <{}>; rel="prev""#,
                        server.url("/api/v1/timelines/home?max_id=5"),
                        server.url("/api/v1/timelines/home?min_id=9"),
                    ),
                )
                .json_body(json!([status("9"), status("6")]));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/timelines/home")
                .query_param("max_id", "5")
                .matches(no_min_id);
            then.status(200).json_body(json!([status("4")]));
        })
        .await;

    let mut pg = Pagination::default();
    let page = client.get_timeline_home(Some(&mut pg)).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(pg.max_id, Some(Id::from("5")));
    assert_eq!(pg.min_id, Some(Id::from("9")));
    assert!(pg.has_next());

    let page = client.get_timeline_home(Some(&mut pg)).await.unwrap();
    assert_eq!(page[0].id, Id::from("4"));
    assert!(!pg.has_next());

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn linked_pages_are_walked_without_overlap() {
    let server = MockServer::start_async().await;
    let client = MastaClient::new(&server.base_url(), "token").unwrap();
    let path = "/api/v1/accounts/1/followers";

    let pages = server
        .mock_async(|when, then| {
            when.method(GET).path(path).matches(first_page);
            then.status(200)
                .header("Link", format!("<{}?max_id=b>; rel=next", path))
                .json_body(json!([account("f"), account("e")]));
        })
        .await;
    let page_b = server
        .mock_async(|when, then| {
            when.method(GET).path(path).query_param("max_id", "b");
            then.status(200)
                .header("Link", format!("<{}?max_id=a>; rel=next", path))
                .json_body(json!([account("d"), account("c")]));
        })
        .await;
    let page_a = server
        .mock_async(|when, then| {
            when.method(GET).path(path).query_param("max_id", "a");
            then.status(200).json_body(json!([account("b")]));
        })
        .await;

    let mut seen = Vec::new();
    let mut pg = Pagination::default();
    loop {
        let page = client
            .get_account_followers(&Id::from("1"), Some(&mut pg))
            .await
            .unwrap();
        seen.extend(page.into_iter().map(|a| a.id.to_string()));
        if !pg.has_next() {
            break;
        }
    }

    assert_eq!(seen, vec!["f", "e", "d", "c", "b"]);
    pages.assert_hits_async(1).await;
    page_b.assert_hits_async(1).await;
    page_a.assert_hits_async(1).await;
}

#[tokio::test]
async fn since_id_prev_link_is_not_sent_with_the_older_page() {
    let server = MockServer::start_async().await;
    let client = MastaClient::new(&server.base_url(), "token").unwrap();
    let path = "/api/v1/timelines/public";

    let first = server
        .mock_async(|when, then| {
            when.method(GET).path(path).matches(first_page);
            then.status(200)
                .header(
                    "Link",
                    format!(
                        r#"<{path}?max_id=5>; rel="next", <{path}?since_id=9>; rel="prev""#
                    ),
                )
                .json_body(json!([status("9"), status("6")]));
        })
        .await;
    let bounded = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path)
                .query_param("max_id", "5")
                .query_param_exists("since_id");
            then.status(200).json_body(json!([]));
        })
        .await;
    let older = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path)
                .query_param("max_id", "5")
                .matches(no_since_id);
            then.status(200).json_body(json!([status("4")]));
        })
        .await;

    let mut pg = Pagination::default();
    client.get_timeline_public(false, Some(&mut pg)).await.unwrap();
    assert_eq!(pg.since_id, None);

    let page = client.get_timeline_public(false, Some(&mut pg)).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, Id::from("4"));

    first.assert_async().await;
    older.assert_async().await;
    bounded.assert_hits_async(0).await;
}

#[tokio::test]
async fn limit_and_resumed_position_are_sent() {
    let server = MockServer::start_async().await;
    let client = MastaClient::new(&server.base_url(), "token").unwrap();

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/notifications")
                .query_param("min_id", "100")
                .query_param("limit", "15");
            then.status(200)
                .header(
                    "Link",
                    r#"</api/v1/notifications?since_id=120>; rel="prev""#,
                )
                .json_body(json!([]));
        })
        .await;

    let mut pg = Pagination::newer_than("100").with_limit(15);
    let page = client.get_notifications(Some(&mut pg)).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(pg.since_id, Some(Id::from("120")));
    assert_eq!(pg.min_id, None);
    assert_eq!(pg.limit, Some(15));
    assert!(!pg.has_next());
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_call_leaves_the_cursor_untouched() {
    let server = MockServer::start_async().await;
    let client = MastaClient::new(&server.base_url(), "token").unwrap();

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/favourites");
            then.status(500)
                .header("Link", r#"</api/v1/favourites?max_id=1>; rel="next""#)
                .body("boom");
        })
        .await;

    let mut pg = Pagination::older_than("7");
    assert!(client.get_favourites(Some(&mut pg)).await.is_err());
    assert_eq!(pg, Pagination::older_than("7"));
}
