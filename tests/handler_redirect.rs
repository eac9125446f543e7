mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server();
    let url = "http://lkml.iu.edu/hypermail/linux/kernel/1510.3/02866.html";
    let created = common::create_short_url(&server, url).await;
    let code = created["shortUrl"].as_str().unwrap();

    let response = server.get(&format!("/shorturls/{code}")).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_location_is_not_normalized() {
    let server = common::create_test_server();
    let url = "HTTPS://Example.COM:443/Some/Path?b=2&a=1#Frag";
    common::create_short_url(&server, url).await;

    let response = server.get("/shorturls/B").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_counts_usage() {
    let server = common::create_test_server();
    let url = "https://docs.djangoproject.com/en/2.0/ref/urlresolvers/#reverse";
    common::create_short_url(&server, url).await;

    for _ in 0..3 {
        server
            .get("/shorturls/B")
            .await
            .assert_status(StatusCode::MOVED_PERMANENTLY);
    }

    let info = server.get("/shorturls/B/info").await;
    info.assert_status_ok();
    assert_eq!(info.json::<serde_json::Value>()["usageCount"], 3);
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = common::create_test_server();

    let response = server.get("/shorturls/Zz9").await;

    response.assert_status_not_found();
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_redirect_malformed_code() {
    let server = common::create_test_server();
    common::create_short_url(&server, "https://example.com").await;

    for code in ["a-b", "B!", "-B", "%20"] {
        let response = server.get(&format!("/shorturls/{code}")).await;
        response.assert_status_not_found();
        assert!(response.headers().get("location").is_none());
    }
}

#[tokio::test]
async fn test_redirect_overflowing_code() {
    let server = common::create_test_server();

    let response = server.get(&format!("/shorturls/{}", "z".repeat(40))).await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_malformed_and_unknown_codes_return_same_body() {
    let server = common::create_test_server();

    let malformed = server.get("/shorturls/a-b").await.json::<serde_json::Value>();
    let unknown = server.get("/shorturls/abc").await.json::<serde_json::Value>();

    assert_eq!(malformed["error"]["code"], unknown["error"]["code"]);
    assert_eq!(malformed["error"]["message"], unknown["error"]["message"]);
}
