#![allow(clippy::unwrap_used)]
// Integration tests for `CatalogClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_api::{CatalogClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let base = format!("{}/eyesofkids/json-fake-data", server.uri());
    let client = CatalogClient::with_client(reqwest::Client::new(), &base).unwrap();
    (server, client)
}

fn products_path(suffix: &str) -> String {
    format!("/eyesofkids/json-fake-data/products{suffix}")
}

// ── Single product ──────────────────────────────────────────────────

#[tokio::test]
async fn test_product_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(products_path("/7")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Pixel 8",
            "price": 18900,
            "stock": 3,
            "picture": "https://example.test/p7.jpg",
            "tags": "phone,google"
        })))
        .mount(&server)
        .await;

    let body = client.product("7").await.unwrap();

    assert_eq!(body["id"], 7);
    assert_eq!(body["name"], "Pixel 8");
}

#[tokio::test]
async fn test_product_payload_is_returned_verbatim() {
    let (server, client) = setup().await;

    // Shape checks belong to the views; the client hands back whatever JSON arrived.
    Mock::given(method("GET"))
        .and(path(products_path("/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let body = client.product("1").await.unwrap();
    assert!(body.is_array());
}

#[tokio::test]
async fn test_product_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(products_path("/999")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client.product("999").await.unwrap_err();
    assert!(err.is_not_found(), "expected 404, got: {err:?}");
}

#[tokio::test]
async fn test_product_non_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(products_path("/2")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.product("2").await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Collection ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_products_forwards_query_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(products_path("")))
        .and(query_param("page", "2"))
        .and(query_param("perpage", "10"))
        .and(query_param("sort", "price"))
        .and(query_param("order", "desc"))
        .and(query_param("name_like", "phone"))
        .and(query_param("brands", "Apple,Google"))
        .and(query_param("price_gte", "0"))
        .and(query_param("price_lte", "15000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{ "id": 1, "name": "iPhone", "price": 12000 }],
            "total": 42,
            "pageCount": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = vec![
        ("page", "2".to_string()),
        ("perpage", "10".to_string()),
        ("sort", "price".to_string()),
        ("order", "desc".to_string()),
        ("name_like", "phone".to_string()),
        ("brands", "Apple,Google".to_string()),
        ("price_gte", "0".to_string()),
        ("price_lte", "15000".to_string()),
    ];
    let body = client.products(&params).await.unwrap();

    assert_eq!(body["total"], 42);
    assert_eq!(body["pageCount"], 5);
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_products_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(products_path("")))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&server)
        .await;

    let err = client.products(&[]).await.unwrap_err();
    assert!(err.is_transient());
    assert!(
        matches!(err, Error::Http { status: 500, ref message } if message == "database offline"),
        "unexpected error: {err:?}"
    );
}

// ── Transport ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_built_client_asks_for_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/3"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    let body = client.product("3").await.unwrap();
    assert_eq!(body["id"], 3);
}
