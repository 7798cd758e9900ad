//! Integration tests for the Order resource against a local mock server.

use printify_api::rest::resources::v1::common::{Address, LineItem};
use printify_api::rest::resources::{Order, OrderListParams, SubmittedOrder};
use printify_api::{ApiKey, BaseUrl, HttpClient, HttpError, PrintifyConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SHOP_ID: u64 = 42;

fn create_client(server: &MockServer) -> HttpClient {
    let config = PrintifyConfig::builder()
        .api_key(ApiKey::new("test-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn order_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "address_to": {
            "first_name": "John",
            "last_name": "Smith",
            "country": "BE",
            "city": "Retie",
            "zip": "2470"
        },
        "line_items": [{
            "product_id": "5b05842f3921c9547531758d",
            "quantity": 1,
            "variant_id": 17887,
            "print_provider_id": 5,
            "cost": 1050,
            "shipping_cost": 400,
            "status": status
        }],
        "metadata": {
            "order_type": "external",
            "shop_order_id": 1_370_762_297,
            "shop_order_label": "1370762297"
        },
        "total_price": 1450,
        "total_shipping": 400,
        "total_tax": 0,
        "status": status,
        "shipping_method": 1,
        "created_at": "2017-04-18 13:24:28+00:00"
    })
}

fn new_order() -> Order {
    Order {
        external_id: Some("2750e210-39bb-11e9-a503-452618153e4a".to_string()),
        label: Some("00012".to_string()),
        line_items: vec![LineItem {
            product_id: Some("5bfd0b66a342bcc9b5563216".to_string()),
            variant_id: Some(17887),
            quantity: 1,
            ..Default::default()
        }],
        shipping_method: 1,
        send_shipping_notification: Some(false),
        address_to: Some(Address {
            first_name: Some("John".to_string()),
            last_name: Some("Smith".to_string()),
            country: Some("BE".to_string()),
            city: Some("Retie".to_string()),
            zip: Some("2470".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_sends_filters_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/42/orders.json"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_page": 2,
            "data": [order_json("5a96f649b2439217d070f507", "pending")],
            "first_page_url": "/?page=1",
            "from": 11,
            "last_page": 2,
            "last_page_url": "/?page=2",
            "links": [],
            "next_page_url": null,
            "path": "/",
            "per_page": 10,
            "prev_page_url": "/?page=1",
            "to": 11,
            "total": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = OrderListParams {
        page: Some(2),
        limit: Some(10),
        status: Some("pending".to_string()),
    };

    let orders = Order::all(&client, SHOP_ID, &params).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status.as_deref(), Some("pending"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=2&limit=10&status=pending"));
}

#[tokio::test]
async fn test_list_without_filters_has_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/42/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let orders = Order::all(&client, SHOP_ID, &OrderListParams::default())
        .await
        .unwrap();

    assert!(orders.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_page_exposes_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/42/orders.json"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_page": 1,
            "data": [order_json("a1", "on-hold"), order_json("a2", "pending")],
            "from": 1,
            "last_page": 3,
            "per_page": 2,
            "to": 2,
            "total": 6
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = OrderListParams {
        page: Some(1),
        ..Default::default()
    };

    let page = Order::page(&client, SHOP_ID, &params).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 6);
    assert_eq!(page.next_page(), Some(2));
}

// ============================================================================
// Find
// ============================================================================

#[tokio::test]
async fn test_find_returns_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/42/orders/7.json"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_json("5a96f649b2439217d070f507", "fulfilled")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let order = Order::find(&client, SHOP_ID, 7).await.unwrap();

    assert_eq!(order.id.as_deref(), Some("5a96f649b2439217d070f507"));
    assert_eq!(order.total_price, Some(1450.0));
    assert!(order.shipments.is_none());
    assert!(order.fulfilled_at.is_none());
}

#[tokio::test]
async fn test_find_missing_order_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/42/orders/999.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"status": "error", "code": 8203, "message": "Not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = Order::find(&client, SHOP_ID, 999).await.unwrap_err();

    assert!(matches!(error, HttpError::Protocol { status: 404 }));
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_find_with_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/42/orders/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": "nope"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = Order::find(&client, SHOP_ID, 7).await;

    assert!(matches!(result, Err(HttpError::Decode { status: 200, .. })));
}

// ============================================================================
// Submit
// ============================================================================

#[tokio::test]
async fn test_submit_with_id_only_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders.json"))
        .and(header("content-type", "application/json;charset=utf-8"))
        .and(body_partial_json(json!({
            "external_id": "2750e210-39bb-11e9-a503-452618153e4a",
            "shipping_method": 1,
            "send_shipping_notification": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let submitted = new_order().submit(&client, SHOP_ID).await.unwrap();

    assert_eq!(
        submitted,
        SubmittedOrder::Acknowledged {
            id: "abc123".to_string()
        }
    );

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("id").is_none());
    assert!(body.get("total_price").is_none());
}

#[tokio::test]
async fn test_submit_with_full_order_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_json("5a96f649b2439217d070f507", "pending")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let submitted = new_order().submit(&client, SHOP_ID).await.unwrap();

    assert_eq!(submitted.id(), "5a96f649b2439217d070f507");
    let order = submitted.order().unwrap();
    assert_eq!(order.status.as_deref(), Some("pending"));
}

#[tokio::test]
async fn test_submit_rejected_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "code": 10100,
            "message": "Validation failed."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = new_order().submit(&client, SHOP_ID).await;

    assert!(matches!(result, Err(HttpError::Protocol { status: 400 })));
}

// ============================================================================
// Production, shipping, cancel
// ============================================================================

#[tokio::test]
async fn test_send_to_production() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders/7/send_to_production.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_json("5a96f649b2439217d070f507", "in-production")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let order = Order::send_to_production(&client, SHOP_ID, 7).await.unwrap();

    assert_eq!(order.status.as_deref(), Some("in-production"));
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_calculate_shipping_returns_exact_costs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders/shipping.json"))
        .and(body_partial_json(json!({"shipping_method": 1})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"standard": 4.99, "express": 9.99})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let cost = new_order()
        .calculate_shipping(&client, SHOP_ID)
        .await
        .unwrap();

    assert_eq!(cost.standard, 4.99);
    assert_eq!(cost.express, 9.99);
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders/7/cancel.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_json("5a96f649b2439217d070f507", "canceled")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let order = Order::cancel(&client, SHOP_ID, 7).await.unwrap();

    assert_eq!(order.status.as_deref(), Some("canceled"));
}

#[tokio::test]
async fn test_cancel_already_shipped_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/42/orders/7/cancel.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"id": "7"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = Order::cancel(&client, SHOP_ID, 7).await;

    assert!(matches!(result, Err(HttpError::Protocol { status: 422 })));
}
