//! Integration tests for the storefront HTTP API.
//!
//! Each test builds a fresh router over an in-memory store, so there is no
//! shared state between tests and no server process to manage.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt;

use krishi_jyothi_integration_tests::{
    body_json, get, json_request, post_form, post_json, test_app,
};

fn tomatoes() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Organic Tomatoes",
        "price": 60,
        "unit": "kg",
        "image": "/placeholder.svg?height=300&width=300",
        "farmerId": 1,
        "farmerName": "Rajesh Patel",
        "organic": true
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_login_with_demo_credentials() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "farmer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Rajesh Patel");
    assert_eq!(body["user"]["userType"], "farmer");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "farmer@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();

    // Bad credentials are a boolean outcome, not an error status
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn test_failed_login_keeps_current_session() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "farmer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "consumer@example.com", "password": "typo" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    // The prior identity is still logged in
    assert_eq!(body["user"]["name"], "Rajesh Patel");

    let response = app.oneshot(get("/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], "Rajesh Patel");
}

#[tokio::test]
async fn test_me_requires_login() {
    let app = test_app();
    let response = app.oneshot(get("/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_then_me_and_logout() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "consumer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["name"], "Priya Sharma");
    assert_eq!(body["user"]["userType"], "consumer");

    app.clone()
        .oneshot(post_json("/api/auth/logout", &json!({})))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_registers_and_logs_in() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/signup",
            &json!({
                "name": "Anita Desai",
                "email": "anita@example.com",
                "password": "growveggies",
                "userType": "farmer"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Anita Desai");

    // The new credentials work for a later login
    app.clone()
        .oneshot(post_json("/api/auth/logout", &json!({})))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "anita@example.com", "password": "growveggies" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_signup_with_taken_email() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/signup",
            &json!({
                "name": "Impostor",
                "email": "farmer@example.com",
                "password": "hunter2",
                "userType": "farmer"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_signup_with_invalid_draft() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/signup",
            &json!({
                "name": "",
                "email": "nobody@example.com",
                "password": "pw",
                "userType": "consumer"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_profile_update() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "farmer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            "/api/auth/profile",
            &json!({ "location": "Nashik, Maharashtra", "bio": "Tomato specialist" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["location"], "Nashik, Maharashtra");
    assert_eq!(body["user"]["bio"], "Tomato specialist");
    // Identity fields stay fixed
    assert_eq!(body["user"]["email"], "farmer@example.com");
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_cart_starts_empty() {
    let app = test_app();

    let response = app.oneshot(get("/api/cart")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["itemCount"], 0);
    assert_eq!(body["subtotal"], "0");
}

#[tokio::test]
async fn test_cart_add_merges_same_product() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 2 }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["event"]["kind"], "added");
    assert_eq!(body["itemCount"], 2);

    let response = app
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 3 }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;

    // Same product merges into one line
    assert_eq!(body["event"]["kind"], "quantity_updated");
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["quantity"], 5);
    assert_eq!(body["itemCount"], 5);
    assert_eq!(body["subtotal"], "300");
}

#[tokio::test]
async fn test_cart_add_rejects_zero_quantity() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cart_update_to_zero_removes_line() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 2 }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/api/cart/update",
            &json!({ "productId": 1, "quantity": 0 }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["event"]["kind"], "removed");
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["subtotal"], "0");
}

#[tokio::test]
async fn test_cart_remove_and_clear() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 1 }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/api/cart/remove", &json!({ "productId": 1 })))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["event"]["kind"], "removed");
    assert_eq!(body["itemCount"], 0);

    // Removing an absent product is a silent no-op
    let response = app
        .clone()
        .oneshot(post_json("/api/cart/remove", &json!({ "productId": 1 })))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body.get("event").is_none());

    let response = app
        .oneshot(post_json("/api/cart/clear", &json!({})))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["event"]["kind"], "cleared");
}

#[tokio::test]
async fn test_checkout_clears_the_cart() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "consumer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    app.clone()
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 5 }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/api/cart/checkout", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["itemCount"], 5);
    assert_eq!(body["total"], "300");

    let response = app.oneshot(get("/api/cart")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_checkout_with_empty_cart() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "consumer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json("/api/cart/checkout", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_requires_login() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/cart/add",
            &json!({ "item": tomatoes(), "quantity": 1 }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/api/cart/checkout", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The cart is untouched by the refused checkout
    let response = app.oneshot(get("/api/cart")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["itemCount"], 1);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_product_listing_and_detail() {
    let app = test_app();

    let response = app.clone().oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 4);

    let response = app.clone().oneshot(get("/api/products/1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["name"], "Organic Tomatoes");
    assert_eq!(body["farmerName"], "Rajesh Patel");

    let response = app.oneshot(get("/api/products/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_create_requires_farmer() {
    let app = test_app();

    let draft = json!({
        "name": "Okra",
        "description": "Fresh lady's finger.",
        "category": "Vegetables",
        "price": 50,
        "unit": "kg",
        "stock": 30
    });

    // Not logged in
    let response = app
        .clone()
        .oneshot(post_json("/api/products", &draft))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Logged in as a consumer
    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "consumer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json("/api/products", &draft))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Logged in as a farmer
    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "farmer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json("/api/products", &draft))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Okra");
    assert_eq!(body["farmerId"], 1);

    let response = app.oneshot(get("/api/products?farmer=1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_product_delete_by_owner() {
    let app = test_app();

    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            &json!({ "email": "farmer@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/api/products/2", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/products/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Subscribe
// =============================================================================

#[tokio::test]
async fn test_subscribe_success() {
    let app = test_app();

    let response = app
        .oneshot(post_form("/api/subscribe", "email=reader%40example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully subscribed to newsletter");
}

#[tokio::test]
async fn test_subscribe_missing_email() {
    let app = test_app();

    let response = app
        .oneshot(post_form("/api/subscribe", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Email is required");
}

#[tokio::test]
async fn test_subscribe_invalid_email() {
    let app = test_app();

    let response = app
        .oneshot(post_form("/api/subscribe", "email=not-an-email"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Please enter a valid email address");
}

// =============================================================================
// Weather
// =============================================================================

#[tokio::test]
async fn test_weather_for_known_city() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/weather?location=Delhi"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["current"]["temp"], 38);
    assert_eq!(body["current"]["condition"], "Sunny");
    assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
    assert_eq!(body["farmingTips"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_weather_unknown_city_defaults_to_mumbai() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/weather?location=Atlantis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["current"]["condition"], "Partly Cloudy");
}

#[tokio::test]
async fn test_weather_missing_location() {
    let app = test_app();

    let response = app.oneshot(get("/api/weather")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Location parameter is required");
}
