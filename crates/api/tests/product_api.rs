//! HTTP-level integration tests for the `/products` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Seed data (3 categories, 25 products) is created by migrations.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn product_body(name: &str, price: f64, category_ids: &[i64]) -> serde_json::Value {
    json!({
        "name": name,
        "description": "integration test product",
        "price": price,
        "img_url": "https://images.catalog.dev/test.png",
        "date": "2021-03-01T10:00:00Z",
        "category_ids": category_ids,
    })
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_default_page(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_elements"], 25);
    assert_eq!(json["page"], 0);
    assert_eq!(json["size"], 12);
    assert_eq!(json["total_pages"], 3);

    let content = json["content"].as_array().unwrap();
    assert_eq!(content.len(), 12);
    // List projections do not resolve the category association.
    assert_eq!(content[0]["categories"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorted_by_name_ascending(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/products?sort=name,asc&size=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let content = json["content"].as_array().unwrap();
    assert_eq!(content.len(), 5);
    assert_eq!(content[0]["name"], "4K Monitor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorted_by_price_descending(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/products?sort=price,desc&size=1").await;
    let json = body_json(response).await;

    assert_eq!(json["content"][0]["name"], "Rackmount Server");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rejects_unknown_sort_field(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/products?sort=color").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Detail lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_id_resolves_categories(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/products/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Wireless Mouse");
    assert_eq!(json["price"], 29.9);

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["id"], 2);
    assert_eq!(categories[0]["name"], "Electronics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_id_returns_404_for_absent_id(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/products/1000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 1000 not found");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_201_with_assigned_id(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/products",
        product_body("Ergonomic Trackball", 119.0, &[2, 3]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 26, "seed ids end at 25");
    assert_eq!(json["name"], "Ergonomic Trackball");
    assert_eq!(json["categories"].as_array().unwrap().len(), 2);

    let fetched = get(app, "/api/v1/products/26").await;
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_unknown_category_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/products",
        product_body("Ergonomic Trackball", 119.0, &[999]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Category with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_blank_name_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/products", product_body("   ", 119.0, &[2])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_scalars_and_association(pool: PgPool) {
    let app = build_test_app(pool);

    let response = put_json(
        app,
        "/api/v1/products/1",
        product_body("Wired Mouse", 19.9, &[3]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Wired Mouse");
    assert_eq!(json["price"], 19.9);

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Computers");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_returns_404_for_absent_id(pool: PgPool) {
    let app = build_test_app(pool);

    let response = put_json(
        app,
        "/api/v1/products/1000",
        product_body("Ghost", 10.0, &[]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_204_then_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = delete(app.clone(), "/api/v1/products/2").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched = get(app, "/api/v1/products/2").await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_returns_404_for_absent_id(pool: PgPool) {
    let app = build_test_app(pool);

    let response = delete(app, "/api/v1/products/1000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
