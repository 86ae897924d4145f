use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use dish_constructor_rs::catalog::{IngredientSource, MemoryCatalog};
use dish_constructor_rs::constructor::{ConstructorLimits, DishService, EmptyGroupPolicy};
use dish_constructor_rs::error::{DishError, Result};
use dish_constructor_rs::models::{Dish, Ingredient};
use dish_constructor_rs::server::{ErrorResponse, router};

/// Source whose database is unreachable.
struct BrokenSource;

#[async_trait]
impl IngredientSource for BrokenSource {
    async fn fetch(&self, code: char) -> Result<Vec<Ingredient>> {
        Err(DishError::lookup(code, "connection refused"))
    }
}

fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with('B', Ingredient::new("Bun", "Bun1", 1.0))
        .with('B', Ingredient::new("Bun", "Bun2", 1.5))
        .with('S', Ingredient::new("Sauce", "Sauce1", 0.5))
}

fn app_with(source: Arc<dyn IngredientSource>, limits: ConstructorLimits) -> Router {
    router(Arc::new(DishService::new(source, limits)))
}

fn app() -> Router {
    app_with(Arc::new(catalog()), ConstructorLimits::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn error_message(app: Router, uri: &str) -> (StatusCode, String) {
    let (status, body) = get(app, uri).await;
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    (status, error.error)
}

#[tokio::test]
async fn test_constructor_returns_dishes() {
    let request = Request::builder()
        .uri("/constructor/BS")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let dishes: Vec<Dish> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].describe(), "Bun1 + Sauce1");
    assert_eq!(dishes[0].price, 1.5);
    assert_eq!(dishes[1].describe(), "Bun2 + Sauce1");
    assert_eq!(dishes[1].price, 2.0);
}

#[tokio::test]
async fn test_wire_format_uses_type_field() {
    let (status, body) = get(app(), "/constructor/S").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"ingredients": [{"type": "Sauce", "value": "Sauce1", "price": 0.5}], "price": 0.5}
        ])
    );
}

#[tokio::test]
async fn test_encoded_whitespace_is_ignored() {
    let (status, body) = get(app(), "/constructor/B%20S").await;
    assert_eq!(status, StatusCode::OK);

    let dishes: Vec<Dish> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dishes.len(), 2);
}

#[tokio::test]
async fn test_codes_may_span_path_segments() {
    let (status, body) = get(app(), "/constructor/B/S").await;
    assert_eq!(status, StatusCode::OK);

    let dishes: Vec<Dish> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].describe(), "Bun1 + Sauce1");
}

#[tokio::test]
async fn test_unsatisfiable_request_answers_quickly() {
    let mut sauces = MemoryCatalog::new();
    for i in 0..11 {
        sauces.insert('S', Ingredient::new("Sauce", format!("Sauce{i}"), 0.1));
    }
    let app = app_with(Arc::new(sauces), ConstructorLimits::default());

    let started = std::time::Instant::now();
    let (status, body) = get(app, "/constructor/SSSSSSSSSSSX").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn test_step_limit_is_payload_too_large() {
    let limits = ConstructorLimits {
        max_steps: 2,
        ..ConstructorLimits::default()
    };
    let app = app_with(Arc::new(catalog()), limits);

    let (status, message) = error_message(app, "/constructor/BS").await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(message, "Dish search too large (limit 2 steps)");
}

#[tokio::test]
async fn test_missing_codes_is_bad_request() {
    for uri in ["/constructor/", "/constructor", "/constructor/%20"] {
        let (status, message) = error_message(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(message, "Ingredient codes are required");
    }
}

#[tokio::test]
async fn test_unknown_code_gives_empty_list_by_default() {
    let (status, body) = get(app(), "/constructor/BZ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn test_unknown_code_rejected_by_policy() {
    let limits = ConstructorLimits {
        empty_group: EmptyGroupPolicy::Reject,
        ..ConstructorLimits::default()
    };
    let app = app_with(Arc::new(catalog()), limits);

    let (status, message) = error_message(app, "/constructor/BZ").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(message, "Ingredient code 'Z' produced no candidates");
}

#[tokio::test]
async fn test_too_many_codes() {
    let limits = ConstructorLimits {
        max_groups: 2,
        ..ConstructorLimits::default()
    };
    let app = app_with(Arc::new(catalog()), limits);

    let (status, _) = error_message(app, "/constructor/BSB").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_too_many_dishes() {
    let limits = ConstructorLimits {
        max_dishes: 1,
        ..ConstructorLimits::default()
    };
    let app = app_with(Arc::new(catalog()), limits);

    let (status, _) = error_message(app, "/constructor/BS").await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_lookup_failure_is_server_error() {
    let app = app_with(Arc::new(BrokenSource), ConstructorLimits::default());

    let (status, message) = error_message(app, "/constructor/BS").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, "Failed to generate combinations");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
