use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::constructor::DishService;
use crate::error::{DishError, Result};
use crate::models::Dish;

pub type AppState = Arc<DishService>;

/// All HTTP routes of the constructor API.
pub fn router(service: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/constructor", get(missing_codes))
        .route("/constructor/", get(missing_codes))
        .route("/constructor/*codes", get(construct))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn missing_codes() -> Result<Json<Vec<Dish>>> {
    Err(DishError::EmptyCodes)
}

/// `GET /constructor/{codes}`: every dish for the given type codes.
///
/// The whole path suffix is taken, slashes included.
async fn construct(
    State(service): State<AppState>,
    Path(codes): Path<String>,
) -> Result<Json<Vec<Dish>>> {
    let dishes = service.build(&codes).await?;
    Ok(Json(dishes))
}
