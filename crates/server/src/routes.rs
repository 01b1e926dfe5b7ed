//! HTTP routes and router assembly.
//!
//! Two surfaces, matching the original service contract:
//! - `/`: browser form flow (GET renders the form, POST renders the result)
//! - `/predict`: JSON API for multi-item orders (used by the web client)
//!
//! CORS is wide open so the separately-hosted web client can call the API;
//! the layer also answers preflight OPTIONS requests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use pipeline::{RawRecord, Recommendation};

use crate::aggregate::{ItemSpec, aggregate_items};
use crate::error::ApiError;
use crate::orchestrator::RecommendationOrchestrator;
use crate::pages;

/// Shared state for all handlers; cheap to clone (everything is an `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<RecommendationOrchestrator>,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/predict", post(predict))
        .layer(cors)
        .with_state(state)
}

/// `GET /` — the input form.
async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// `POST /` — form-encoded single-item submission, rendered as HTML.
async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let record = match RawRecord::from_form(&fields) {
        Ok(record) => record,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Html(pages::error_page(&e.to_string())))
                .into_response();
        }
    };

    match state.orchestrator.recommend(&record) {
        Ok(recommendation) => Html(pages::result_page(&recommendation)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::error_page(&format!("{e:#}"))),
        )
            .into_response(),
    }
}

/// Body of a `POST /predict` request.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// `POST /predict` — aggregate a multi-item order and recommend packaging.
async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let order = aggregate_items(&request.items)
        .ok_or_else(|| ApiError::BadRequest("No items provided".to_string()))?;
    info!(
        items = request.items.len(),
        side = order.side,
        "Aggregated order"
    );

    let mut recommendation = state.orchestrator.recommend(&order.record)?;
    // The API reports the predicted cubic box rather than the raw bin fields
    recommendation.box_dimensions =
        format!("{side}x{side}x{side} inches", side = order.side);

    Ok(Json(recommendation))
}
