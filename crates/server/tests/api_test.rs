//! Integration tests for the HTTP surface.
//!
//! These drive the real router against the artifacts shipped in `models/`,
//! so the assertions below are pinned to those trees: a default 10x10x10
//! item aggregates to a 12-inch cubic box (volume ratio 1000/1728), which
//! the regressor maps to a filler amount of 0.24.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use predictors::ModelBundle;
use server::{AppState, RecommendationOrchestrator, build_router};

fn test_router() -> Router {
    let models_dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../models"));
    let bundle = ModelBundle::load_from_files(models_dir).expect("Failed to load artifacts");
    let orchestrator =
        Arc::new(RecommendationOrchestrator::new(Arc::new(bundle)).expect("Contract mismatch"));
    build_router(AppState { orchestrator })
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_predict_single_default_item() {
    let response = test_router()
        .oneshot(
            Request::post("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "items": [{}] }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(payload["Box_Category"], "Small");
    assert_eq!(payload["Box_Dimensions"], "12x12x12 inches");
    assert_eq!(payload["Filler_Amount"], "0.24 inch");
    assert_eq!(payload["Filler_Type"], "Paper wrap");
    assert_eq!(payload["Fit_Status"], "Acceptable Fit");
    assert_eq!(payload["Arrangement"], "Try repositioning item");
    assert_eq!(payload["Anomaly_Label"], "Normal");
    // Aggregated orders always use the "sunny" weather context
    assert_eq!(payload["Weather_Recommendation"], "Standard eco-packaging is suitable");
    assert_eq!(payload["Cost_Savings_Per_Unit"], "$0.93");
    assert_eq!(payload["Environmental_Impact"]["Plastic_Saved_kg"], 0.019);
    assert_eq!(payload["Environmental_Impact"]["CO2_Saved_kg"], 0.114);
}

#[tokio::test]
async fn test_predict_two_items_uses_buffered_cube() {
    let body = json!({
        "items": [
            { "width": 10, "height": 10, "depth": 10, "quantity": 1 },
            { "width": 20, "height": 20, "depth": 20, "quantity": 1 }
        ]
    });
    let response = test_router()
        .oneshot(
            Request::post("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(payload["Box_Dimensions"], "24.96x24.96x24.96 inches");
}

#[tokio::test]
async fn test_predict_rejects_empty_order() {
    let response = test_router()
        .oneshot(
            Request::post("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "items": [] }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(payload["error"], "No items provided");
}

#[tokio::test]
async fn test_form_flow_renders_result_page() {
    let response = test_router()
        .oneshot(
            Request::post("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "item_l=10&item_w=10&item_h=10&bin_l=10&bin_w=10&bin_h=10&weather=humid",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("Recycled cardboard box"));
    assert!(page.contains("Use insulated material"));
    // Volume ratio 1.0 lands in the low-filler leaves: perfect fit
    assert!(page.contains("Perfect Fit"));
}

#[tokio::test]
async fn test_form_flow_names_invalid_field() {
    let response = test_router()
        .oneshot(
            Request::post("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "item_l=10&item_w=abc&item_h=10&bin_l=10&bin_w=10&bin_h=10",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let page = body_string(response).await;
    assert!(page.contains("item_w"));
}

#[tokio::test]
async fn test_index_serves_the_form() {
    let response = test_router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("<form"));
    assert!(page.contains("name=\"bin_h\""));
}
