//! End-to-end tests for the car price application, driven through the
//! router without binding a socket. Model artifacts are read from the
//! repository's models/ directory.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use model_serve::api::create_car_price_router;
use model_serve::AppConfig;

async fn app() -> Router {
    let config = AppConfig::default();
    let state = model_serve::create_car_price_state(&config)
        .await
        .expect("car price model artifact should exist in models/car_price");
    create_car_price_router(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const FULL_FORM: &str = "Present_Price=5.5&Kms_Driven=30000&Fuel_Type=Diesel&Seller_Type=Dealer\
&Transmission=Manual&Owner=0&Age=3";

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let response = app()
        .await
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"healthy\""));
}

#[tokio::test]
async fn index_renders_the_form() {
    let response = app()
        .await
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Present_Price"));
    assert!(body.contains("Fuel_Type"));
    assert!(body.contains("GradientBoostingRegressor"));
    assert!(body.contains("No predictions yet."));
}

#[tokio::test]
async fn full_submission_predicts_and_records_history() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(form_request("/", FULL_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Predicted price: 4.75"));

    // The shared history survives across requests.
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("4.75"));
    assert!(!body.contains("No predictions yet."));
}

#[tokio::test]
async fn incomplete_submission_skips_prediction() {
    let response = app()
        .await
        .oneshot(form_request("/", "Present_Price=5.5&Kms_Driven=30000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("Predicted price"));
    assert!(body.contains("No predictions yet."));
    // Submitted values are echoed back into the form.
    assert!(body.contains("value=\"5.5\""));
}

#[tokio::test]
async fn json_endpoint_returns_raw_prediction() {
    let payload = serde_json::json!({
        "Present_Price": 5.5,
        "Kms_Driven": 30000,
        "Fuel_Type": "Diesel",
        "Seller_Type": "Dealer",
        "Transmission": "Manual",
        "Owner": 0,
        "Age": 3
    });

    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!((parsed["prediction"].as_f64().unwrap() - 4.75).abs() < 1e-9);
}

#[tokio::test]
async fn malformed_json_is_rejected_with_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"Present_Price\":"))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn clear_history_empties_the_table() {
    let app = app().await;

    app.clone()
        .oneshot(form_request("/", FULL_FORM))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(form_request("/clear_history", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(body_string(response).await.contains("No predictions yet."));
}
