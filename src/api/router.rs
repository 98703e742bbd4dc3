use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::predict;
use super::state::AppState;

/// Router for the car price application: one shared form at the root,
/// a JSON endpoint alongside it.
pub fn create_car_price_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Form and prediction endpoints
        .route("/", get(predict::car_index).post(predict::car_submit))
        .route("/clear_history", post(predict::car_clear_history))
        .route("/predict", post(predict::car_predict_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Router for the placement application: model selector form plus the
/// session-scoped history actions.
pub fn create_placement_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Form and prediction endpoints
        .route("/", get(predict::placement_index))
        .route("/predict", post(predict::placement_predict))
        .route("/reset_history", post(predict::placement_reset_history))
        .route("/reset_form", post(predict::placement_reset_form))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
