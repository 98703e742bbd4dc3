//! Prediction and history handlers for both applications

use std::collections::HashMap;

use axum::{
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::pages;
use crate::api::session::{extract_session, Session};
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::feature::snapshot_form;
use crate::domain::prediction::{Outcome, PredictionRecord};

/// Scope key used by the process-wide history store, which ignores it.
const PROCESS_SCOPE: &str = "";

/// JSON prediction response, shaped `{"prediction": <number>}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

// ---------------------------------------------------------------------------
// Car price app
// ---------------------------------------------------------------------------

/// GET / - form plus shared history.
pub async fn car_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let model_name = car_model_name(&state)?;
    let history = state.history.list(PROCESS_SCOPE).await?;

    let page = pages::car_price_page(&model_name, &HashMap::new(), None, &history, &state.schema);
    Ok(Html(page.into_string()))
}

/// POST / - predict when every declared field was filled in, then
/// re-render with the result inline and the submitted values echoed.
pub async fn car_submit(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let model_name = car_model_name(&state)?;

    let all_present = state
        .schema
        .field_names()
        .all(|name| form.get(name).is_some_and(|v| !v.trim().is_empty()));

    let latest = if all_present {
        let predictor = state.registry.load(&model_name).await?;
        let record = state
            .inference
            .run(&model_name, predictor.as_ref(), &state.schema, &form);

        state.history.append(PROCESS_SCOPE, record.clone()).await?;
        Some(record)
    } else {
        debug!("Incomplete form submission, skipping prediction");
        None
    };

    let history = state.history.list(PROCESS_SCOPE).await?;
    let page = pages::car_price_page(
        &model_name,
        &form,
        latest.as_ref(),
        &history,
        &state.schema,
    );
    Ok(Html(page.into_string()))
}

/// POST /clear_history
pub async fn car_clear_history(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    state.history.clear(PROCESS_SCOPE).await?;
    Ok(Redirect::to("/"))
}

/// POST /predict - JSON payload in, raw unrounded prediction out.
pub async fn car_predict_json(
    State(state): State<AppState>,
    Json(payload): Json<HashMap<String, Value>>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let model_name = car_model_name(&state)?;
    let predictor = state.registry.load(&model_name).await?;

    let form: HashMap<String, String> = payload
        .iter()
        .map(|(k, v)| (k.clone(), value_to_string(v)))
        .collect();

    let prediction = state
        .inference
        .raw(predictor.as_ref(), &state.schema, &form)?;

    Ok(Json(PredictionResponse { prediction }))
}

fn car_model_name(state: &AppState) -> Result<String, ApiError> {
    state
        .registry
        .discover()
        .first()
        .map(|entry| entry.name().to_string())
        .ok_or_else(|| ApiError::internal("No model available"))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Placement app
// ---------------------------------------------------------------------------

/// GET / - model selector, form and this session's history. Serves a
/// static notice instead when zero models were discovered.
pub async fn placement_index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let models = state.registry.discover();
    if models.is_empty() {
        return Ok(Html(pages::no_models_page().into_string()).into_response());
    }

    let session = extract_session(&headers);
    let history = state.history.list(&session.id).await?;
    let selected = state.registry.default_model();

    let page = pages::placement_page(&models, selected.as_deref(), &state.schema, &history);
    Ok(with_session(session, Html(page.into_string())))
}

/// POST /predict - validate the chosen model, infer, prepend to the
/// session's history and bounce back to the form. An unknown model name
/// redirects without touching history.
pub async fn placement_predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let session = extract_session(&headers);

    let Some(model_name) = form.get("model_name").map(|s| s.trim().to_string()) else {
        return Ok(with_session(session, Redirect::to("/")));
    };

    let registered = state
        .registry
        .discover()
        .iter()
        .any(|entry| entry.name() == model_name);
    if !registered {
        debug!(model = %model_name, "Unknown model selected, redirecting");
        return Ok(with_session(session, Redirect::to("/")));
    }

    let record = match state.registry.load(&model_name).await {
        Ok(predictor) => state
            .inference
            .run(&model_name, predictor.as_ref(), &state.schema, &form),
        // A broken artifact surfaces inline like any other prediction
        // failure instead of turning the form flow into a 5xx.
        Err(e) => PredictionRecord::new(&model_name, Outcome::Failed(e.to_string()))
            .with_inputs(snapshot_form(&state.schema, &form)),
    };

    state.history.append(&session.id, record).await?;
    Ok(with_session(session, Redirect::to("/")))
}

/// POST /reset_history
pub async fn placement_reset_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session = extract_session(&headers);
    state.history.clear(&session.id).await?;
    Ok(with_session(session, Redirect::to("/")))
}

/// POST /reset_form - nothing to reset server-side, the redirect clears
/// the browser's form state.
pub async fn placement_reset_form(headers: HeaderMap) -> Response {
    with_session(extract_session(&headers), Redirect::to("/"))
}

fn with_session(session: Session, response: impl IntoResponse) -> Response {
    match session.set_cookie() {
        Some(cookie) => (AppendHeaders([cookie]), response).into_response(),
        None => response.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_to_string_handles_json_scalars() {
        assert_eq!(value_to_string(&Value::String("Diesel".into())), "Diesel");
        assert_eq!(value_to_string(&serde_json::json!(30000)), "30000");
        assert_eq!(value_to_string(&serde_json::json!(5.5)), "5.5");
        assert_eq!(value_to_string(&Value::Null), "");
    }

    #[test]
    fn test_prediction_response_shape() {
        let json = serde_json::to_string(&PredictionResponse { prediction: 4.75 }).unwrap();
        assert_eq!(json, "{\"prediction\":4.75}");
    }
}
