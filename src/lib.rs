//! Model Serve
//!
//! Serves two small prediction applications over HTTP:
//! - a used car price estimator backed by a single regression model
//! - a campus placement predictor with a selectable classifier registry
//!
//! Models are plain JSON artifacts loaded through a file-backed registry;
//! every prediction lands in an in-memory history rendered on the page.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::bail;
use tracing::info;

use api::state::AppState;
use domain::{FeatureField, FeatureSchema, ModelRegistry, ModelSpec};
use infrastructure::{BoundedHistory, FileModelRegistry, InferenceService, SessionHistory};

/// Form fields for the car price estimator, in render order.
pub fn car_price_schema() -> FeatureSchema {
    FeatureSchema::new(vec![
        FeatureField::float("Present_Price"),
        FeatureField::integer("Kms_Driven"),
        FeatureField::categorical("Fuel_Type", vec![("Petrol", 0), ("Diesel", 1), ("CNG", 2)]),
        FeatureField::categorical("Seller_Type", vec![("Dealer", 0), ("Individual", 1)]),
        FeatureField::categorical("Transmission", vec![("Manual", 0), ("Automatic", 1)]),
        FeatureField::integer("Owner"),
        FeatureField::integer("Age"),
    ])
}

/// Form fields for the placement predictor. The numeric codes mirror the
/// label encoding the classifiers were trained against.
pub fn placement_schema() -> FeatureSchema {
    FeatureSchema::new(vec![
        FeatureField::integer("gender"),
        FeatureField::float("ssc_p"),
        FeatureField::integer("ssc_b"),
        FeatureField::float("hsc_p"),
        FeatureField::integer("hsc_b"),
        FeatureField::integer("hsc_s"),
        FeatureField::float("degree_p"),
        FeatureField::integer("degree_t"),
        FeatureField::integer("workex"),
        FeatureField::float("etest_p"),
        FeatureField::integer("specialisation"),
        FeatureField::float("mba_p"),
    ])
}

/// The single car price model.
pub fn car_price_model_specs() -> Vec<ModelSpec> {
    vec![ModelSpec::new(
        "GradientBoostingRegressor",
        "gradient_boosting.json",
    )]
}

/// Placement classifiers with their held-out test accuracies.
pub fn placement_model_specs() -> Vec<ModelSpec> {
    vec![
        ModelSpec::new("LogisticRegression", "logistic_regression.json").with_accuracy(88.37),
        ModelSpec::new("svm", "linear_svm.json").with_accuracy(76.74),
        ModelSpec::new("DecisionTreeClassifier", "decision_tree.json").with_accuracy(83.72),
        ModelSpec::new("KNeighborsClassifier", "k_neighbors.json").with_accuracy(79.07),
        ModelSpec::new("RandomForestClassifier", "random_forest.json").with_accuracy(81.40),
        ModelSpec::new("Gradient Boost", "gradient_boost.json").with_accuracy(81.40),
    ]
}

/// Build the car price application state. The model is loaded eagerly;
/// a missing or unreadable artifact aborts startup.
pub async fn create_car_price_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let specs = car_price_model_specs();
    let registry = FileModelRegistry::discover_in(&config.models.car_price_dir, &specs);

    let Some(entry) = registry.discover().into_iter().next() else {
        bail!(
            "Car price model artifact missing from '{}'",
            config.models.car_price_dir
        );
    };
    registry.load(entry.name()).await?;
    info!(model = entry.name(), "Car price model loaded");

    Ok(AppState::new(
        Arc::new(registry),
        Arc::new(BoundedHistory::new(config.history.capacity)),
        Arc::new(InferenceService::regression()),
        Arc::new(car_price_schema()),
    ))
}

/// Build the placement application state. Models load lazily on first
/// use; an empty registry is tolerated and surfaced on the page.
pub async fn create_placement_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let specs = placement_model_specs();
    let registry = FileModelRegistry::discover_in(&config.models.placement_dir, &specs);

    Ok(AppState::new(
        Arc::new(registry),
        Arc::new(SessionHistory::new()),
        Arc::new(InferenceService::classification("Placed", "Not Placed")),
        Arc::new(placement_schema()),
    ))
}
