//! Server-rendered pages: the prediction forms and the history table

use std::collections::HashMap;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::domain::feature::{FeatureSchema, FieldKind};
use crate::domain::model::ModelEntry;
use crate::domain::prediction::PredictionRecord;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; }\
label { display: block; margin-top: 0.6em; }\
input, select { padding: 0.2em; }\
table { border-collapse: collapse; margin-top: 1em; }\
th, td { border: 1px solid #999; padding: 0.3em 0.6em; text-align: left; }\
.result { margin-top: 1em; font-weight: bold; }\
.error { color: #b00; }";

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (title) }
                (body)
            }
        }
    }
}

/// Inputs rendered from the declared schema: categorical fields become
/// selects, everything else a text input echoing the submitted value.
fn schema_inputs(schema: &FeatureSchema, form: &HashMap<String, String>) -> Markup {
    html! {
        @for field in schema.fields() {
            label for=(field.name) { (field.name) }
            @match &field.kind {
                FieldKind::Categorical(options) => {
                    select id=(field.name) name=(field.name) {
                        @for (label, _) in options {
                            option value=(label)
                                selected[form.get(field.name).map(String::as_str) == Some(*label)] {
                                (label)
                            }
                        }
                    }
                }
                _ => {
                    input type="text" id=(field.name) name=(field.name)
                        value=(form.get(field.name).map(String::as_str).unwrap_or(""));
                }
            }
        }
    }
}

fn history_table(history: &[PredictionRecord], clear_action: &str) -> Markup {
    html! {
        h2 { "Previous predictions" }
        @if history.is_empty() {
            p { "No predictions yet." }
        } @else {
            table {
                tr {
                    th { "Time" }
                    th { "Model" }
                    th { "Prediction" }
                    th { "Confidence" }
                    th { "Inputs" }
                }
                @for record in history {
                    tr {
                        td { (record.display_time()) }
                        td { (record.model_name) }
                        td {
                            @if record.prediction.is_failure() {
                                span.error { (record.prediction) }
                            } @else {
                                (record.prediction)
                            }
                        }
                        td {
                            @if let Some(confidence) = record.confidence {
                                (confidence) "%"
                            } @else {
                                "-"
                            }
                        }
                        td {
                            @for (i, (name, value)) in record.inputs.iter().enumerate() {
                                @if i > 0 { ", " }
                                (name) "=" (value)
                            }
                        }
                    }
                }
            }
            form method="post" action=(clear_action) {
                button type="submit" { "Clear history" }
            }
        }
    }
}

/// Car price form: single model, latest result rendered inline.
pub fn car_price_page(
    model_name: &str,
    form: &HashMap<String, String>,
    latest: Option<&PredictionRecord>,
    history: &[PredictionRecord],
    schema: &FeatureSchema,
) -> Markup {
    layout(
        "Car Price Predictor",
        html! {
            p { "Model: " (model_name) }
            form method="post" action="/" {
                (schema_inputs(schema, form))
                p { button type="submit" { "Predict" } }
            }
            @if let Some(record) = latest {
                @if record.prediction.is_failure() {
                    p.result.error { (record.prediction) }
                } @else {
                    p.result { "Predicted price: " (record.prediction) }
                }
            }
            (history_table(history, "/clear_history"))
        },
    )
}

/// Placement form: model selector with reported accuracies, session
/// history below.
pub fn placement_page(
    models: &[ModelEntry],
    selected: Option<&str>,
    schema: &FeatureSchema,
    history: &[PredictionRecord],
) -> Markup {
    layout(
        "Campus Placement Predictor",
        html! {
            form method="post" action="/predict" {
                label for="model_name" { "Model" }
                select id="model_name" name="model_name" {
                    @for entry in models {
                        option value=(entry.name()) selected[selected == Some(entry.name())] {
                            (entry.name())
                            @if let Some(accuracy) = entry.accuracy() {
                                " (" (accuracy) "%)"
                            }
                        }
                    }
                }
                (schema_inputs(schema, &HashMap::new()))
                p { button type="submit" { "Predict" } }
            }
            form method="post" action="/reset_form" {
                button type="submit" { "Reset form" }
            }
            (history_table(history, "/reset_history"))
        },
    )
}

/// Served instead of the form when discovery found zero models.
pub fn no_models_page() -> Markup {
    layout(
        "Campus Placement Predictor",
        html! {
            h2 { "No models found." }
            p { "Check the configured models directory." }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feature::FeatureField;
    use crate::domain::prediction::Outcome;
    use std::path::PathBuf;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec![
            FeatureField::float("Present_Price"),
            FeatureField::categorical("Fuel_Type", vec![("Petrol", 0), ("Diesel", 1)]),
        ])
    }

    #[test]
    fn test_car_page_renders_fields_and_result() {
        let record = PredictionRecord::new("gb", Outcome::Value(4.75));
        let page = car_price_page("gb", &HashMap::new(), Some(&record), &[], &schema());
        let rendered = page.into_string();

        assert!(rendered.contains("Present_Price"));
        assert!(rendered.contains("Fuel_Type"));
        assert!(rendered.contains("Predicted price: 4.75"));
        assert!(rendered.contains("No predictions yet."));
    }

    #[test]
    fn test_submitted_values_are_echoed() {
        let form: HashMap<String, String> = [
            ("Present_Price".to_string(), "5.5".to_string()),
            ("Fuel_Type".to_string(), "Diesel".to_string()),
        ]
        .into();

        let rendered = car_price_page("gb", &form, None, &[], &schema()).into_string();
        assert!(rendered.contains("value=\"5.5\""));
        assert!(rendered.contains("<option value=\"Diesel\" selected>"));
    }

    #[test]
    fn test_placement_page_shows_accuracies_and_preselects() {
        let models = vec![
            ModelEntry::new("LogisticRegression", PathBuf::from("lr.json"), Some(88.37)),
            ModelEntry::new("svm", PathBuf::from("svm.json"), Some(76.74)),
        ];

        let rendered =
            placement_page(&models, Some("LogisticRegression"), &schema(), &[]).into_string();

        assert!(rendered.contains("88.37"));
        assert!(rendered.contains("<option value=\"LogisticRegression\" selected>"));
    }

    #[test]
    fn test_history_rows_include_inputs_and_confidence() {
        let record = PredictionRecord::new("lr", Outcome::Label("Placed".to_string()))
            .with_confidence(Some(87.65))
            .with_inputs(vec![("gender".to_string(), "1".to_string())]);

        let rendered = placement_page(&[], None, &schema(), &[record]).into_string();
        assert!(rendered.contains("Placed"));
        assert!(rendered.contains("87.65"));
        assert!(rendered.contains("gender=1"));
    }

    #[test]
    fn test_no_models_page() {
        let rendered = no_models_page().into_string();
        assert!(rendered.contains("No models found."));
    }
}
