//! Form adapter - converts raw string form fields into a `FeatureRecord`
//!
//! Each field is coerced independently in exact schema order. A value that
//! fails to parse falls back to zero (or the first categorical option) and
//! is flagged on the record rather than rejecting the request: malformed
//! input degrades prediction quality instead of breaking the form flow.

use std::collections::HashMap;

use tracing::warn;

use super::entity::{FeatureRecord, FeatureSchema, FieldKind};

/// Build a `FeatureRecord` from raw form fields.
///
/// Never fails; missing fields are treated the same as unparsable ones.
pub fn adapt_form(schema: &FeatureSchema, form: &HashMap<String, String>) -> FeatureRecord {
    let mut values = Vec::with_capacity(schema.len());
    let mut defaulted = Vec::new();

    for field in schema.fields() {
        let raw = form.get(field.name).map(|v| v.trim()).unwrap_or("");

        let value = match &field.kind {
            FieldKind::Float => match raw.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    defaulted.push(field.name.to_string());
                    0.0
                }
            },
            // Integer-coded fields accept float text and truncate it
            FieldKind::Integer => match raw.parse::<f64>() {
                Ok(v) => v.trunc(),
                Err(_) => {
                    defaulted.push(field.name.to_string());
                    0.0
                }
            },
            FieldKind::Categorical(options) => {
                let fallback = options.first().map(|(_, code)| *code).unwrap_or(0);

                if raw.is_empty() {
                    fallback as f64
                } else {
                    match options.iter().find(|(label, _)| *label == raw) {
                        Some((_, code)) => *code as f64,
                        None => {
                            defaulted.push(field.name.to_string());
                            fallback as f64
                        }
                    }
                }
            }
        };

        values.push(value);
    }

    if !defaulted.is_empty() {
        warn!(fields = ?defaulted, "Form fields failed to parse, defaulted to zero");
    }

    FeatureRecord::new(values, defaulted)
}

/// Verbatim ordered snapshot of the raw submitted values, one entry per
/// declared field. No coercion; missing fields become empty strings.
pub fn snapshot_form(
    schema: &FeatureSchema,
    form: &HashMap<String, String>,
) -> Vec<(String, String)> {
    schema
        .field_names()
        .map(|name| (name.to_string(), form.get(name).cloned().unwrap_or_default()))
        .collect()
}
