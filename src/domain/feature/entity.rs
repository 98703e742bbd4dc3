//! Feature schema and record types

use serde::Serialize;

/// How a raw form field is coerced into a numeric feature value
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Parsed as floating point
    Float,

    /// Integer-coded value; floats are truncated
    Integer,

    /// Label mapped through a declared label -> code table.
    /// An empty or unknown label falls back to the first declared option.
    Categorical(Vec<(&'static str, i64)>),
}

/// A single declared input field
#[derive(Debug, Clone)]
pub struct FeatureField {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FeatureField {
    pub fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }

    pub fn categorical(name: &'static str, options: Vec<(&'static str, i64)>) -> Self {
        Self {
            name,
            kind: FieldKind::Categorical(options),
        }
    }
}

/// Ordered list of input fields expected by a model.
///
/// The declaration order is the order the model was trained with; records
/// built from this schema carry their values in exactly this order.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    fields: Vec<FeatureField>,
}

impl FeatureSchema {
    pub fn new(fields: Vec<FeatureField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FeatureField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Fixed-order numeric feature vector built fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRecord {
    values: Vec<f64>,

    /// Names of fields whose raw value failed to parse and fell back to
    /// zero (or the first categorical option). Surfaced in logs; the
    /// fallback itself is indistinguishable from a genuine zero in the
    /// trained feature space.
    defaulted: Vec<String>,
}

impl FeatureRecord {
    pub fn new(values: Vec<f64>, defaulted: Vec<String>) -> Self {
        Self { values, defaulted }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn defaulted(&self) -> &[String] {
        &self.defaulted
    }

    pub fn has_defaults(&self) -> bool {
        !self.defaulted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = FeatureSchema::new(vec![
            FeatureField::float("a"),
            FeatureField::integer("b"),
            FeatureField::float("c"),
        ]);

        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_record_tracks_defaulted_fields() {
        let record = FeatureRecord::new(vec![1.0, 0.0], vec!["b".to_string()]);
        assert!(record.has_defaults());
        assert_eq!(record.defaulted(), &["b".to_string()]);
    }
}
