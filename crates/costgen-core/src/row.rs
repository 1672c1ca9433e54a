//! Generated billing rows.

use crate::schema::{ColumnKind, Provider};
use crate::values::RowValue;
use indexmap::IndexMap;
use serde::Serialize;

/// A row whose key set differs from its provider's schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Row does not match the {provider} schema (missing: {missing:?}, unexpected: {unexpected:?})")]
pub struct SchemaViolation {
    pub provider: Provider,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

/// One billing line: column name to value, in insertion order.
///
/// Rows are created from a provider schema via [`Row::skeleton`], which
/// guarantees every column is present. [`Row::set`] does not restrict keys,
/// so callers that fill rows are checked with [`Row::check_schema`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    values: IndexMap<String, RowValue>,
}

impl Row {
    /// A row holding every column of `provider` at its neutral default.
    pub fn skeleton(provider: Provider) -> Self {
        let values = provider
            .columns()
            .iter()
            .map(|column| {
                let value = match column.kind {
                    ColumnKind::Text => RowValue::String(String::new()),
                    ColumnKind::Integer => RowValue::Integer(0),
                    ColumnKind::Float => RowValue::Float(0.0),
                };
                (column.name.to_string(), value)
            })
            .collect();
        Self { values }
    }

    /// Get a value by column name.
    pub fn get(&self, column: &str) -> Option<&RowValue> {
        self.values.get(column)
    }

    /// Get a string value by column name.
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(RowValue::as_str)
    }

    /// Get a numeric value by column name.
    pub fn get_f64(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(RowValue::as_f64)
    }

    /// Set a column, returning the previous value if there was one.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<RowValue>) -> Option<RowValue> {
        self.values.insert(column.into(), value.into())
    }

    /// Remove a column, keeping the order of the remaining ones.
    pub fn remove(&mut self, column: &str) -> Option<RowValue> {
        self.values.shift_remove(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Column names in row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// `(column, value)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Compare the key set against `provider`'s schema.
    pub fn check_schema(&self, provider: Provider) -> Result<(), SchemaViolation> {
        let columns = provider.columns();

        let missing: Vec<String> = columns
            .iter()
            .filter(|c| !self.values.contains_key(c.name))
            .map(|c| c.name.to_string())
            .collect();

        let unexpected: Vec<String> = self
            .values
            .keys()
            .filter(|k| provider.column(k).is_none())
            .cloned()
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolation {
                provider,
                missing,
                unexpected,
            })
        }
    }

    /// Whether the key set equals `provider`'s schema.
    pub fn conforms_to(&self, provider: Provider) -> bool {
        self.check_schema(provider).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_conforms_for_every_provider() {
        for provider in Provider::ALL {
            let row = Row::skeleton(provider);
            assert_eq!(row.len(), provider.columns().len());
            assert!(row.conforms_to(provider));
            assert_eq!(row.keys().collect::<Vec<_>>(), provider.column_names());
        }
    }

    #[test]
    fn test_skeleton_neutral_defaults() {
        let row = Row::skeleton(Provider::Gcp);
        assert_eq!(row.get_str("line_item"), Some(""));
        assert_eq!(row.get("cost"), Some(&RowValue::Integer(0)));

        let row = Row::skeleton(Provider::Aws);
        assert_eq!(row.get("lineItem/UnblendedCost"), Some(&RowValue::Float(0.0)));
    }

    #[test]
    fn test_set_existing_column_keeps_shape() {
        let mut row = Row::skeleton(Provider::Gcp);
        let previous = row.set("currency", "USD");

        assert_eq!(previous, Some(RowValue::String(String::new())));
        assert_eq!(row.get_str("currency"), Some("USD"));
        assert!(row.conforms_to(Provider::Gcp));
    }

    #[test]
    fn test_extra_column_is_reported() {
        let mut row = Row::skeleton(Provider::Gcp);
        row.set("sku", "x");

        let violation = row.check_schema(Provider::Gcp).unwrap_err();
        assert!(violation.missing.is_empty());
        assert_eq!(violation.unexpected, vec!["sku".to_string()]);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut row = Row::skeleton(Provider::Azure);
        row.remove("PreTaxCost");

        let violation = row.check_schema(Provider::Azure).unwrap_err();
        assert_eq!(violation.missing, vec!["PreTaxCost".to_string()]);
        assert!(violation.unexpected.is_empty());
    }

    #[test]
    fn test_wrong_provider_does_not_conform() {
        let row = Row::skeleton(Provider::Aws);
        assert!(!row.conforms_to(Provider::Gcp));
    }

    #[test]
    fn test_serializes_in_schema_order() {
        let mut row = Row::skeleton(Provider::Gcp);
        row.set("account_id", "01A2B3-C4D5E6-F7A8B9");
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.starts_with(r#"{"account_id":"01A2B3-C4D5E6-F7A8B9","line_item":"""#));
    }
}
