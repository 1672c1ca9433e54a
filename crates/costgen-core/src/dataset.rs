//! Generated datasets: rows grouped by day.

use crate::row::Row;
use crate::schema::Provider;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Output of one generator run.
///
/// Maps each day-start timestamp to that day's rows. Days iterate in the
/// order they were inserted (day bucketing order) and rows in generation
/// order, so writers can emit them as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDataset {
    provider: Provider,
    days: IndexMap<DateTime<Utc>, Vec<Row>>,
}

impl GeneratedDataset {
    /// Create an empty dataset for `provider`.
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            days: IndexMap::new(),
        }
    }

    /// Provider whose schema every row follows.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Record the rows for one day. Replaces rows for a repeated day start.
    pub fn insert_day(&mut self, day_start: DateTime<Utc>, rows: Vec<Row>) {
        self.days.insert(day_start, rows);
    }

    /// Rows for the day starting at `day_start`.
    pub fn get(&self, day_start: &DateTime<Utc>) -> Option<&[Row]> {
        self.days.get(day_start).map(Vec::as_slice)
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of rows over all days.
    pub fn row_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Day-start keys in order.
    pub fn day_starts(&self) -> impl Iterator<Item = &DateTime<Utc>> {
        self.days.keys()
    }

    /// `(day_start, rows)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateTime<Utc>, &[Row])> {
        self.days.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Every row, day by day.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.days.values().flatten()
    }
}
