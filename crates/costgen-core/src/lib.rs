//! Core types for the costgen framework.
//!
//! This crate provides the foundational types shared by the generator,
//! writer and CLI crates:
//!
//! - [`Provider`] and the per-provider column tables ([`schema`])
//! - [`RowValue`] - scalar cell values
//! - [`Row`] - one billing line keyed by schema column
//! - [`DateRange`], [`DayInterval`] and [`create_days_list`] - day bucketing
//! - [`GeneratedDataset`] - rows grouped by day start
//! - [`ServiceKind`] - registry of modeled services
//! - [`ReportPlan`] - YAML description of several generator runs
//!
//! # Architecture
//!
//! ```text
//! costgen-core (this crate)
//!    │
//!    ├─── costgen-generator  (fills rows, builds datasets)
//!    ├─── costgen-writer     (serializes datasets to CSV / JSONL)
//!    └─── costgen            (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use costgen_core::{create_days_list, DateRange};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
//!
//! let range = DateRange::new(start, end).unwrap();
//! assert_eq!(range.num_days(), 3);
//! assert_eq!(create_days_list(start, end).len(), 3);
//! ```

pub mod dataset;
pub mod days;
pub mod plan;
pub mod row;
pub mod schema;
pub mod service;
pub mod values;

// Re-exports for convenience
pub use dataset::GeneratedDataset;
pub use days::{create_days_list, DateRange, DayInterval, RangeError};
pub use plan::{PlanEntry, PlanError, ReportPlan};
pub use row::{Row, SchemaViolation};
pub use schema::{
    Column, ColumnKind, Provider, UnknownProvider, AWS_REPORT_COLUMNS, AZURE_REPORT_COLUMNS,
    GCP_REPORT_COLUMNS,
};
pub use service::{ServiceKind, UnknownService};
pub use values::RowValue;
