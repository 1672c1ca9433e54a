//! Synthetic billing data generators for costgen.
//!
//! This crate provides [`ReportGenerator`], which turns a date range and an
//! instance count into a [`GeneratedDataset`](costgen_core::GeneratedDataset)
//! of provider-schema rows. The day/row iteration is fixed; each service
//! only supplies its value policy through [`ServiceGenerator`].
//!
//! # Architecture
//!
//! ```text
//! DateRange, num_instances, FakeData
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │  ReportGenerator<S, F>   │
//! │                          │
//! │  - create_days_list      │
//! │  - init_data_row         │  ◄── ProviderAccount (AWS / Azure / GCP)
//! │  - S::update_data        │  ◄── ServiceGenerator (catalog + bounds)
//! └────────────┬─────────────┘
//!              │
//!              ▼
//!    GeneratedDataset { day_start -> [Row] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use costgen_generator::generators::gcp::CloudStorageGenerator;
//! use costgen_generator::{Faker, ReportGenerator};
//!
//! let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
//! let mut generator =
//!     ReportGenerator::from_dates(day, day, 2, CloudStorageGenerator, Faker::seeded(42)).unwrap();
//!
//! let dataset = generator.generate_data();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.row_count(), 2);
//! ```
//!
//! # Services
//!
//! - `ec2`, `s3` - AWS Cost and Usage Report
//! - `azure_storage`, `virtual_machine` - Azure usage details
//! - `cloud_storage`, `compute_engine` - GCP billing export

pub mod fake;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use fake::{EdgeFake, FakeData, Faker};
pub use generator::{
    DatasetGenerator, GeneratorError, ProviderAccount, ReportGenerator, ServiceGenerator,
};
pub use generators::{build_generator, catalog};
