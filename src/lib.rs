//! costgen
//!
//! Generates synthetic cloud billing and usage reports for testing cost
//! management pipelines.
//!
//! # Workspace crates
//!
//! - `costgen_core` - provider report schemas, rows, day bucketing, report plans
//! - `costgen_generator` - the report generator and the per-service value policies
//! - `costgen_writer` - CSV and JSONL report files
//! - `costgen_upload` - S3, Azure Blob Storage and GCS uploads
//!
//! # CLI Usage
//!
//! ```bash
//! # Two GCP Cloud Storage rows per day for the first week of June
//! costgen generate --service cloud_storage \
//!   --start-date 2023-06-01 --end-date 2023-06-07 \
//!   --num-instances 2 --seed 42 --output-dir ./reports
//!
//! # Run a YAML report plan and upload every file
//! costgen plan --file plan.yaml --upload-to s3://cur-bucket/reports/
//!
//! # List catalog identifiers
//! costgen catalog --service ec2
//! ```

pub mod args;
pub mod catalog;
pub mod generate;

pub use args::{CatalogArgs, GenerateArgs, OutputArgs, PlanArgs, UploadArgs};
pub use catalog::render_catalog;
pub use generate::{generate_report, run_generate, run_plan, upload_report};
