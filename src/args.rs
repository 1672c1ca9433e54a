//! CLI argument definitions shared by the subcommands.

use chrono::NaiveDate;
use clap::Args;
use costgen_core::ServiceKind;
use costgen_upload::UploadTarget;
use costgen_writer::ReportFormat;
use std::path::PathBuf;

/// Where and how generated reports are written.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Directory for generated report files
    #[arg(long, default_value = ".", env = "COSTGEN_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Report file format (csv or jsonl)
    #[arg(long, default_value = "csv", env = "COSTGEN_FORMAT")]
    pub format: ReportFormat,

    /// Upload each written report to this URI (s3://bucket/prefix/, az://container/prefix/, gs://bucket/prefix/)
    #[arg(long, value_name = "URI", env = "COSTGEN_UPLOAD_TO")]
    pub upload_to: Option<UploadTarget>,
}

/// Arguments of `costgen generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Service to generate usage for (ec2, s3, azure_storage, virtual_machine, cloud_storage, compute_engine)
    #[arg(long, env = "COSTGEN_SERVICE")]
    pub service: ServiceKind,

    /// First day of the report (YYYY-MM-DD)
    #[arg(long, env = "COSTGEN_START_DATE")]
    pub start_date: NaiveDate,

    /// Last day of the report, inclusive (YYYY-MM-DD, default: today in UTC)
    #[arg(long, env = "COSTGEN_END_DATE")]
    pub end_date: Option<NaiveDate>,

    /// Rows generated per day
    #[arg(long, default_value = "1", env = "COSTGEN_NUM_INSTANCES")]
    pub num_instances: usize,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "COSTGEN_SEED")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments of `costgen plan`.
#[derive(Args, Clone, Debug)]
pub struct PlanArgs {
    /// Path to the report plan YAML file
    #[arg(long, short = 'f', env = "COSTGEN_PLAN")]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments of `costgen upload`.
#[derive(Args, Clone, Debug)]
pub struct UploadArgs {
    /// Destination URI; a trailing `/` appends the local file name
    pub target: UploadTarget,

    /// Local file to upload
    pub local_path: PathBuf,
}

/// Arguments of `costgen catalog`.
#[derive(Args, Clone, Debug)]
pub struct CatalogArgs {
    /// Only list this service
    #[arg(long, env = "COSTGEN_SERVICE")]
    pub service: Option<ServiceKind>,
}
