//! Command-line interface for costgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # EC2 usage for one day, three instances, written as CSV
//! costgen generate --service ec2 --start-date 2024-01-15 --end-date 2024-01-15 \
//!   --num-instances 3 --output-dir ./reports
//!
//! # Azure VM usage from a start date up to today, uploaded to blob storage
//! AZURE_STORAGE_ACCOUNT=acct AZURE_ACCOUNT_KEY=... \
//! costgen generate --service virtual_machine --start-date 2024-01-01 \
//!   --format jsonl --upload-to az://usage/exports/
//! ```
//!
//! ## Plan
//! ```bash
//! costgen plan --file plan.yaml --output-dir ./reports
//! ```
//!
//! ## Upload
//! ```bash
//! GOOGLE_APPLICATION_CREDENTIALS=key.json \
//! costgen upload gs://billing/exports/ ./reports/gcp-cloud_storage-20230601-20230601.csv
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress logs.

use clap::{Parser, Subcommand};
use costgen::{
    render_catalog, run_generate, run_plan, upload_report, CatalogArgs, GenerateArgs, PlanArgs,
    UploadArgs,
};

#[derive(Parser)]
#[command(name = "costgen")]
#[command(about = "Generate synthetic AWS, Azure and GCP billing reports")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one report for a service and date range
    Generate(GenerateArgs),

    /// Generate every report listed in a YAML report plan
    Plan(PlanArgs),

    /// Upload an existing file
    Upload(UploadArgs),

    /// List the catalog identifiers each service draws from
    Catalog(CatalogArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let path = run_generate(args).await?;
            println!("{}", path.display());
        }
        Commands::Plan(args) => {
            for path in run_plan(args).await? {
                println!("{}", path.display());
            }
        }
        Commands::Upload(args) => {
            upload_report(&args.target, &args.local_path).await?;
        }
        Commands::Catalog(args) => {
            print!("{}", render_catalog(args.service));
        }
    }

    Ok(())
}
