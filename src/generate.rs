//! Generate and plan command handlers.

use crate::args::{GenerateArgs, OutputArgs, PlanArgs};
use anyhow::Context;
use chrono::Utc;
use costgen_core::{DateRange, ReportPlan, ServiceKind};
use costgen_generator::{build_generator, Faker};
use costgen_upload::UploadTarget;
use costgen_writer::{indexed_report_file_name, report_file_name, writer_for};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Generate one report and write it under `output.output_dir`.
///
/// Returns the path of the written file.
pub fn generate_report(
    service: ServiceKind,
    range: DateRange,
    num_instances: usize,
    seed: Option<u64>,
    output: &OutputArgs,
) -> anyhow::Result<PathBuf> {
    let file_name = report_file_name(service, range, output.format);
    generate_report_as(service, range, num_instances, seed, output, &file_name)
}

/// [`generate_report`] writing to `file_name` under the output directory.
fn generate_report_as(
    service: ServiceKind,
    range: DateRange,
    num_instances: usize,
    seed: Option<u64>,
    output: &OutputArgs,
    file_name: &str,
) -> anyhow::Result<PathBuf> {
    info!(
        "Generating {} report for {} to {} with {} instances per day",
        service,
        range.start(),
        range.end(),
        num_instances
    );

    let mut generator = build_generator(service, range, num_instances, Faker::new(seed));
    let dataset = generator.generate_data();

    std::fs::create_dir_all(&output.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output.output_dir.display()
        )
    })?;
    let path = output.output_dir.join(file_name);

    let metrics = writer_for(output.format, service.provider())
        .write_report(&dataset, &path)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    info!(
        "Wrote {} ({} rows, {} bytes)",
        path.display(),
        metrics.rows_written,
        metrics.file_size_bytes
    );

    Ok(path)
}

/// Upload `path` to `target`, turning a failed upload into an error.
pub async fn upload_report(target: &UploadTarget, path: &Path) -> anyhow::Result<()> {
    if target.upload(path).await {
        Ok(())
    } else {
        anyhow::bail!("Upload of {} to {} failed", path.display(), target)
    }
}

/// Run the generate command.
pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<PathBuf> {
    let end_date = args.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let range = DateRange::new(args.start_date, end_date).context("Invalid report date range")?;

    let path = generate_report(
        args.service,
        range,
        args.num_instances,
        args.seed,
        &args.output,
    )?;
    if let Some(target) = &args.output.upload_to {
        upload_report(target, &path).await?;
    }
    Ok(path)
}

/// Run the plan command: one report per plan entry, in plan order.
///
/// Entries that would share a file name get their plan index appended, so
/// every entry keeps its own file. Uploading more than one report needs a
/// directory prefix for the same reason.
pub async fn run_plan(args: PlanArgs) -> anyhow::Result<Vec<PathBuf>> {
    let plan = ReportPlan::from_file(&args.file)
        .with_context(|| format!("Failed to load report plan from {:?}", args.file))?;
    info!(
        "Running report plan {:?} with {} generators",
        args.file,
        plan.generators.len()
    );

    if let Some(target) = &args.output.upload_to {
        if plan.generators.len() > 1 && !target.is_directory() {
            anyhow::bail!(
                "Upload target {} names a single object; a plan with {} reports needs a prefix ending in '/'",
                target,
                plan.generators.len()
            );
        }
    }

    let ranges = plan
        .generators
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .date_range()
                .with_context(|| format!("Invalid date range in plan entry {index}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let format = args.output.format;
    let mut name_counts: HashMap<String, usize> = HashMap::new();
    for (entry, range) in plan.generators.iter().zip(&ranges) {
        *name_counts
            .entry(report_file_name(entry.service, *range, format))
            .or_default() += 1;
    }

    let mut paths = Vec::with_capacity(plan.generators.len());
    for (index, (entry, range)) in plan.generators.iter().zip(ranges).enumerate() {
        let base_name = report_file_name(entry.service, range, format);
        let file_name = if name_counts[&base_name] > 1 {
            indexed_report_file_name(entry.service, range, format, index)
        } else {
            base_name
        };

        let path = generate_report_as(
            entry.service,
            range,
            entry.num_instances,
            plan.entry_seed(index),
            &args.output,
            &file_name,
        )?;
        if let Some(target) = &args.output.upload_to {
            upload_report(target, &path).await?;
        }
        paths.push(path);
    }
    Ok(paths)
}
