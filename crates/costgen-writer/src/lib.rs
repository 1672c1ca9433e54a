//! Report writers for costgen datasets.
//!
//! Datasets are written exactly in iteration order: days in bucketing order,
//! rows in generation order.
//!
//! # Example
//!
//! ```ignore
//! use costgen_writer::{report_file_name, writer_for, ReportFormat};
//!
//! let writer = writer_for(ReportFormat::Csv, dataset.provider());
//! let path = output_dir.join(report_file_name(kind, range, ReportFormat::Csv));
//! let metrics = writer.write_report(&dataset, &path)?;
//! ```

mod csv_report;
mod error;
mod format;
mod jsonl_report;
mod metrics;

pub use csv_report::{CsvReportWriter, DEFAULT_BUFFER_SIZE};
pub use error::WriterError;
pub use format::{indexed_report_file_name, report_file_name, ReportFormat, UnknownFormat};
pub use jsonl_report::JsonlReportWriter;
pub use metrics::WriteMetrics;

use costgen_core::{GeneratedDataset, Provider};
use std::path::Path;

/// Common interface over the output formats.
pub trait ReportWriter {
    fn write_report(
        &self,
        dataset: &GeneratedDataset,
        output_path: &Path,
    ) -> Result<WriteMetrics, WriterError>;
}

/// Writer for `format` bound to `provider`'s schema.
pub fn writer_for(format: ReportFormat, provider: Provider) -> Box<dyn ReportWriter> {
    match format {
        ReportFormat::Csv => Box::new(CsvReportWriter::new(provider)),
        ReportFormat::Jsonl => Box::new(JsonlReportWriter::new(provider)),
    }
}
