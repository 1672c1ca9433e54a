//! CSV report writer.

use crate::error::WriterError;
use crate::metrics::WriteMetrics;
use crate::ReportWriter;
use costgen_core::{GeneratedDataset, Provider, Row};
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Writes a dataset as CSV with the provider's columns in schema order.
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    provider: Provider,
    include_header: bool,
}

impl CsvReportWriter {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Write `dataset` to `output_path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(
        &self,
        dataset: &GeneratedDataset,
        output_path: P,
    ) -> Result<WriteMetrics, WriterError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing CSV report '{}' with {} rows over {} days",
            output_path.display(),
            dataset.row_count(),
            dataset.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_to(dataset, buf_writer)?;

        let metrics = WriteMetrics {
            rows_written,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };
        info!(
            "CSV report complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    /// Write `dataset` into any sink. Returns the number of data rows.
    pub fn write_to<W: Write>(
        &self,
        dataset: &GeneratedDataset,
        sink: W,
    ) -> Result<u64, WriterError> {
        if dataset.provider() != self.provider {
            return Err(WriterError::ProviderMismatch {
                expected: self.provider,
                actual: dataset.provider(),
            });
        }

        let mut writer = Writer::from_writer(sink);
        if self.include_header {
            writer.write_record(self.provider.column_names())?;
        }

        let mut rows_written = 0u64;
        for (day_start, rows) in dataset.iter() {
            for row in rows {
                writer.write_record(row_to_csv_record(row, self.provider))?;
                rows_written += 1;
            }
            debug!("Wrote {} rows for {}", rows.len(), day_start);
        }

        writer.flush()?;
        Ok(rows_written)
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(
        &self,
        dataset: &GeneratedDataset,
        output_path: &Path,
    ) -> Result<WriteMetrics, WriterError> {
        self.write(dataset, output_path)
    }
}

/// Convert a row to a CSV record following the provider's column order.
fn row_to_csv_record(row: &Row, provider: Provider) -> Vec<String> {
    provider
        .columns()
        .iter()
        .map(|column| row.get(column.name).map(|v| v.to_field()).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use costgen_core::{DateRange, ServiceKind};
    use costgen_generator::{build_generator, Faker};
    use tempfile::TempDir;

    fn dataset(kind: ServiceKind, days: u32, instances: usize) -> GeneratedDataset {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let end = start + chrono::Days::new(u64::from(days) - 1);
        let range = DateRange::new(start, end).unwrap();
        build_generator(kind, range, instances, Faker::seeded(42)).generate_data()
    }

    #[test]
    fn test_header_follows_schema_order() {
        let data = dataset(ServiceKind::CloudStorage, 1, 2);
        let mut out = Vec::new();
        CsvReportWriter::new(Provider::Gcp)
            .write_to(&data, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, Provider::Gcp.column_names().join(","));
    }

    #[test]
    fn test_line_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");
        let data = dataset(ServiceKind::Ec2, 3, 4);

        let metrics = CsvReportWriter::new(Provider::Aws)
            .write(&data, &path)
            .unwrap();

        assert_eq!(metrics.rows_written, 12);
        assert!(metrics.file_size_bytes > 0);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), Provider::Aws.columns().len());
        assert_eq!(reader.records().count(), 12);
    }

    #[test]
    fn test_without_header() {
        let data = dataset(ServiceKind::AzureStorage, 2, 1);
        let mut out = Vec::new();
        let rows = CsvReportWriter::new(Provider::Azure)
            .with_header(false)
            .write_to(&data, &mut out)
            .unwrap();

        assert_eq!(rows, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.starts_with("SubscriptionGuid"));
    }

    #[test]
    fn test_rows_keep_day_order() {
        let data = dataset(ServiceKind::CloudStorage, 3, 1);
        let mut out = Vec::new();
        CsvReportWriter::new(Provider::Gcp)
            .write_to(&data, &mut out)
            .unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let start_idx = Provider::Gcp
            .column_names()
            .iter()
            .position(|c| *c == "start_time")
            .unwrap();
        let starts: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[start_idx].to_string())
            .collect();
        assert!(starts[0].starts_with("2023-06-01"));
        assert!(starts[1].starts_with("2023-06-02"));
        assert!(starts[2].starts_with("2023-06-03"));
    }

    #[test]
    fn test_provider_mismatch() {
        let data = dataset(ServiceKind::S3, 1, 1);
        let err = CsvReportWriter::new(Provider::Gcp)
            .write_to(&data, Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            WriterError::ProviderMismatch {
                expected: Provider::Gcp,
                actual: Provider::Aws
            }
        ));
    }
}
