//! JSON Lines report writer.

use crate::error::WriterError;
use crate::metrics::WriteMetrics;
use crate::ReportWriter;
use costgen_core::{GeneratedDataset, Provider};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Writes one JSON object per row. Keys follow the provider's schema order
/// and numeric columns stay JSON numbers.
#[derive(Debug, Clone)]
pub struct JsonlReportWriter {
    provider: Provider,
}

impl JsonlReportWriter {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    pub fn write<P: AsRef<Path>>(
        &self,
        dataset: &GeneratedDataset,
        output_path: P,
    ) -> Result<WriteMetrics, WriterError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing JSONL report '{}' with {} rows",
            output_path.display(),
            dataset.row_count()
        );

        let file = File::create(output_path)?;
        let rows_written = self.write_to(dataset, BufWriter::new(file))?;

        let metrics = WriteMetrics {
            rows_written,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };
        info!(
            "JSONL report complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    pub fn write_to<W: Write>(
        &self,
        dataset: &GeneratedDataset,
        mut sink: W,
    ) -> Result<u64, WriterError> {
        if dataset.provider() != self.provider {
            return Err(WriterError::ProviderMismatch {
                expected: self.provider,
                actual: dataset.provider(),
            });
        }

        let mut rows_written = 0u64;
        for row in dataset.rows() {
            serde_json::to_writer(&mut sink, row)?;
            sink.write_all(b"\n")?;
            rows_written += 1;
        }
        sink.flush()?;
        Ok(rows_written)
    }
}

impl ReportWriter for JsonlReportWriter {
    fn write_report(
        &self,
        dataset: &GeneratedDataset,
        output_path: &Path,
    ) -> Result<WriteMetrics, WriterError> {
        self.write(dataset, output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use costgen_core::{DateRange, ServiceKind};
    use costgen_generator::{build_generator, Faker};
    use tempfile::TempDir;

    #[test]
    fn test_one_object_per_row() {
        let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let data = build_generator(
            ServiceKind::CloudStorage,
            DateRange::single_day(day),
            2,
            Faker::seeded(42),
        )
        .generate_data();

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.jsonl");
        let metrics = JsonlReportWriter::new(Provider::Gcp)
            .write(&data, &path)
            .unwrap();
        assert_eq!(metrics.rows_written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            let object = value.as_object().unwrap();
            assert_eq!(object.len(), Provider::Gcp.columns().len());
            assert_eq!(object["currency"], "USD");
            assert!(object["cost"].is_i64());
        }
    }

    #[test]
    fn test_keys_in_schema_order() {
        let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let data = build_generator(
            ServiceKind::VirtualMachine,
            DateRange::single_day(day),
            1,
            Faker::seeded(7),
        )
        .generate_data();

        let mut out = Vec::new();
        JsonlReportWriter::new(Provider::Azure)
            .write_to(&data, &mut out)
            .unwrap();
        let line = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = Provider::Azure
            .column_names()
            .iter()
            .map(|name| line.find(&format!("\"{name}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
