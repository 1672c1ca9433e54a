//! Output formats and report file naming.

use costgen_core::{DateRange, ServiceKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date layout used in report file names.
const FILE_DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format '{0}' (expected csv or jsonl)")]
pub struct UnknownFormat(pub String);

/// On-disk layout of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Jsonl,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "jsonl" | "ndjson" => Ok(ReportFormat::Jsonl),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// File name for a generated report: `<provider>-<service>-<start>-<end>.<ext>`.
///
/// ```
/// use chrono::NaiveDate;
/// use costgen_core::{DateRange, ServiceKind};
/// use costgen_writer::{report_file_name, ReportFormat};
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 3).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(
///     report_file_name(ServiceKind::CloudStorage, range, ReportFormat::Csv),
///     "gcp-cloud_storage-20230601-20230603.csv"
/// );
/// ```
pub fn report_file_name(service: ServiceKind, range: DateRange, format: ReportFormat) -> String {
    format!(
        "{}-{}-{}-{}.{}",
        service.provider(),
        service,
        range.start().format(FILE_DATE_FORMAT),
        range.end().format(FILE_DATE_FORMAT),
        format.extension()
    )
}

/// [`report_file_name`] with a `-<index>` suffix before the extension.
///
/// Used when several reports of one run would otherwise share a name.
pub fn indexed_report_file_name(
    service: ServiceKind,
    range: DateRange,
    format: ReportFormat,
    index: usize,
) -> String {
    format!(
        "{}-{}-{}-{}-{}.{}",
        service.provider(),
        service,
        range.start().format(FILE_DATE_FORMAT),
        range.end().format(FILE_DATE_FORMAT),
        index,
        format.extension()
    )
}
