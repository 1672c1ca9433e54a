use std::time::Duration;

/// Metrics from writing one report file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
