//! Report plans loaded from YAML.
//!
//! A plan lists several generator runs so a whole fixture set can be
//! produced in one invocation:
//!
//! ```yaml
//! seed: 42
//! generators:
//!   - service: cloud_storage
//!     start_date: 2023-06-01
//!     end_date: 2023-06-03
//!     num_instances: 2
//!   - service: ec2
//!     start_date: 2023-06-01
//! ```

use crate::days::{DateRange, RangeError};
use crate::service::ServiceKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for plan operations.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Error reading plan file
    #[error("Failed to read plan file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A plan entry has an inverted date range
    #[error("Invalid date range for generator #{index} ({service}): {source}")]
    InvalidRange {
        index: usize,
        service: ServiceKind,
        source: RangeError,
    },

    /// The plan lists no generators
    #[error("Plan does not list any generators")]
    Empty,
}

fn default_num_instances() -> usize {
    1
}

/// One generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Service to generate
    pub service: ServiceKind,

    /// First day of the report
    pub start_date: NaiveDate,

    /// Last day of the report (defaults to `start_date`)
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Rows per day
    #[serde(default = "default_num_instances")]
    pub num_instances: usize,
}

impl PlanEntry {
    /// Checked date range of this entry.
    pub fn date_range(&self) -> Result<DateRange, RangeError> {
        DateRange::new(self.start_date, self.end_date.unwrap_or(self.start_date))
    }
}

/// A set of generator runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPlan {
    /// Base seed; each entry derives its own seed from it
    #[serde(default)]
    pub seed: Option<u64>,

    pub generators: Vec<PlanEntry>,
}

impl ReportPlan {
    /// Parse and validate a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlanError> {
        let plan: ReportPlan = serde_yaml::from_str(yaml)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Load a plan from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check every entry's date range.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.generators.is_empty() {
            return Err(PlanError::Empty);
        }
        for (index, entry) in self.generators.iter().enumerate() {
            entry
                .date_range()
                .map_err(|source| PlanError::InvalidRange {
                    index,
                    service: entry.service,
                    source,
                })?;
        }
        Ok(())
    }

    /// Seed for the entry at `index`, if the plan is seeded.
    ///
    /// Entries get distinct streams so two runs of the same service in one
    /// plan do not produce identical rows.
    pub fn entry_seed(&self, index: usize) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add((index as u64).wrapping_mul(0x9E3779B97F4A7C15)))
    }
}
