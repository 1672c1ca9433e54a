//! GCP billing export generators.

mod cloud_storage;
mod compute_engine;

pub use cloud_storage::{CloudStorageGenerator, STORAGE_CATALOG};
pub use compute_engine::{ComputeEngineGenerator, MachineSku, COMPUTE_CATALOG};

use crate::fake::{choose, FakeData};
use crate::generator::ProviderAccount;
use chrono::{DateTime, Utc};
use costgen_core::{Provider, Row};

/// Timestamp layout of `start_time` / `end_time`.
pub const GCP_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

const ENVIRONMENTS: &[&str] = &["dev", "staging", "prod"];

/// One `(line_item, unit, description)` SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcpSku {
    pub line_item: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Billing account and project shared by every row of a GCP report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcpAccount {
    pub account_id: String,
    pub project_id: String,
    pub project_name: String,
    pub project_number: String,
    pub project_labels: String,
}

impl ProviderAccount for GcpAccount {
    const PROVIDER: Provider = Provider::Gcp;

    fn generate(fake: &mut dyn FakeData) -> Self {
        let account_id = format!(
            "{}-{}-{}",
            fake.hex(6).to_uppercase(),
            fake.hex(6).to_uppercase(),
            fake.hex(6).to_uppercase()
        );
        let project_name = format!("{}-{}", fake.word(), fake.word());
        let project_id = format!("{project_name}-{}", fake.digits(6));
        let project_number = fake.digits(12);
        let project_labels = format!("environment:{}", choose(fake, ENVIRONMENTS));

        Self {
            account_id,
            project_id,
            project_name,
            project_number,
            project_labels,
        }
    }

    fn stamp_row(&self, row: &mut Row, day_start: DateTime<Utc>, day_end: DateTime<Utc>) {
        row.set("account_id", self.account_id.as_str());
        row.set("start_time", day_start.format(GCP_TIME_FORMAT).to_string());
        row.set("end_time", day_end.format(GCP_TIME_FORMAT).to_string());
        row.set("project", self.project_id.as_str());
        row.set("project_number", self.project_number.as_str());
        row.set("project_id", self.project_id.as_str());
        row.set("project_name", self.project_name.as_str());
        row.set("project_labels", self.project_labels.as_str());
    }
}
