//! AWS Cost and Usage Report generators.

mod ec2;
mod s3;

pub use ec2::{Ec2Generator, InstanceSku, EC2_CATALOG};
pub use s3::{S3Generator, S3Sku, S3_CATALOG};

use crate::fake::FakeData;
use crate::generator::ProviderAccount;
use crate::generators::CURRENCY;
use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc};
use costgen_core::{Provider, Row};

/// Timestamp layout of CUR date columns.
pub const AWS_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// An availability zone and the region it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwsZone {
    pub zone: &'static str,
    pub region: &'static str,
}

pub const AWS_ZONES: &[AwsZone] = &[
    AwsZone {
        zone: "us-east-1a",
        region: "us-east-1",
    },
    AwsZone {
        zone: "us-east-1b",
        region: "us-east-1",
    },
    AwsZone {
        zone: "us-west-2a",
        region: "us-west-2",
    },
    AwsZone {
        zone: "eu-west-1a",
        region: "eu-west-1",
    },
    AwsZone {
        zone: "ap-southeast-2a",
        region: "ap-southeast-2",
    },
];

/// Payer and usage accounts shared by every row of an AWS report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsAccount {
    pub payer_account_id: String,
    pub usage_account_id: String,
    pub invoice_id: String,
}

/// First instant of the billing month containing `instant`, and of the next one.
pub fn billing_period(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = instant.date_naive();
    let first = date - Duration::days(i64::from(date.day0()));
    let next = first + Months::new(1);
    (
        first.and_time(NaiveTime::MIN).and_utc(),
        next.and_time(NaiveTime::MIN).and_utc(),
    )
}

fn format_time(instant: DateTime<Utc>) -> String {
    instant.format(AWS_TIME_FORMAT).to_string()
}

/// Columns every AWS usage line carries regardless of service.
pub(crate) fn fill_usage_line(row: &mut Row, fake: &mut dyn FakeData) {
    row.set("identity/LineItemId", fake.hex(52));
    row.set("lineItem/LineItemType", "Usage");
    row.set("lineItem/CurrencyCode", CURRENCY);
}

impl ProviderAccount for AwsAccount {
    const PROVIDER: Provider = Provider::Aws;

    fn generate(fake: &mut dyn FakeData) -> Self {
        let payer_account_id = fake.digits(12);
        let usage_account_id = fake.digits(12);
        let invoice_id = fake.digits(10);
        Self {
            payer_account_id,
            usage_account_id,
            invoice_id,
        }
    }

    fn stamp_row(&self, row: &mut Row, day_start: DateTime<Utc>, day_end: DateTime<Utc>) {
        let (period_start, period_end) = billing_period(day_start);

        row.set(
            "identity/TimeInterval",
            format!("{}/{}", format_time(day_start), format_time(day_end)),
        );
        row.set("bill/InvoiceId", self.invoice_id.as_str());
        row.set("bill/BillingEntity", "AWS");
        row.set("bill/BillType", "Anniversary");
        row.set("bill/PayerAccountId", self.payer_account_id.as_str());
        row.set("bill/BillingPeriodStartDate", format_time(period_start));
        row.set("bill/BillingPeriodEndDate", format_time(period_end));
        row.set("lineItem/UsageAccountId", self.usage_account_id.as_str());
        row.set("lineItem/UsageStartDate", format_time(day_start));
        row.set("lineItem/UsageEndDate", format_time(day_end));
    }
}
