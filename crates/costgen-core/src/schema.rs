//! Row schema registry.
//!
//! Each provider exports its billing data with a fixed, ordered set of
//! columns. The tables here are the single source of truth for which keys
//! a generated row carries and in which order writers emit them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown provider '{0}' (expected one of: aws, azure, gcp)")]
pub struct UnknownProvider(pub String);

/// Value kind of a column. Determines the neutral default of a fresh row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Free text, defaults to `""`
    Text,
    /// Whole number, defaults to `0`
    Integer,
    /// Decimal number, defaults to `0.0`
    Float,
}

/// One named column of a provider export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    /// Column name as it appears in the export header
    pub name: &'static str,
    /// Value kind
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Integer,
        }
    }

    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Float,
        }
    }

    /// Whether values of this column are numeric.
    pub fn is_numeric(&self) -> bool {
        !matches!(self.kind, ColumnKind::Text)
    }
}

/// Legacy GCP billing export (BigQuery-less CSV/JSON file export).
pub const GCP_REPORT_COLUMNS: &[Column] = &[
    Column::text("account_id"),
    Column::text("line_item"),
    Column::text("start_time"),
    Column::text("end_time"),
    Column::text("project"),
    Column::text("measurement1"),
    Column::integer("measurement1_total_consumption"),
    Column::text("measurement1_units"),
    Column::text("credit1"),
    Column::integer("credit1_amount"),
    Column::text("credit1_currency"),
    Column::integer("cost"),
    Column::text("currency"),
    Column::text("project_number"),
    Column::text("project_id"),
    Column::text("project_name"),
    Column::text("project_labels"),
    Column::text("description"),
];

/// Subset of the AWS Cost and Usage Report columns.
pub const AWS_REPORT_COLUMNS: &[Column] = &[
    Column::text("identity/LineItemId"),
    Column::text("identity/TimeInterval"),
    Column::text("bill/InvoiceId"),
    Column::text("bill/BillingEntity"),
    Column::text("bill/BillType"),
    Column::text("bill/PayerAccountId"),
    Column::text("bill/BillingPeriodStartDate"),
    Column::text("bill/BillingPeriodEndDate"),
    Column::text("lineItem/UsageAccountId"),
    Column::text("lineItem/LineItemType"),
    Column::text("lineItem/UsageStartDate"),
    Column::text("lineItem/UsageEndDate"),
    Column::text("lineItem/ProductCode"),
    Column::text("lineItem/UsageType"),
    Column::text("lineItem/Operation"),
    Column::text("lineItem/AvailabilityZone"),
    Column::text("lineItem/ResourceId"),
    Column::float("lineItem/UsageAmount"),
    Column::text("lineItem/CurrencyCode"),
    Column::float("lineItem/UnblendedRate"),
    Column::float("lineItem/UnblendedCost"),
    Column::float("lineItem/BlendedRate"),
    Column::float("lineItem/BlendedCost"),
    Column::text("lineItem/LineItemDescription"),
    Column::text("product/ProductName"),
    Column::text("product/instanceType"),
    Column::integer("product/vcpu"),
    Column::text("product/region"),
    Column::text("pricing/unit"),
];

/// Azure usage details export.
pub const AZURE_REPORT_COLUMNS: &[Column] = &[
    Column::text("SubscriptionGuid"),
    Column::text("ResourceGroup"),
    Column::text("ResourceLocation"),
    Column::text("UsageDateTime"),
    Column::text("MeterCategory"),
    Column::text("MeterSubcategory"),
    Column::text("MeterId"),
    Column::text("MeterName"),
    Column::text("MeterRegion"),
    Column::float("UsageQuantity"),
    Column::float("ResourceRate"),
    Column::float("PreTaxCost"),
    Column::text("ConsumedService"),
    Column::text("ResourceType"),
    Column::text("InstanceId"),
    Column::text("Tags"),
    Column::text("OfferId"),
    Column::text("AdditionalInfo"),
    Column::text("ServiceInfo1"),
    Column::text("ServiceInfo2"),
    Column::text("Currency"),
    Column::text("UnitOfMeasure"),
];

/// Cloud provider whose export format a row follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Azure,
    Gcp,
}

impl Provider {
    /// All modeled providers.
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    /// Ordered column table for this provider's export.
    pub fn columns(self) -> &'static [Column] {
        match self {
            Provider::Aws => AWS_REPORT_COLUMNS,
            Provider::Azure => AZURE_REPORT_COLUMNS,
            Provider::Gcp => GCP_REPORT_COLUMNS,
        }
    }

    /// Column names in export order.
    pub fn column_names(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.name).collect()
    }

    /// Look up a column by name.
    pub fn column(self, name: &str) -> Option<&'static Column> {
        self.columns().iter().find(|c| c.name == name)
    }

    /// Lowercase short name.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "azure" => Ok(Provider::Azure),
            "gcp" => Ok(Provider::Gcp),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}
