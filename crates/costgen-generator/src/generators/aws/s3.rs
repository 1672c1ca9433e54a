//! AWS S3 usage.

use super::{fill_usage_line, AwsAccount, AWS_ZONES};
use crate::fake::{choose, FakeData};
use crate::generator::ServiceGenerator;
use crate::generators::{round, MAX_VALUE};
use costgen_core::{Row, ServiceKind};

/// A storage, request or transfer line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct S3Sku {
    pub usage_type: &'static str,
    pub operation: &'static str,
    pub unit: &'static str,
    /// USD per unit
    pub rate: f64,
    pub description: &'static str,
}

pub const S3_CATALOG: &[S3Sku] = &[
    S3Sku {
        usage_type: "TimedStorage-ByteHrs",
        operation: "StandardStorage",
        unit: "GB-Mo",
        rate: 0.023,
        description: "$0.023 per GB - first 50 TB / month of storage used",
    },
    S3Sku {
        usage_type: "Requests-Tier1",
        operation: "PutObject",
        unit: "Requests",
        rate: 0.000005,
        description: "$0.005 per 1,000 PUT, COPY, POST, or LIST requests",
    },
    S3Sku {
        usage_type: "Requests-Tier2",
        operation: "GetObject",
        unit: "Requests",
        rate: 0.0000004,
        description: "$0.0004 per 1,000 GET and all other requests",
    },
    S3Sku {
        usage_type: "DataTransfer-Out-Bytes",
        operation: "GetObject",
        unit: "GB",
        rate: 0.09,
        description: "$0.090 per GB - first 10 TB / month data transfer out",
    },
];

/// S3 rows: one bucket's storage, request or transfer usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct S3Generator;

impl ServiceGenerator for S3Generator {
    type Account = AwsAccount;
    const KIND: ServiceKind = ServiceKind::S3;
    const ID_COLUMN: &'static str = "lineItem/UsageType";

    fn catalog_ids(&self) -> Vec<&'static str> {
        S3_CATALOG.iter().map(|sku| sku.usage_type).collect()
    }

    fn update_data(&self, mut row: Row, fake: &mut dyn FakeData) -> Row {
        let sku = choose(fake, S3_CATALOG);
        let region = choose(fake, AWS_ZONES).region;
        let amount = round(fake.float_in(0.0, MAX_VALUE as f64), 4);
        let cost = round(amount * sku.rate, 6);

        fill_usage_line(&mut row, fake);
        row.set("lineItem/ProductCode", "AmazonS3");
        row.set("lineItem/UsageType", sku.usage_type);
        row.set("lineItem/Operation", sku.operation);
        row.set(
            "lineItem/ResourceId",
            format!("{}-{}-bucket", fake.word(), fake.digits(4)),
        );
        row.set("lineItem/UsageAmount", amount);
        row.set("lineItem/UnblendedRate", sku.rate);
        row.set("lineItem/UnblendedCost", cost);
        row.set("lineItem/BlendedRate", sku.rate);
        row.set("lineItem/BlendedCost", cost);
        row.set("lineItem/LineItemDescription", sku.description);
        row.set("product/ProductName", "Amazon Simple Storage Service");
        row.set("product/region", region);
        row.set("pricing/unit", sku.unit);
        row
    }
}
