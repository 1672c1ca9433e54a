//! AWS EC2 usage.

use super::{fill_usage_line, AwsAccount, AWS_ZONES};
use crate::fake::{choose, FakeData};
use crate::generator::ServiceGenerator;
use crate::generators::{round, HOURS_PER_DAY};
use costgen_core::{Row, ServiceKind};

/// An on-demand Linux instance type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceSku {
    pub usage_type: &'static str,
    pub instance_type: &'static str,
    pub vcpus: u32,
    /// USD per instance hour
    pub hourly_rate: f64,
}

pub const EC2_CATALOG: &[InstanceSku] = &[
    InstanceSku {
        usage_type: "BoxUsage:t3.medium",
        instance_type: "t3.medium",
        vcpus: 2,
        hourly_rate: 0.0416,
    },
    InstanceSku {
        usage_type: "BoxUsage:m5.large",
        instance_type: "m5.large",
        vcpus: 2,
        hourly_rate: 0.096,
    },
    InstanceSku {
        usage_type: "BoxUsage:c5.xlarge",
        instance_type: "c5.xlarge",
        vcpus: 4,
        hourly_rate: 0.17,
    },
    InstanceSku {
        usage_type: "BoxUsage:r5.2xlarge",
        instance_type: "r5.2xlarge",
        vcpus: 8,
        hourly_rate: 0.504,
    },
];

/// EC2 rows: instance hours of one instance type within the day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ec2Generator;

impl ServiceGenerator for Ec2Generator {
    type Account = AwsAccount;
    const KIND: ServiceKind = ServiceKind::Ec2;
    const ID_COLUMN: &'static str = "lineItem/UsageType";

    fn catalog_ids(&self) -> Vec<&'static str> {
        EC2_CATALOG.iter().map(|sku| sku.usage_type).collect()
    }

    fn update_data(&self, mut row: Row, fake: &mut dyn FakeData) -> Row {
        let sku = choose(fake, EC2_CATALOG);
        let zone = choose(fake, AWS_ZONES);
        let hours = round(fake.float_in(0.0, HOURS_PER_DAY), 2);
        let cost = round(hours * sku.hourly_rate, 6);

        fill_usage_line(&mut row, fake);
        row.set("lineItem/ProductCode", "AmazonEC2");
        row.set("lineItem/UsageType", sku.usage_type);
        row.set("lineItem/Operation", "RunInstances");
        row.set("lineItem/AvailabilityZone", zone.zone);
        row.set("lineItem/ResourceId", format!("i-{}", fake.hex(17)));
        row.set("lineItem/UsageAmount", hours);
        row.set("lineItem/UnblendedRate", sku.hourly_rate);
        row.set("lineItem/UnblendedCost", cost);
        row.set("lineItem/BlendedRate", sku.hourly_rate);
        row.set("lineItem/BlendedCost", cost);
        row.set(
            "lineItem/LineItemDescription",
            format!(
                "${} per On Demand Linux {} Instance Hour",
                sku.hourly_rate, sku.instance_type
            ),
        );
        row.set("product/ProductName", "Amazon Elastic Compute Cloud");
        row.set("product/instanceType", sku.instance_type);
        row.set("product/vcpu", sku.vcpus);
        row.set("product/region", zone.region);
        row.set("pricing/unit", "Hrs");
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{EdgeFake, Faker};
    use costgen_core::Provider;

    #[test]
    fn test_cost_is_rate_times_hours() {
        let mut fake = Faker::seeded(42);
        for _ in 0..50 {
            let row = Ec2Generator.update_data(Row::skeleton(Provider::Aws), &mut fake);

            let hours = row.get_f64("lineItem/UsageAmount").unwrap();
            let rate = row.get_f64("lineItem/UnblendedRate").unwrap();
            let cost = row.get_f64("lineItem/UnblendedCost").unwrap();

            assert!((0.0..=HOURS_PER_DAY).contains(&hours));
            assert!((cost - hours * rate).abs() < 1e-6);
            assert_eq!(row.get_f64("lineItem/BlendedCost"), Some(cost));
        }
    }

    #[test]
    fn test_instance_fields_match_sku() {
        let row = Ec2Generator.update_data(Row::skeleton(Provider::Aws), &mut EdgeFake::high());
        let sku = EC2_CATALOG[EC2_CATALOG.len() - 1];

        assert_eq!(row.get_str("lineItem/UsageType"), Some(sku.usage_type));
        assert_eq!(row.get_str("product/instanceType"), Some(sku.instance_type));
        assert_eq!(row.get("product/vcpu").and_then(|v| v.as_i64()), Some(8));
        assert_eq!(row.get_f64("lineItem/UsageAmount"), Some(HOURS_PER_DAY));
        assert_eq!(row.get_str("lineItem/ResourceId"), Some("i-fffffffffffffffff"));
        assert_eq!(row.get_str("product/region"), Some("ap-southeast-2"));
        assert!(row.conforms_to(Provider::Aws));
    }
}
