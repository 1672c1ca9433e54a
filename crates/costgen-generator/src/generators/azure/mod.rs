//! Azure usage details generators.

mod storage;
mod virtual_machine;

pub use storage::{MeterSku, StorageGenerator, STORAGE_METERS};
pub use virtual_machine::{VirtualMachineGenerator, VmSku, VM_CATALOG};

use crate::fake::{choose, FakeData};
use crate::generator::ProviderAccount;
use chrono::{DateTime, Utc};
use costgen_core::{Provider, Row};
use serde_json::json;

/// Date layout of `UsageDateTime`.
pub const AZURE_DATE_FORMAT: &str = "%Y-%m-%d";

const OFFERS: &[&str] = &["MS-AZR-0003P", "MS-AZR-0017P", "MS-AZR-0148P"];

/// A resource location and the meter region billed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AzureRegion {
    pub location: &'static str,
    pub meter_region: &'static str,
}

pub const AZURE_REGIONS: &[AzureRegion] = &[
    AzureRegion {
        location: "eastus",
        meter_region: "US East",
    },
    AzureRegion {
        location: "westus2",
        meter_region: "US West 2",
    },
    AzureRegion {
        location: "westeurope",
        meter_region: "EU West",
    },
    AzureRegion {
        location: "southeastasia",
        meter_region: "AP Southeast",
    },
];

/// Subscription shared by every row of an Azure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureSubscription {
    pub subscription_guid: String,
    pub resource_group: String,
    pub offer_id: String,
}

/// ARM resource id built from the subscription columns already on `row`.
pub(crate) fn row_resource_id(row: &Row, provider_namespace: &str, name: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/{}/{}",
        row.get_str("SubscriptionGuid").unwrap_or_default(),
        row.get_str("ResourceGroup").unwrap_or_default(),
        provider_namespace,
        name
    )
}

/// `Tags` column value shared by every generated resource.
pub(crate) fn resource_tags() -> String {
    json!({ "environment": "test" }).to_string()
}

pub(crate) fn fill_region(row: &mut Row, fake: &mut dyn FakeData) {
    let region = choose(fake, AZURE_REGIONS);
    row.set("ResourceLocation", region.location);
    row.set("MeterRegion", region.meter_region);
}

impl ProviderAccount for AzureSubscription {
    const PROVIDER: Provider = Provider::Azure;

    fn generate(fake: &mut dyn FakeData) -> Self {
        let subscription_guid = fake.uuid().to_string();
        let resource_group = format!("rg-{}-{}", fake.word(), fake.word());
        let offer_id = choose(fake, OFFERS).to_string();
        Self {
            subscription_guid,
            resource_group,
            offer_id,
        }
    }

    fn stamp_row(&self, row: &mut Row, day_start: DateTime<Utc>, _day_end: DateTime<Utc>) {
        row.set("SubscriptionGuid", self.subscription_guid.as_str());
        row.set("ResourceGroup", self.resource_group.as_str());
        row.set("UsageDateTime", day_start.format(AZURE_DATE_FORMAT).to_string());
        row.set("OfferId", self.offer_id.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::Faker;
    use chrono::NaiveDate;
    use costgen_core::DayInterval;

    #[test]
    fn test_stamp_row() {
        let subscription = AzureSubscription::generate(&mut Faker::seeded(42));
        let day = DayInterval::for_date(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());

        let mut row = Row::skeleton(Provider::Azure);
        subscription.stamp_row(&mut row, day.start, day.end);

        assert!(row.conforms_to(Provider::Azure));
        assert_eq!(row.get_str("UsageDateTime"), Some("2023-06-01"));
        assert!(OFFERS.contains(&subscription.offer_id.as_str()));
        assert!(subscription.resource_group.starts_with("rg-"));
    }

    #[test]
    fn test_resource_id_from_row_matches_subscription() {
        let subscription = AzureSubscription::generate(&mut Faker::seeded(1));
        let day = DayInterval::for_date(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        let mut row = Row::skeleton(Provider::Azure);
        subscription.stamp_row(&mut row, day.start, day.end);

        assert_eq!(
            row_resource_id(&row, "Microsoft.Compute/virtualMachines", "vm-1"),
            format!(
                "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/virtualMachines/vm-1",
                subscription.subscription_guid, subscription.resource_group
            )
        );
    }

    #[test]
    fn test_resource_tags_is_json_object() {
        let tags: serde_json::Value = serde_json::from_str(&resource_tags()).unwrap();
        assert_eq!(tags, serde_json::json!({ "environment": "test" }));
    }
}
