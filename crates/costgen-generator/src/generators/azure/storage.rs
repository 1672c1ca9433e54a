//! Azure Storage usage.

use super::{fill_region, resource_tags, row_resource_id, AzureSubscription};
use crate::fake::{choose, FakeData};
use crate::generator::ServiceGenerator;
use crate::generators::{round, CURRENCY, MAX_VALUE};
use costgen_core::{Row, ServiceKind};

/// A storage meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterSku {
    pub meter_id: &'static str,
    pub subcategory: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    /// USD per unit
    pub rate: f64,
}

pub const STORAGE_METERS: &[MeterSku] = &[
    MeterSku {
        meter_id: "3f2c1a9e-5b7d-4e61-9c0a-1d2e3f4a5b6c",
        subcategory: "General Block Blob",
        name: "Hot LRS Data Stored",
        unit: "1 GB/Month",
        rate: 0.0184,
    },
    MeterSku {
        meter_id: "8a4d6c2b-0e1f-4a3b-8c5d-7e9f0a1b2c3d",
        subcategory: "General Block Blob",
        name: "Write Operations",
        unit: "10K",
        rate: 0.055,
    },
    MeterSku {
        meter_id: "c9b8a7f6-e5d4-4c3b-a291-807f6e5d4c3b",
        subcategory: "General Block Blob",
        name: "Read Operations",
        unit: "10K",
        rate: 0.0044,
    },
    MeterSku {
        meter_id: "5e6f7a8b-9c0d-4e1f-b2a3-c4d5e6f7a8b9",
        subcategory: "Files",
        name: "LRS Data Stored",
        unit: "1 GB/Month",
        rate: 0.06,
    },
];

/// Storage account rows: one meter per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageGenerator;

impl ServiceGenerator for StorageGenerator {
    type Account = AzureSubscription;
    const KIND: ServiceKind = ServiceKind::AzureStorage;
    const ID_COLUMN: &'static str = "MeterId";

    fn catalog_ids(&self) -> Vec<&'static str> {
        STORAGE_METERS.iter().map(|sku| sku.meter_id).collect()
    }

    fn update_data(&self, mut row: Row, fake: &mut dyn FakeData) -> Row {
        let meter = choose(fake, STORAGE_METERS);
        let quantity = round(fake.float_in(0.0, MAX_VALUE as f64), 4);
        let account_name = format!("{}{}", fake.word(), fake.digits(6));
        let instance_id = row_resource_id(
            &row,
            "Microsoft.Storage/storageAccounts",
            &account_name,
        );

        fill_region(&mut row, fake);
        row.set("MeterCategory", "Storage");
        row.set("MeterSubcategory", meter.subcategory);
        row.set("MeterId", meter.meter_id);
        row.set("MeterName", meter.name);
        row.set("UsageQuantity", quantity);
        row.set("ResourceRate", meter.rate);
        row.set("PreTaxCost", round(quantity * meter.rate, 6));
        row.set("ConsumedService", "Microsoft.Storage");
        row.set("ResourceType", "Microsoft.Storage/storageAccounts");
        row.set("InstanceId", instance_id);
        row.set("Tags", resource_tags());
        row.set("ServiceInfo1", meter.subcategory);
        row.set("Currency", CURRENCY);
        row.set("UnitOfMeasure", meter.unit);
        row
    }
}
