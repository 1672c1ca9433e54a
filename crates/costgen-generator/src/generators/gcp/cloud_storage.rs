//! GCP Cloud Storage usage.

use super::{GcpAccount, GcpSku};
use crate::fake::{choose, FakeData};
use crate::generator::ServiceGenerator;
use crate::generators::{CURRENCY, MAX_VALUE};
use costgen_core::{Row, ServiceKind};

pub const STORAGE_CATALOG: &[GcpSku] = &[
    GcpSku {
        line_item: "com.google.cloud/services/cloud-storage/StorageRegionalUsGbsec",
        unit: "byte-seconds",
        description: "Regional Storage US",
    },
    GcpSku {
        line_item: "com.google.cloud/services/cloud-storage/ClassARequestRegional",
        unit: "byte-seconds",
        description: "Class A Request Regional Storage",
    },
    GcpSku {
        line_item: "com.google.cloud/services/cloud-storage/ClassBRequestRegional",
        unit: "byte-seconds",
        description: "Class B Request Regional Storage",
    },
    GcpSku {
        line_item: "com.google.cloud/services/cloud-storage/BandwidthDownloadAmerica",
        unit: "bytes",
        description: "Download Worldwide Destinations (excluding Asia & Australia)",
    },
];

/// Cloud Storage rows: one storage SKU per row, integer consumption and cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudStorageGenerator;

impl ServiceGenerator for CloudStorageGenerator {
    type Account = GcpAccount;
    const KIND: ServiceKind = ServiceKind::CloudStorage;
    const ID_COLUMN: &'static str = "line_item";

    fn catalog_ids(&self) -> Vec<&'static str> {
        STORAGE_CATALOG.iter().map(|sku| sku.line_item).collect()
    }

    fn update_data(&self, mut row: Row, fake: &mut dyn FakeData) -> Row {
        let sku = choose(fake, STORAGE_CATALOG);
        row.set("line_item", sku.line_item);
        row.set("measurement1", sku.line_item);
        row.set("measurement1_total_consumption", fake.int_in(0, MAX_VALUE));
        row.set("measurement1_units", sku.unit);
        row.set("cost", fake.int_in(0, MAX_VALUE));
        row.set("currency", CURRENCY);
        row.set("description", sku.description);
        row
    }
}
