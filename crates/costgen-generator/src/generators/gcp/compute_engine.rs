//! GCP Compute Engine usage.

use super::GcpAccount;
use crate::fake::{choose, FakeData};
use crate::generator::ServiceGenerator;
use crate::generators::{CURRENCY, MAX_VALUE, SECONDS_PER_DAY};
use costgen_core::{Row, ServiceKind};

/// A machine type running in one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineSku {
    pub line_item: &'static str,
    pub machine_type: &'static str,
    pub region: &'static str,
    pub vcpus: u32,
    pub description: &'static str,
}

pub const COMPUTE_CATALOG: &[MachineSku] = &[
    MachineSku {
        line_item: "com.google.cloud/services/compute-engine/VmimageN1Standard_1",
        machine_type: "n1-standard-1",
        region: "us-central1",
        vcpus: 1,
        description: "N1 Predefined Instance Core running in Americas",
    },
    MachineSku {
        line_item: "com.google.cloud/services/compute-engine/VmimageN1Standard_4",
        machine_type: "n1-standard-4",
        region: "us-east1",
        vcpus: 4,
        description: "N1 Predefined Instance Core running in Americas",
    },
    MachineSku {
        line_item: "com.google.cloud/services/compute-engine/VmimageE2Standard_2",
        machine_type: "e2-standard-2",
        region: "europe-west1",
        vcpus: 2,
        description: "E2 Instance Core running in EMEA",
    },
    MachineSku {
        line_item: "com.google.cloud/services/compute-engine/VmimageN2Standard_8",
        machine_type: "n2-standard-8",
        region: "asia-east1",
        vcpus: 8,
        description: "N2 Instance Core running in APAC",
    },
];

/// Compute Engine rows: running seconds of one machine type within the day.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeEngineGenerator;

impl ServiceGenerator for ComputeEngineGenerator {
    type Account = GcpAccount;
    const KIND: ServiceKind = ServiceKind::ComputeEngine;
    const ID_COLUMN: &'static str = "line_item";

    fn catalog_ids(&self) -> Vec<&'static str> {
        COMPUTE_CATALOG.iter().map(|sku| sku.line_item).collect()
    }

    fn update_data(&self, mut row: Row, fake: &mut dyn FakeData) -> Row {
        let sku = choose(fake, COMPUTE_CATALOG);
        row.set("line_item", sku.line_item);
        row.set("measurement1", sku.line_item);
        row.set("measurement1_total_consumption", fake.int_in(0, SECONDS_PER_DAY));
        row.set("measurement1_units", "seconds");
        row.set("cost", fake.int_in(0, MAX_VALUE));
        row.set("currency", CURRENCY);
        row.set(
            "description",
            format!(
                "{} ({}, {} vCPU, {})",
                sku.description, sku.machine_type, sku.vcpus, sku.region
            ),
        );
        row
    }
}
