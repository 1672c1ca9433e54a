//! Azure Virtual Machines usage.

use super::{fill_region, resource_tags, row_resource_id, AzureSubscription};
use crate::fake::{choose, FakeData};
use crate::generator::ServiceGenerator;
use crate::generators::{round, CURRENCY, HOURS_PER_DAY};
use costgen_core::{Row, ServiceKind};
use serde_json::json;

/// A Linux VM size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VmSku {
    pub meter_id: &'static str,
    pub subcategory: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    pub vcpus: u32,
    /// USD per hour
    pub hourly_rate: f64,
}

pub const VM_CATALOG: &[VmSku] = &[
    VmSku {
        meter_id: "0a1b2c3d-4e5f-4a6b-9c7d-8e9f0a1b2c3d",
        subcategory: "BS Series",
        name: "B2s",
        size: "Standard_B2s",
        vcpus: 2,
        hourly_rate: 0.0416,
    },
    VmSku {
        meter_id: "1b2c3d4e-5f6a-4b7c-8d9e-0f1a2b3c4d5e",
        subcategory: "DSv3 Series",
        name: "D2s v3",
        size: "Standard_D2s_v3",
        vcpus: 2,
        hourly_rate: 0.096,
    },
    VmSku {
        meter_id: "2c3d4e5f-6a7b-4c8d-9e0f-1a2b3c4d5e6f",
        subcategory: "DSv3 Series",
        name: "D4s v3",
        size: "Standard_D4s_v3",
        vcpus: 4,
        hourly_rate: 0.192,
    },
    VmSku {
        meter_id: "3d4e5f6a-7b8c-4d9e-8f1a-2b3c4d5e6f7a",
        subcategory: "ESv3 Series",
        name: "E8s v3",
        size: "Standard_E8s_v3",
        vcpus: 8,
        hourly_rate: 0.504,
    },
];

/// VM rows: running hours of one VM size within the day.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualMachineGenerator;

impl ServiceGenerator for VirtualMachineGenerator {
    type Account = AzureSubscription;
    const KIND: ServiceKind = ServiceKind::VirtualMachine;
    const ID_COLUMN: &'static str = "MeterId";

    fn catalog_ids(&self) -> Vec<&'static str> {
        VM_CATALOG.iter().map(|sku| sku.meter_id).collect()
    }

    fn update_data(&self, mut row: Row, fake: &mut dyn FakeData) -> Row {
        let vm = choose(fake, VM_CATALOG);
        let hours = round(fake.float_in(0.0, HOURS_PER_DAY), 2);
        let vm_name = format!("vm-{}-{}", fake.word(), fake.digits(3));
        let instance_id = row_resource_id(&row, "Microsoft.Compute/virtualMachines", &vm_name);

        fill_region(&mut row, fake);
        row.set("MeterCategory", "Virtual Machines");
        row.set("MeterSubcategory", vm.subcategory);
        row.set("MeterId", vm.meter_id);
        row.set("MeterName", vm.name);
        row.set("UsageQuantity", hours);
        row.set("ResourceRate", vm.hourly_rate);
        row.set("PreTaxCost", round(hours * vm.hourly_rate, 6));
        row.set("ConsumedService", "Microsoft.Compute");
        row.set("ResourceType", "Microsoft.Compute/virtualMachines");
        row.set("InstanceId", instance_id);
        row.set("Tags", resource_tags());
        row.set("AdditionalInfo", additional_info(vm));
        row.set("ServiceInfo1", vm.size);
        row.set("ServiceInfo2", "Linux");
        row.set("Currency", CURRENCY);
        row.set("UnitOfMeasure", "1 Hour");
        row
    }
}

/// `AdditionalInfo` JSON for a VM size.
fn additional_info(vm: &VmSku) -> String {
    json!({ "ServiceType": vm.size, "VCPUs": vm.vcpus }).to_string()
}
