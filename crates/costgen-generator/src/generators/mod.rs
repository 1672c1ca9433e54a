//! Service generators, one module per provider.
//!
//! Every service follows the same shape: a fixed catalog of SKU-like
//! variants chosen uniformly, plus bounded random numeric values.

pub mod aws;
pub mod azure;
pub mod gcp;

use crate::fake::FakeData;
use crate::generator::{DatasetGenerator, ReportGenerator, ServiceGenerator};
use costgen_core::{DateRange, ServiceKind};

/// Upper bound for unbounded consumption and cost draws.
pub const MAX_VALUE: i64 = 10_000;

/// Upper bound for per-day running time in seconds.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Upper bound for per-day running time in hours.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Currency of every generated cost.
pub const CURRENCY: &str = "USD";

/// Round to `places` decimal places.
pub(crate) fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Build a generator for `kind` behind [`DatasetGenerator`].
pub fn build_generator<F: FakeData + 'static>(
    kind: ServiceKind,
    range: DateRange,
    num_instances: usize,
    fake: F,
) -> Box<dyn DatasetGenerator> {
    match kind {
        ServiceKind::Ec2 => Box::new(ReportGenerator::new(
            range,
            num_instances,
            aws::Ec2Generator,
            fake,
        )),
        ServiceKind::S3 => Box::new(ReportGenerator::new(
            range,
            num_instances,
            aws::S3Generator,
            fake,
        )),
        ServiceKind::AzureStorage => Box::new(ReportGenerator::new(
            range,
            num_instances,
            azure::StorageGenerator,
            fake,
        )),
        ServiceKind::VirtualMachine => Box::new(ReportGenerator::new(
            range,
            num_instances,
            azure::VirtualMachineGenerator,
            fake,
        )),
        ServiceKind::CloudStorage => Box::new(ReportGenerator::new(
            range,
            num_instances,
            gcp::CloudStorageGenerator,
            fake,
        )),
        ServiceKind::ComputeEngine => Box::new(ReportGenerator::new(
            range,
            num_instances,
            gcp::ComputeEngineGenerator,
            fake,
        )),
    }
}

/// Catalog identifiers of `kind`, with the column they land in.
pub fn catalog(kind: ServiceKind) -> (&'static str, Vec<&'static str>) {
    fn of<S: ServiceGenerator>(service: S) -> (&'static str, Vec<&'static str>) {
        (S::ID_COLUMN, service.catalog_ids())
    }

    match kind {
        ServiceKind::Ec2 => of(aws::Ec2Generator),
        ServiceKind::S3 => of(aws::S3Generator),
        ServiceKind::AzureStorage => of(azure::StorageGenerator),
        ServiceKind::VirtualMachine => of(azure::VirtualMachineGenerator),
        ServiceKind::CloudStorage => of(gcp::CloudStorageGenerator),
        ServiceKind::ComputeEngine => of(gcp::ComputeEngineGenerator),
    }
}
