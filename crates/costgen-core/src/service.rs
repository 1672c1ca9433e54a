//! Registry of modeled cloud services.

use crate::schema::Provider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown service name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown service '{0}' (expected one of: ec2, s3, azure_storage, virtual_machine, cloud_storage, compute_engine)")]
pub struct UnknownService(pub String);

/// A service type with its own generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// AWS Elastic Compute Cloud
    Ec2,
    /// AWS Simple Storage Service
    S3,
    /// Azure Storage accounts
    AzureStorage,
    /// Azure Virtual Machines
    VirtualMachine,
    /// GCP Cloud Storage
    CloudStorage,
    /// GCP Compute Engine
    ComputeEngine,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Ec2,
        ServiceKind::S3,
        ServiceKind::AzureStorage,
        ServiceKind::VirtualMachine,
        ServiceKind::CloudStorage,
        ServiceKind::ComputeEngine,
    ];

    /// Provider whose export this service appears in.
    pub fn provider(self) -> Provider {
        match self {
            ServiceKind::Ec2 | ServiceKind::S3 => Provider::Aws,
            ServiceKind::AzureStorage | ServiceKind::VirtualMachine => Provider::Azure,
            ServiceKind::CloudStorage | ServiceKind::ComputeEngine => Provider::Gcp,
        }
    }

    /// Snake-case name, as used on the command line and in plan files.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Ec2 => "ec2",
            ServiceKind::S3 => "s3",
            ServiceKind::AzureStorage => "azure_storage",
            ServiceKind::VirtualMachine => "virtual_machine",
            ServiceKind::CloudStorage => "cloud_storage",
            ServiceKind::ComputeEngine => "compute_engine",
        }
    }

    /// Services of one provider.
    pub fn for_provider(provider: Provider) -> Vec<ServiceKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.provider() == provider)
            .collect()
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.as_str().parse::<ServiceKind>().unwrap(), kind);
        }
        assert_eq!(
            "Compute-Engine".parse::<ServiceKind>().unwrap(),
            ServiceKind::ComputeEngine
        );
        assert!("lambda".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_serde_name_matches_display() {
        for kind in ServiceKind::ALL {
            let yaml = serde_yaml::to_string(&kind).unwrap();
            assert_eq!(yaml.trim(), kind.to_string());
        }
    }

    #[test]
    fn test_for_provider() {
        assert_eq!(
            ServiceKind::for_provider(Provider::Gcp),
            vec![ServiceKind::CloudStorage, ServiceKind::ComputeEngine]
        );
        assert_eq!(ServiceKind::for_provider(Provider::Aws).len(), 2);
        assert_eq!(ServiceKind::for_provider(Provider::Azure).len(), 2);
    }
}
