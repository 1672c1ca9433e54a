//! Credential lookup for the Azure and GCS uploads.
//!
//! S3 uploads go through the AWS default credential chain instead.

use crate::error::UploadError;
use std::path::{Path, PathBuf};

pub const AZURE_ACCOUNT_ENV: &str = "AZURE_STORAGE_ACCOUNT";
pub const AZURE_KEY_ENV: &str = "AZURE_ACCOUNT_KEY";
pub const GCP_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Credentials gathered from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadCredentials {
    pub azure_account: Option<String>,
    pub azure_key: Option<String>,
    pub gcp_credentials_path: Option<PathBuf>,
}

impl UploadCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            azure_account: get(AZURE_ACCOUNT_ENV),
            azure_key: get(AZURE_KEY_ENV),
            gcp_credentials_path: get(GCP_CREDENTIALS_ENV).map(PathBuf::from),
        }
    }

    /// Storage account name and key.
    pub fn azure(&self) -> Result<(&str, &str), UploadError> {
        let account = self
            .azure_account
            .as_deref()
            .ok_or(UploadError::MissingCredentials(AZURE_ACCOUNT_ENV))?;
        let key = self
            .azure_key
            .as_deref()
            .ok_or(UploadError::MissingCredentials(AZURE_KEY_ENV))?;
        Ok((account, key))
    }

    /// Path of the service account JSON file.
    pub fn gcp(&self) -> Result<&Path, UploadError> {
        self.gcp_credentials_path
            .as_deref()
            .ok_or(UploadError::MissingCredentials(GCP_CREDENTIALS_ENV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> UploadCredentials {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UploadCredentials::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_empty_environment() {
        let creds = lookup(&[]);
        assert!(matches!(
            creds.azure(),
            Err(UploadError::MissingCredentials(AZURE_ACCOUNT_ENV))
        ));
        assert!(matches!(
            creds.gcp(),
            Err(UploadError::MissingCredentials(GCP_CREDENTIALS_ENV))
        ));
    }

    #[test]
    fn test_azure_needs_both_values() {
        let creds = lookup(&[(AZURE_ACCOUNT_ENV, "costgen")]);
        assert!(matches!(
            creds.azure(),
            Err(UploadError::MissingCredentials(AZURE_KEY_ENV))
        ));

        let creds = lookup(&[(AZURE_ACCOUNT_ENV, "costgen"), (AZURE_KEY_ENV, "c2VjcmV0")]);
        assert_eq!(creds.azure().unwrap(), ("costgen", "c2VjcmV0"));
    }

    #[test]
    fn test_blank_value_is_unset() {
        let creds = lookup(&[(GCP_CREDENTIALS_ENV, "  ")]);
        assert!(creds.gcp().is_err());

        let creds = lookup(&[(GCP_CREDENTIALS_ENV, "/etc/gcp/key.json")]);
        assert_eq!(creds.gcp().unwrap(), Path::new("/etc/gcp/key.json"));
    }
}
