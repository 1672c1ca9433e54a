//! Azure Blob Storage uploads.

use crate::credentials::UploadCredentials;
use crate::error::UploadError;
use crate::transport::{log_outcome, upload_file, ObjectTransport};
use async_trait::async_trait;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use std::path::Path;
use tracing::warn;

/// Shared-key access to one storage account. The container is chosen per
/// upload.
pub struct AzureTransport {
    account: String,
    access_key: String,
}

impl AzureTransport {
    pub fn new(account: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            access_key: access_key.into(),
        }
    }

    pub fn from_credentials(credentials: &UploadCredentials) -> Result<Self, UploadError> {
        let (account, key) = credentials.azure()?;
        Ok(Self::new(account, key))
    }
}

#[async_trait]
impl ObjectTransport for AzureTransport {
    fn name(&self) -> &'static str {
        "az"
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), UploadError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(&self.account)
            .with_access_key(&self.access_key)
            .with_container_name(container)
            .build()?;
        store
            .put(&ObjectPath::from(key), PutPayload::from(body))
            .await?;
        Ok(())
    }
}

/// Upload `local_path` to `container/remote_path` in the storage account
/// named by `AZURE_STORAGE_ACCOUNT`.
pub async fn upload_to_azure_storage(
    container: &str,
    local_path: impl AsRef<Path>,
    remote_path: &str,
) -> bool {
    let credentials = UploadCredentials::from_env();
    let transport = match AzureTransport::from_credentials(&credentials) {
        Ok(transport) => transport,
        Err(e) => {
            warn!("Skipping upload to az://{container}/{remote_path}: {e}");
            return false;
        }
    };
    upload_to_azure_storage_via(&credentials, &transport, container, local_path, remote_path).await
}

/// Same as [`upload_to_azure_storage`] with explicit credentials and
/// transport. Missing credentials fail before the transport is called.
pub async fn upload_to_azure_storage_via(
    credentials: &UploadCredentials,
    transport: &dyn ObjectTransport,
    container: &str,
    local_path: impl AsRef<Path>,
    remote_path: &str,
) -> bool {
    let result = match credentials.azure() {
        Ok(_) => upload_file(transport, container, remote_path, local_path.as_ref()).await,
        Err(e) => Err(e),
    };
    log_outcome(result, "az", container, remote_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{AZURE_ACCOUNT_ENV, AZURE_KEY_ENV};
    use crate::transport::testing::RecordingTransport;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn azure_credentials() -> UploadCredentials {
        UploadCredentials::from_lookup(|name| match name {
            AZURE_ACCOUNT_ENV => Some("costgen".to_string()),
            AZURE_KEY_ENV => Some("c2VjcmV0".to_string()),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_upload_with_credentials() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"SubscriptionGuid\n").unwrap();
        let transport = RecordingTransport::new();

        let ok = upload_to_azure_storage_via(
            &azure_credentials(),
            &transport,
            "reports",
            file.path(),
            "azure/2023/06/report.csv",
        )
        .await;

        assert!(ok);
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "reports");
        assert_eq!(calls[0].1, "azure/2023/06/report.csv");
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_transport() {
        let file = NamedTempFile::new().unwrap();
        let transport = RecordingTransport::new();

        let ok = upload_to_azure_storage_via(
            &UploadCredentials::default(),
            &transport,
            "reports",
            file.path(),
            "report.csv",
        )
        .await;

        assert!(!ok);
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_transport_from_credentials() {
        assert!(AzureTransport::from_credentials(&azure_credentials()).is_ok());
        assert!(AzureTransport::from_credentials(&UploadCredentials::default()).is_err());
    }
}
