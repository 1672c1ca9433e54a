//! Google Cloud Storage uploads.

use crate::credentials::UploadCredentials;
use crate::error::UploadError;
use crate::transport::{log_outcome, upload_file, ObjectTransport};
use async_trait::async_trait;
use object_store::gcp::{GoogleCloudStorage, GoogleCloudStorageBuilder};
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use std::path::{Path, PathBuf};
use tracing::warn;

/// GCS access through an application-credentials file. The bucket is
/// chosen per upload.
///
/// The file may hold either a service account key or `gcloud` user
/// credentials, the same formats `GOOGLE_APPLICATION_CREDENTIALS` accepts.
pub struct GcsTransport {
    credentials_path: PathBuf,
}

impl GcsTransport {
    pub fn new(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
        }
    }

    fn store(&self, bucket: &str) -> Result<GoogleCloudStorage, UploadError> {
        Ok(GoogleCloudStorageBuilder::new()
            .with_application_credentials(self.credentials_path.to_string_lossy())
            .with_bucket_name(bucket)
            .build()?)
    }
}

#[async_trait]
impl ObjectTransport for GcsTransport {
    fn name(&self) -> &'static str {
        "gs"
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), UploadError> {
        self.store(container)?
            .put(&ObjectPath::from(key), PutPayload::from(body))
            .await?;
        Ok(())
    }
}

/// Upload `local_path` to `gs://bucket/remote_blob_name`.
///
/// Returns `false` straight away when `GOOGLE_APPLICATION_CREDENTIALS` is
/// not set; no client is created in that case.
pub async fn upload_to_gcp_storage(
    bucket: &str,
    local_path: impl AsRef<Path>,
    remote_blob_name: &str,
) -> bool {
    let credentials = UploadCredentials::from_env();
    let transport = match credentials.gcp() {
        Ok(path) => GcsTransport::new(path),
        Err(e) => {
            warn!("Skipping upload to gs://{bucket}/{remote_blob_name}: {e}");
            return false;
        }
    };
    upload_to_gcp_storage_via(&credentials, &transport, bucket, local_path, remote_blob_name).await
}

pub async fn upload_to_gcp_storage_via(
    credentials: &UploadCredentials,
    transport: &dyn ObjectTransport,
    bucket: &str,
    local_path: impl AsRef<Path>,
    remote_blob_name: &str,
) -> bool {
    let result = match credentials.gcp() {
        Ok(_) => upload_file(transport, bucket, remote_blob_name, local_path.as_ref()).await,
        Err(e) => Err(e),
    };
    log_outcome(result, "gs", bucket, remote_blob_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::GCP_CREDENTIALS_ENV;
    use crate::transport::testing::RecordingTransport;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_no_credentials_returns_false_without_calls() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"account_id,line_item\n").unwrap();
        let transport = RecordingTransport::new();

        let ok = upload_to_gcp_storage_via(
            &UploadCredentials::default(),
            &transport,
            "billing-bucket",
            file.path(),
            "gcp/report.csv",
        )
        .await;

        assert!(!ok);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_with_credentials() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"account_id,line_item\n").unwrap();
        let credentials = UploadCredentials::from_lookup(|name| {
            (name == GCP_CREDENTIALS_ENV).then(|| "/etc/gcp/key.json".to_string())
        });
        let transport = RecordingTransport::new();

        let ok = upload_to_gcp_storage_via(
            &credentials,
            &transport,
            "billing-bucket",
            file.path(),
            "gcp/report.csv",
        )
        .await;

        assert!(ok);
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "billing-bucket");
        assert_eq!(calls[0].1, "gcp/report.csv");
        assert_eq!(calls[0].2, b"account_id,line_item\n");
    }

    #[tokio::test]
    async fn test_transport_error_returns_false() {
        let file = NamedTempFile::new().unwrap();
        let credentials = UploadCredentials {
            gcp_credentials_path: Some(PathBuf::from("/etc/gcp/key.json")),
            ..Default::default()
        };
        let transport = RecordingTransport::failing(|| UploadError::Auth("401".into()));

        assert!(!upload_to_gcp_storage_via(&credentials, &transport, "b", file.path(), "k").await);
    }

    #[test]
    fn test_store_accepts_authorized_user_credentials() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"type":"authorized_user","client_id":"id","client_secret":"secret","refresh_token":"token"}"#,
        )
        .unwrap();

        assert!(GcsTransport::new(file.path()).store("billing-bucket").is_ok());
    }

    #[test]
    fn test_store_rejects_missing_credentials_file() {
        let transport = GcsTransport::new("/nonexistent/costgen/key.json");
        assert!(transport.store("billing-bucket").is_err());
    }
}
