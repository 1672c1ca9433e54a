//! The object store seam shared by all three upload targets.

use crate::error::UploadError;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info, warn};

/// Stores one object in a bucket or container.
#[async_trait]
pub trait ObjectTransport: Send + Sync {
    /// Short store name used in log lines.
    fn name(&self) -> &'static str;

    async fn put_object(&self, container: &str, key: &str, body: Vec<u8>)
        -> Result<(), UploadError>;
}

/// Read `local_path` and store it as `container/key`. Returns the number of
/// bytes sent.
pub async fn upload_file(
    transport: &dyn ObjectTransport,
    container: &str,
    key: &str,
    local_path: &Path,
) -> Result<u64, UploadError> {
    let body = tokio::fs::read(local_path).await?;
    let size = body.len() as u64;
    debug!(
        "Uploading {} ({} bytes) to {}://{}/{}",
        local_path.display(),
        size,
        transport.name(),
        container,
        key
    );
    transport.put_object(container, key, body).await?;
    Ok(size)
}

/// Collapse an upload result to the success flag, logging the outcome.
pub(crate) fn log_outcome(
    result: Result<u64, UploadError>,
    store: &str,
    container: &str,
    key: &str,
) -> bool {
    match result {
        Ok(size) => {
            info!("Uploaded {size} bytes to {store}://{container}/{key}");
            true
        }
        Err(e) => {
            warn!(
                "Upload to {store}://{container}/{key} failed ({}): {e}",
                e.kind()
            );
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every call and answers with a canned result.
    pub(crate) struct RecordingTransport {
        pub calls: Mutex<Vec<(String, String, Vec<u8>)>>,
        fail_with: Option<fn() -> UploadError>,
    }

    impl RecordingTransport {
        pub(crate) fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        pub(crate) fn failing(fail_with: fn() -> UploadError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(fail_with),
            }
        }

        pub(crate) fn calls(&self) -> Vec<(String, String, Vec<u8>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ObjectTransport for RecordingTransport {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn put_object(
            &self,
            container: &str,
            key: &str,
            body: Vec<u8>,
        ) -> Result<(), UploadError> {
            self.calls
                .lock()
                .unwrap()
                .push((container.to_string(), key.to_string(), body));
            match self.fail_with {
                Some(make_error) => Err(make_error()),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_upload_file_sends_contents() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,b\n1,2\n").unwrap();
        let transport = RecordingTransport::new();

        let size = upload_file(&transport, "bucket", "reports/r.csv", file.path())
            .await
            .unwrap();

        assert_eq!(size, 8);
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "bucket");
        assert_eq!(calls[0].1, "reports/r.csv");
        assert_eq!(calls[0].2, b"a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_missing_local_file_skips_transport() {
        let transport = RecordingTransport::new();
        let err = upload_file(
            &transport,
            "bucket",
            "r.csv",
            Path::new("/nonexistent/costgen/r.csv"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, UploadError::Io(_)));
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_log_outcome() {
        assert!(log_outcome(Ok(10), "s3", "b", "k"));
        assert!(!log_outcome(
            Err(UploadError::Auth("denied".into())),
            "s3",
            "b",
            "k"
        ));
    }
}
