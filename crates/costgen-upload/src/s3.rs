//! S3 uploads through the AWS SDK.

use crate::error::UploadError;
use crate::transport::{log_outcome, upload_file, ObjectTransport};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

/// Shared S3 client.
///
/// Creating an S3 client is relatively expensive, so reuse one transport
/// for several uploads.
pub struct S3Transport {
    client: aws_sdk_s3::Client,
}

impl S3Transport {
    /// Create a client from the AWS default credential chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }

    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectTransport for S3Transport {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), UploadError> {
        self.client
            .put_object()
            .bucket(container)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| map_put_error(e, &format!("s3://{container}/{key}")))?;
        Ok(())
    }
}

fn map_put_error(err: SdkError<PutObjectError, HttpResponse>, target: &str) -> UploadError {
    let message = format!("{target}: {}", DisplayErrorContext(&err));
    if matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) {
        return UploadError::Network(message);
    }
    match err.raw_response().map(|response| response.status().as_u16()) {
        Some(401 | 403) => UploadError::Auth(message),
        Some(404) => UploadError::NotFound(message),
        Some(500..=599) => UploadError::Network(message),
        _ => UploadError::Unknown(message),
    }
}

/// Upload `local_path` to `s3://bucket/remote_path`.
pub async fn upload_to_s3(bucket: &str, remote_path: &str, local_path: impl AsRef<Path>) -> bool {
    let transport = S3Transport::from_env().await;
    upload_to_s3_via(&transport, bucket, remote_path, local_path).await
}

pub async fn upload_to_s3_via(
    transport: &dyn ObjectTransport,
    bucket: &str,
    remote_path: &str,
    local_path: impl AsRef<Path>,
) -> bool {
    let result = upload_file(transport, bucket, remote_path, local_path.as_ref()).await;
    log_outcome(result, "s3", bucket, remote_path)
}
