//! Upload collaborators for generated reports.
//!
//! Each provider has one entry point that returns `true` on success and
//! `false` otherwise, logging the failure reason:
//!
//! - [`upload_to_s3`] uses the AWS default credential chain
//! - [`upload_to_azure_storage`] reads `AZURE_STORAGE_ACCOUNT` / `AZURE_ACCOUNT_KEY`
//! - [`upload_to_gcp_storage`] requires `GOOGLE_APPLICATION_CREDENTIALS`
//!
//! The `*_via` variants take any [`ObjectTransport`], which is how tests
//! substitute a recording transport for the network.
//!
//! # Example
//!
//! ```ignore
//! use costgen_upload::UploadTarget;
//!
//! let target = UploadTarget::parse("gs://billing/exports/")?;
//! if !target.upload(&report_path).await {
//!     eprintln!("upload failed");
//! }
//! ```

mod azure;
mod credentials;
mod error;
mod gcs;
mod s3;
mod target;
mod transport;

pub use azure::{upload_to_azure_storage, upload_to_azure_storage_via, AzureTransport};
pub use credentials::{
    UploadCredentials, AZURE_ACCOUNT_ENV, AZURE_KEY_ENV, GCP_CREDENTIALS_ENV,
};
pub use error::{UploadError, UploadErrorKind};
pub use gcs::{upload_to_gcp_storage, upload_to_gcp_storage_via, GcsTransport};
pub use s3::{upload_to_s3, upload_to_s3_via, S3Transport};
pub use target::{TargetParseError, UploadTarget};
pub use transport::{upload_file, ObjectTransport};
