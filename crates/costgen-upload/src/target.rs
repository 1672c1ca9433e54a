//! Upload destinations given as URIs.

use crate::azure::upload_to_azure_storage;
use crate::gcs::upload_to_gcp_storage;
use crate::s3::upload_to_s3;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetParseError {
    #[error("unsupported upload URI '{0}' (expected s3://, az:// or gs://)")]
    UnsupportedScheme(String),

    #[error("upload URI '{0}' has no bucket or container")]
    MissingContainer(String),
}

/// Destination of an upload: a bucket or container plus a key prefix.
///
/// A prefix ending in `/` (or empty) names a directory; [`UploadTarget::key_for`]
/// appends the local file name to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    S3 { bucket: String, prefix: String },
    Azure { container: String, prefix: String },
    Gcs { bucket: String, prefix: String },
}

impl UploadTarget {
    pub fn parse(uri: &str) -> Result<Self, TargetParseError> {
        let (scheme, rest) = uri
            .split_once("://")
            .ok_or_else(|| TargetParseError::UnsupportedScheme(uri.to_string()))?;

        let (container, prefix) = match rest.split_once('/') {
            Some((container, prefix)) => (container.to_string(), prefix.to_string()),
            None => (rest.to_string(), String::new()),
        };
        if container.is_empty() {
            return Err(TargetParseError::MissingContainer(uri.to_string()));
        }

        match scheme {
            "s3" => Ok(UploadTarget::S3 {
                bucket: container,
                prefix,
            }),
            "az" | "azure" => Ok(UploadTarget::Azure { container, prefix }),
            "gs" | "gcs" => Ok(UploadTarget::Gcs {
                bucket: container,
                prefix,
            }),
            _ => Err(TargetParseError::UnsupportedScheme(uri.to_string())),
        }
    }

    pub fn container(&self) -> &str {
        match self {
            UploadTarget::S3 { bucket, .. } | UploadTarget::Gcs { bucket, .. } => bucket,
            UploadTarget::Azure { container, .. } => container,
        }
    }

    pub fn prefix(&self) -> &str {
        match self {
            UploadTarget::S3 { prefix, .. }
            | UploadTarget::Azure { prefix, .. }
            | UploadTarget::Gcs { prefix, .. } => prefix,
        }
    }

    fn scheme(&self) -> &'static str {
        match self {
            UploadTarget::S3 { .. } => "s3",
            UploadTarget::Azure { .. } => "az",
            UploadTarget::Gcs { .. } => "gs",
        }
    }

    /// Whether the prefix names a directory rather than one exact key.
    pub fn is_directory(&self) -> bool {
        let prefix = self.prefix();
        prefix.is_empty() || prefix.ends_with('/')
    }

    /// Remote key for `local_path` under this target.
    pub fn key_for(&self, local_path: &Path) -> String {
        let prefix = self.prefix();
        if self.is_directory() {
            let file_name = local_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{prefix}{file_name}")
        } else {
            prefix.to_string()
        }
    }

    /// Upload `local_path` with the matching provider function.
    pub async fn upload(&self, local_path: &Path) -> bool {
        let key = self.key_for(local_path);
        match self {
            UploadTarget::S3 { bucket, .. } => upload_to_s3(bucket, &key, local_path).await,
            UploadTarget::Azure { container, .. } => {
                upload_to_azure_storage(container, local_path, &key).await
            }
            UploadTarget::Gcs { bucket, .. } => {
                upload_to_gcp_storage(bucket, local_path, &key).await
            }
        }
    }
}

impl FromStr for UploadTarget {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.scheme(), self.container(), self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_s3() {
        let target = UploadTarget::parse("s3://cur-bucket/reports/daily/").unwrap();
        assert_eq!(
            target,
            UploadTarget::S3 {
                bucket: "cur-bucket".to_string(),
                prefix: "reports/daily/".to_string()
            }
        );
    }

    #[test]
    fn test_parse_azure_and_gcs() {
        assert!(matches!(
            UploadTarget::parse("az://usage/exports/").unwrap(),
            UploadTarget::Azure { ref container, .. } if container == "usage"
        ));
        assert!(matches!(
            UploadTarget::parse("gs://billing").unwrap(),
            UploadTarget::Gcs { ref bucket, ref prefix } if bucket == "billing" && prefix.is_empty()
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            UploadTarget::parse("/tmp/reports"),
            Err(TargetParseError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            UploadTarget::parse("ftp://host/file"),
            Err(TargetParseError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            UploadTarget::parse("s3:///key"),
            Err(TargetParseError::MissingContainer(_))
        ));
    }

    #[test]
    fn test_key_for_directory_prefix() {
        let path = Path::new("/tmp/out/gcp-cloud_storage-20230601-20230601.csv");

        let target = UploadTarget::parse("gs://billing/exports/").unwrap();
        assert_eq!(
            target.key_for(path),
            "exports/gcp-cloud_storage-20230601-20230601.csv"
        );

        assert!(target.is_directory());

        let target = UploadTarget::parse("gs://billing").unwrap();
        assert!(target.is_directory());
        assert_eq!(target.key_for(path), "gcp-cloud_storage-20230601-20230601.csv");
    }

    #[test]
    fn test_key_for_exact_key() {
        let target = UploadTarget::parse("s3://cur-bucket/reports/june.csv").unwrap();
        assert!(!target.is_directory());
        assert_eq!(target.key_for(Path::new("/tmp/any.csv")), "reports/june.csv");
        assert_eq!(target.to_string(), "s3://cur-bucket/reports/june.csv");
    }
}
