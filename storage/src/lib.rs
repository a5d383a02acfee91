use std::time::Duration;

use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};
use uuid::Uuid;

use common::env_config::StorageConfig;
use common::error::{AppError, Res};

pub mod keys;

/// Files at or below this size go up in a single PUT; larger ones use
/// multipart upload in parts of this size.
pub const PART_SIZE: usize = 5 * 1024 * 1024;

/// Thin wrapper around the S3 client, scoped to the application bucket.
///
/// The bucket doubles as the handoff point with the external AI processor:
/// this service writes under `{user}/files/incoming/`, the processor writes
/// results under `{user}/files/outgoing/` and is never called directly for
/// reads.
#[derive(Clone)]
pub struct Storage {
    client: S3Client,
    bucket: String,
    presign_expiry: Duration,
}

impl Storage {
    /// Builds the S3 client from the ambient AWS credential chain, honoring a
    /// custom endpoint for S3-compatible stores (Spaces, MinIO).
    pub async fn setup(config: &StorageConfig) -> Self {
        let region_provider =
            RegionProviderChain::default_provider()
                .or_else(aws_config::Region::new(config.region.clone()));
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Storage {
            client: S3Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            presign_expiry: Duration::from_secs(config.presign_expiry_secs),
        }
    }

    /// Creates the `incoming/` and `outgoing/` prefix markers for a user if
    /// they do not already exist. The external processor expects both to be
    /// present before it scans for work.
    pub async fn ensure_user_prefixes(&self, user_id: Uuid) -> Res<()> {
        for marker in [keys::incoming_marker(user_id), keys::outgoing_marker(user_id)] {
            let head = self
                .client
                .head_object()
                .bucket(&self.bucket)
                .key(&marker)
                .send()
                .await;

            if head.is_ok() {
                continue;
            }

            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(&marker)
                .body(ByteStream::from_static(b""))
                .send()
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Uploads one file's bytes, switching to multipart transfer above
    /// `PART_SIZE`.
    pub async fn put_file(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Res<()> {
        if bytes.len() > PART_SIZE {
            self.put_multipart(key, bytes, content_type).await
        } else {
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .content_type(content_type)
                .body(ByteStream::from(bytes))
                .send()
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
            Ok(())
        }
    }

    async fn put_multipart(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Res<()> {
        let create = self
            .client
            .create_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let upload_id = create
            .upload_id()
            .ok_or_else(|| AppError::Storage("Missing multipart upload id".to_string()))?
            .to_string();

        let mut completed_parts = Vec::new();
        for (index, chunk) in bytes.chunks(PART_SIZE).enumerate() {
            let part_number = (index + 1) as i32;
            let part = self
                .client
                .upload_part()
                .bucket(&self.bucket)
                .key(key)
                .upload_id(&upload_id)
                .part_number(part_number)
                .body(ByteStream::from(chunk.to_vec()))
                .send()
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;

            completed_parts.push(
                CompletedPart::builder()
                    .e_tag(part.e_tag().unwrap_or_default())
                    .part_number(part_number)
                    .build(),
            );
        }

        self.client
            .complete_multipart_upload()
            .bucket(&self.bucket)
            .key(key)
            .upload_id(&upload_id)
            .multipart_upload(
                CompletedMultipartUpload::builder()
                    .set_parts(Some(completed_parts))
                    .build(),
            )
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Lists object keys under a prefix, skipping the zero-byte prefix
    /// markers themselves.
    pub async fn list_keys(&self, prefix: &str) -> Res<Vec<String>> {
        let listing = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(listing
            .contents()
            .iter()
            .filter_map(|object| object.key())
            .filter(|key| !key.ends_with('/'))
            .map(|key| key.to_string())
            .collect())
    }

    /// Time-limited signed download URL for one object.
    pub async fn presign_get(&self, key: &str) -> Res<String> {
        let presigning = PresigningConfig::expires_in(self.presign_expiry)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(request.uri().to_string())
    }
}
