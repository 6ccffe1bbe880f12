use async_trait::async_trait;
use aws_sdk_s3::Client;
use tracing::debug;

use super::{ClientError, ObjectStore};

/// Object storage adapter backed by S3.
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ClientError> {
        debug!("Fetching object {} from bucket {}", key, bucket);

        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    ClientError::ObjectNotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    ClientError::Service {
                        service: "s3",
                        message: service_err.to_string(),
                    }
                }
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|err| ClientError::Service {
                service: "s3",
                message: format!("failed to read object body: {}", err),
            })?
            .into_bytes();

        Ok(bytes.to_vec())
    }
}
