use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use super::{ClientError, WorkerDirectory};
use crate::models::WorkerRecord;

const SIGNATURE_ATTR: &str = "rekognitionId";
const WORKER_ATTR: &str = "workerId";

/// Worker record store adapter backed by DynamoDB.
pub struct DynamoWorkerDirectory {
    client: Client,
    table_name: String,
}

impl DynamoWorkerDirectory {
    pub fn new(config: &aws_config::SdkConfig, table_name: String) -> Self {
        Self {
            client: Client::new(config),
            table_name,
        }
    }
}

#[async_trait]
impl WorkerDirectory for DynamoWorkerDirectory {
    async fn get_record(&self, signature_id: &str) -> Result<Option<WorkerRecord>, ClientError> {
        debug!(
            "Looking up signature {} in table {}",
            signature_id, self.table_name
        );

        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(SIGNATURE_ATTR, AttributeValue::S(signature_id.to_string()))
            .send()
            .await
            .map_err(|err| ClientError::Service {
                service: "dynamodb",
                message: err.into_service_error().to_string(),
            })?;

        let Some(item) = response.item else {
            return Ok(None);
        };

        let worker_id = item
            .get(WORKER_ATTR)
            .and_then(|value| value.as_s().ok())
            .ok_or_else(|| ClientError::Service {
                service: "dynamodb",
                message: format!("record for signature {} has no workerId", signature_id),
            })?;

        Ok(Some(WorkerRecord {
            signature_id: signature_id.to_string(),
            worker_id: worker_id.clone(),
        }))
    }

    async fn put_record(&self, record: &WorkerRecord) -> Result<(), ClientError> {
        debug!(
            "Writing record for worker {} to table {}",
            record.worker_id, self.table_name
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(
                SIGNATURE_ATTR,
                AttributeValue::S(record.signature_id.clone()),
            )
            .item(WORKER_ATTR, AttributeValue::S(record.worker_id.clone()))
            .send()
            .await
            .map_err(|err| ClientError::Service {
                service: "dynamodb",
                message: err.into_service_error().to_string(),
            })?;

        Ok(())
    }
}
