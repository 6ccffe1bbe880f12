// Collaborator ports. Each external service the handlers talk to sits behind
// a trait so handlers receive explicitly constructed dependencies and tests
// can substitute doubles.

pub mod dynamodb;
pub mod rekognition;
pub mod s3;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::models::{FaceMatch, IndexedFace, WorkerRecord};

pub use dynamodb::DynamoWorkerDirectory;
pub use rekognition::RekognitionFaceIndex;
pub use s3::S3ObjectStore;

/// Failure surfaced by a collaborator call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("object {key} not found in bucket {bucket}")]
    ObjectNotFound { bucket: String, key: String },

    /// The recognition collaborator could not find a face in the submitted
    /// image. Kept distinct so the Authenticator can answer with its
    /// dedicated failure response.
    #[error("no face detected in submitted image")]
    NoFaceDetected,

    #[error("{service} request failed: {message}")]
    Service {
        service: &'static str,
        message: String,
    },
}

/// Object storage holding the uploaded worker images.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the raw bytes of a stored object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ClientError>;
}

/// Face recognition collaborator: indexes faces into a collection and
/// searches the collection by image.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FaceIndex: Send + Sync {
    /// Index the faces found in a stored object into the collection,
    /// returning one entry per detected face with its assigned signature id.
    async fn index_face(
        &self,
        bucket: &str,
        key: &str,
        collection_id: &str,
    ) -> Result<Vec<IndexedFace>, ClientError>;

    /// Search the collection for faces matching the submitted image bytes.
    /// Candidates come back best-first; the caller must not re-order them.
    async fn search_by_image(
        &self,
        collection_id: &str,
        image_bytes: Vec<u8>,
    ) -> Result<Vec<FaceMatch>, ClientError>;
}

/// Record store mapping face signatures to worker ids.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WorkerDirectory: Send + Sync {
    async fn get_record(&self, signature_id: &str) -> Result<Option<WorkerRecord>, ClientError>;

    /// Upsert keyed by signature id.
    async fn put_record(&self, record: &WorkerRecord) -> Result<(), ClientError>;
}
