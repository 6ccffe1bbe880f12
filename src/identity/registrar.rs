use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::clients::{ClientError, FaceIndex, WorkerDirectory};
use crate::models::event::StoredObjectRef;
use crate::models::WorkerRecord;

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The recognition collaborator returned success but indexed no face.
    /// The image was unusable for enrollment; callers must supply one
    /// well-cropped face per image.
    #[error("no face could be indexed from {bucket}/{key}")]
    NoFaceIndexed { bucket: String, key: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Enrolls a worker's face when an image object lands in storage.
///
/// No retry and no idempotency guard: failures propagate to the invocation
/// boundary so the platform's own retry handling applies, and re-delivered
/// events enroll a fresh signature for the same worker.
pub struct Registrar {
    faces: Arc<dyn FaceIndex>,
    directory: Arc<dyn WorkerDirectory>,
    collection_id: String,
}

impl Registrar {
    pub fn new(
        faces: Arc<dyn FaceIndex>,
        directory: Arc<dyn WorkerDirectory>,
        collection_id: String,
    ) -> Self {
        Self {
            faces,
            directory,
            collection_id,
        }
    }

    /// Index the stored image into the collection and persist the mapping
    /// from the assigned signature to the worker id derived from the key.
    #[tracing::instrument(skip(self), fields(bucket = %object.bucket, key = %object.key))]
    pub async fn register(&self, object: &StoredObjectRef) -> Result<WorkerRecord, RegistrationError> {
        let indexed = self
            .faces
            .index_face(&object.bucket, &object.key, &self.collection_id)
            .await?;

        let Some(first) = indexed.first() else {
            return Err(RegistrationError::NoFaceIndexed {
                bucket: object.bucket.clone(),
                key: object.key.clone(),
            });
        };
        if indexed.len() > 1 {
            warn!(
                indexed = indexed.len(),
                "image contained multiple faces, registering the first only"
            );
        }

        let record = WorkerRecord {
            signature_id: first.signature_id.clone(),
            worker_id: worker_id_from_key(&object.key).to_string(),
        };

        self.directory.put_record(&record).await?;

        info!(
            signature_id = %record.signature_id,
            worker_id = %record.worker_id,
            "worker face registered"
        );

        Ok(record)
    }
}

/// Derive the worker id from an object key: everything before the first `.`.
/// A key without an extension maps to itself.
pub fn worker_id_from_key(key: &str) -> &str {
    key.split_once('.').map_or(key, |(prefix, _)| prefix)
}
