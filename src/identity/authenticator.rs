use std::sync::Arc;

use tracing::{debug, info};

use crate::clients::{ClientError, FaceIndex, ObjectStore, WorkerDirectory};

/// Result of one authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A candidate signature resolved to a registered worker.
    Match { worker_id: String },
    /// The search produced no candidates, or none of them had a record.
    NoMatch,
}

/// Matches a submitted image against the enrolled collection.
///
/// Stateless per invocation: one storage fetch, one search, then sequential
/// record lookups that stop at the first hit. Candidates are taken in the
/// collaborator's best-first order and never re-sorted or filtered by
/// confidence.
pub struct Authenticator {
    store: Arc<dyn ObjectStore>,
    faces: Arc<dyn FaceIndex>,
    directory: Arc<dyn WorkerDirectory>,
    bucket: String,
    collection_id: String,
}

impl Authenticator {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        faces: Arc<dyn FaceIndex>,
        directory: Arc<dyn WorkerDirectory>,
        bucket: String,
        collection_id: String,
    ) -> Self {
        Self {
            store,
            faces,
            directory,
            bucket,
            collection_id,
        }
    }

    #[tracing::instrument(skip(self), fields(object_key = %object_key))]
    pub async fn authenticate(&self, object_key: &str) -> Result<AuthOutcome, ClientError> {
        let image_bytes = self.store.get_object(&self.bucket, object_key).await?;

        let candidates = self
            .faces
            .search_by_image(&self.collection_id, image_bytes)
            .await?;

        if candidates.is_empty() {
            info!("search returned no candidates");
            return Ok(AuthOutcome::NoMatch);
        }

        for candidate in &candidates {
            debug!(
                signature_id = %candidate.signature_id,
                confidence = candidate.confidence,
                "evaluating candidate"
            );

            if let Some(record) = self.directory.get_record(&candidate.signature_id).await? {
                info!(worker_id = %record.worker_id, "worker matched");
                return Ok(AuthOutcome::Match {
                    worker_id: record.worker_id,
                });
            }
        }

        info!(
            candidates = candidates.len(),
            "no candidate resolved to a registered worker"
        );
        Ok(AuthOutcome::NoMatch)
    }
}
