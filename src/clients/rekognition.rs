use async_trait::async_trait;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client;
use tracing::debug;

use super::{ClientError, FaceIndex};
use crate::models::{FaceMatch, IndexedFace};

/// Face recognition adapter backed by Rekognition.
///
/// Enrollment indexes straight from the stored object; search submits raw
/// image bytes. Both operate on the one configured collection.
pub struct RekognitionFaceIndex {
    client: Client,
}

impl RekognitionFaceIndex {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl FaceIndex for RekognitionFaceIndex {
    async fn index_face(
        &self,
        bucket: &str,
        key: &str,
        collection_id: &str,
    ) -> Result<Vec<IndexedFace>, ClientError> {
        debug!(
            "Indexing faces from {}/{} into collection {}",
            bucket, key, collection_id
        );

        let image = Image::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();

        let response = self
            .client
            .index_faces()
            .collection_id(collection_id)
            .image(image)
            .send()
            .await
            .map_err(|err| ClientError::Service {
                service: "rekognition",
                message: err.into_service_error().to_string(),
            })?;

        let indexed = response
            .face_records()
            .iter()
            .filter_map(|record| record.face())
            .filter_map(|face| face.face_id())
            .map(|face_id| IndexedFace {
                signature_id: face_id.to_string(),
            })
            .collect();

        Ok(indexed)
    }

    async fn search_by_image(
        &self,
        collection_id: &str,
        image_bytes: Vec<u8>,
    ) -> Result<Vec<FaceMatch>, ClientError> {
        debug!("Searching collection {} by image", collection_id);

        let image = Image::builder().bytes(Blob::new(image_bytes)).build();

        let response = self
            .client
            .search_faces_by_image()
            .collection_id(collection_id)
            .image(image)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                // Rekognition signals "no detectable face in the image" as an
                // invalid parameter on the search call.
                if service_err.is_invalid_parameter_exception() {
                    ClientError::NoFaceDetected
                } else {
                    ClientError::Service {
                        service: "rekognition",
                        message: service_err.to_string(),
                    }
                }
            })?;

        // Candidate order is the collaborator's best-first ranking.
        let matches = response
            .face_matches()
            .iter()
            .filter_map(|candidate| candidate.face())
            .filter_map(|face| {
                face.face_id().map(|face_id| FaceMatch {
                    signature_id: face_id.to_string(),
                    confidence: face.confidence().unwrap_or_default(),
                })
            })
            .collect();

        Ok(matches)
    }
}
