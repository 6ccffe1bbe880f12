// In-memory collaborator fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use worker_faceid::clients::{ClientError, FaceIndex, ObjectStore, WorkerDirectory};
use worker_faceid::models::{FaceMatch, IndexedFace, WorkerRecord};

/// Object storage fake keyed by `bucket/key`.
#[derive(Default)]
pub struct FakeObjectStore {
    objects: HashMap<String, Vec<u8>>,
}

impl FakeObjectStore {
    pub fn with_object(mut self, bucket: &str, key: &str, bytes: &[u8]) -> Self {
        self.objects
            .insert(format!("{}/{}", bucket, key), bytes.to_vec());
        self
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ClientError> {
        self.objects
            .get(&format!("{}/{}", bucket, key))
            .cloned()
            .ok_or_else(|| ClientError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

/// Recognition fake: enrollment results keyed by object key, search results
/// keyed by image bytes, plus a set of images it finds no face in.
#[derive(Default)]
pub struct FakeFaceIndex {
    indexed: HashMap<String, Vec<IndexedFace>>,
    matches: HashMap<Vec<u8>, Vec<FaceMatch>>,
    faceless: Vec<Vec<u8>>,
}

impl FakeFaceIndex {
    pub fn indexing(mut self, key: &str, signature_ids: &[&str]) -> Self {
        self.indexed.insert(
            key.to_string(),
            signature_ids
                .iter()
                .map(|id| IndexedFace {
                    signature_id: id.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn matching(mut self, image: &[u8], candidates: Vec<FaceMatch>) -> Self {
        self.matches.insert(image.to_vec(), candidates);
        self
    }

    pub fn without_face(mut self, image: &[u8]) -> Self {
        self.faceless.push(image.to_vec());
        self
    }
}

#[async_trait]
impl FaceIndex for FakeFaceIndex {
    async fn index_face(
        &self,
        _bucket: &str,
        key: &str,
        _collection_id: &str,
    ) -> Result<Vec<IndexedFace>, ClientError> {
        Ok(self.indexed.get(key).cloned().unwrap_or_default())
    }

    async fn search_by_image(
        &self,
        _collection_id: &str,
        image_bytes: Vec<u8>,
    ) -> Result<Vec<FaceMatch>, ClientError> {
        if self.faceless.contains(&image_bytes) {
            return Err(ClientError::NoFaceDetected);
        }
        Ok(self.matches.get(&image_bytes).cloned().unwrap_or_default())
    }
}

/// Record store fake over a plain map keyed by signature id.
#[derive(Default)]
pub struct FakeWorkerDirectory {
    records: Mutex<HashMap<String, WorkerRecord>>,
}

impl FakeWorkerDirectory {
    pub fn with_record(self, signature_id: &str, worker_id: &str) -> Self {
        self.records.lock().unwrap().insert(
            signature_id.to_string(),
            WorkerRecord {
                signature_id: signature_id.to_string(),
                worker_id: worker_id.to_string(),
            },
        );
        self
    }

    pub fn records(&self) -> Vec<WorkerRecord> {
        self.records.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl WorkerDirectory for FakeWorkerDirectory {
    async fn get_record(&self, signature_id: &str) -> Result<Option<WorkerRecord>, ClientError> {
        Ok(self.records.lock().unwrap().get(signature_id).cloned())
    }

    async fn put_record(&self, record: &WorkerRecord) -> Result<(), ClientError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.signature_id.clone(), record.clone());
        Ok(())
    }
}

pub fn candidate(signature_id: &str, confidence: f32) -> FaceMatch {
    FaceMatch {
        signature_id: signature_id.to_string(),
        confidence,
    }
}
