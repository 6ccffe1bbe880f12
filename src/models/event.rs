//! Typed decoding of the object-created notification that triggers the
//! Registrar.
//!
//! The trigger payload nests the interesting fields several levels deep.
//! Decoding is explicit and fails closed: a payload without records, or with
//! an empty bucket or key, is a structured error rather than a panic on a
//! missing index.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventDecodeError {
    #[error("malformed object-created notification: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("notification contained no records")]
    NoRecords,

    #[error("notification record is missing the object {0}")]
    MissingField(&'static str),
}

/// Storage-object reference extracted from a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObjectRef {
    pub bucket: String,
    pub key: String,
}

/// Object-created notification as delivered by the storage trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectCreatedEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

impl ObjectCreatedEvent {
    pub fn from_json(payload: &serde_json::Value) -> Result<Self, EventDecodeError> {
        Ok(serde_json::from_value(payload.clone())?)
    }

    /// The storage object the notification is about.
    ///
    /// Notifications batch records in principle; only the first one is acted
    /// on here.
    pub fn first_object(&self) -> Result<StoredObjectRef, EventDecodeError> {
        let record = self.records.first().ok_or(EventDecodeError::NoRecords)?;
        if self.records.len() > 1 {
            tracing::warn!(
                records = self.records.len(),
                "notification carried multiple records, processing the first only"
            );
        }
        if record.s3.bucket.name.is_empty() {
            return Err(EventDecodeError::MissingField("bucket name"));
        }
        if record.s3.object.key.is_empty() {
            return Err(EventDecodeError::MissingField("key"));
        }
        Ok(StoredObjectRef {
            bucket: record.s3.bucket.name.clone(),
            key: record.s3.object.key.clone(),
        })
    }
}
