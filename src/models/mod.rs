pub mod event;


use serde::{Deserialize, Serialize};

/// Persisted mapping from an indexed face signature to the worker that owns
/// it. One record per enrolled face, keyed by `signature_id`; never mutated
/// after creation.
///
/// Serialized field names match the record store's attribute names so
/// previously written records stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRecord {
    #[serde(rename = "rekognitionId")]
    pub signature_id: String,
    #[serde(rename = "workerId")]
    pub worker_id: String,
}

/// One ranked candidate returned by a face search, best-first in collaborator
/// order. Ephemeral: discarded once the first candidate with a record store
/// entry is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMatch {
    pub signature_id: String,
    pub confidence: f32,
}

/// A face newly indexed into the recognition collection during enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFace {
    pub signature_id: String,
}

/// Response body for the authentication endpoint - field names are part of
/// the contract with existing browser clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "workerId", skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
}

impl AuthResponse {
    pub fn success(worker_id: String) -> Self {
        Self {
            message: "Success".to_string(),
            worker_id: Some(worker_id),
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            worker_id: None,
        }
    }
}
