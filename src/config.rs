use std::env;

/// Runtime configuration for both handlers.
///
/// Every value can be overridden through the environment; the defaults match
/// the provisioned resource names.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bucket the Authenticator reads submitted images from.
    pub auth_bucket: String,
    /// Record store table mapping face signatures to worker ids.
    pub workers_table: String,
    /// Recognition collection holding all enrolled worker faces.
    pub face_collection: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            auth_bucket: env_or("WORKER_AUTH_BUCKET", "workerauthbucket"),
            workers_table: env_or("WORKERS_TABLE", "forceagriworkers"),
            face_collection: env_or("FACE_COLLECTION_ID", "workers"),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
