pub mod api;
pub mod clients;
pub mod config;
pub mod identity;
pub mod models;

// Re-export commonly used types
pub use clients::{ClientError, FaceIndex, ObjectStore, WorkerDirectory};
pub use config::AppConfig;
pub use identity::{AuthOutcome, Authenticator, RegistrationError, Registrar};
pub use models::{AuthResponse, FaceMatch, IndexedFace, WorkerRecord};
