pub mod error;
pub mod handler;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use server::{create_app, AppState};
