// Identity flows - enrollment and matching logic with no HTTP concerns.

pub mod authenticator;
pub mod registrar;

pub use authenticator::{AuthOutcome, Authenticator};
pub use registrar::{RegistrationError, Registrar};
