pub mod card;
pub mod config;
pub mod error;
pub mod image;
pub mod logo;
pub mod palette;
pub mod session;
pub mod token;

// Re-export common error type
pub use error::{BrandkitError, Result};
pub use session::{AuthDataPatch, AuthSession, NoopExpiryHandler, SessionExpiryHandler, SessionStore};
