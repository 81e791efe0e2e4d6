use thiserror::Error;

use crate::browser::DriverError;
use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, BookError>;

/// Fatal errors. Per-slot failures never reach this type; they are
/// recorded as outcomes by the reservation flow and reported at the end.
#[derive(Debug, Error)]
pub enum BookError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The portal rejected the login or never showed the post-login page.
    #[error("login failed: {0}")]
    Auth(String),

    #[error(transparent)]
    Driver(#[from] DriverError),
}
