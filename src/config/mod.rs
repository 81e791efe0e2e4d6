pub mod credentials;
pub mod schedule;

pub use credentials::{Credentials, MasterKey};
pub use schedule::{ClockTime, Day, ReservationRequest, Schedule};

use std::path::PathBuf;
use thiserror::Error;

/// Bad or missing local configuration. Always fatal, and always raised
/// before the browser is launched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("credentials field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("schedule entry {index}: {reason}")]
    InvalidSlot { index: usize, reason: String },

    #[error("schedule contains no reservation slots")]
    EmptySchedule,

    #[error("no master key: set ROOMBOOK_KEY or pass --key-file")]
    MissingKey,

    #[error("cannot decrypt {}: {reason}", .path.display())]
    Decrypt { path: PathBuf, reason: String },

    #[error("cannot encrypt credentials: {0}")]
    Encrypt(String),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
