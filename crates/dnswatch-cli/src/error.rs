//! Error types for the dnswatch-cli crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Invalid subnet '{arg}': {reason}")]
    MalformedSubnet { arg: String, reason: String },

    #[error("Resolver setup failed: {0}")]
    Resolver(#[from] hickory_resolver::error::ResolveError),

    #[error("Baseline error: {0}")]
    Baseline(#[from] dnswatch_core::BaselineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;
