//! Error types for the dnswatch-core crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaselineError {
    #[error("Failed to read baseline {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write baseline {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in baseline {path}, line {line}: no ',' separator")]
    Malformed { path: PathBuf, line: usize },
}
