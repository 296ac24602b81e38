//! dnswatch-core: host mappings, baseline persistence, and diff logic for
//! the dnswatch reverse-DNS subnet watcher.
//!
//! This crate holds everything that does not need a network:
//! - The [`types::HostMapping`] address→hostname map built by a sweep
//! - Baseline snapshots persisted per subnet ([`baseline::BaselineStore`])
//! - Reconciliation of a sweep against a stored baseline ([`diff::diff`])

pub mod baseline;
pub mod diff;
pub mod error;
pub mod types;

pub use error::BaselineError;
