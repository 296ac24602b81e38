//! dnswatch-cli: reverse-DNS subnet watcher.
//!
//! Sweeps every address of the given subnets with PTR lookups, snapshots
//! the results as per-subnet baselines, and on later runs reports
//! mismatches between the stored baseline and the current sweep.

pub mod config;
pub mod error;
pub mod resolver;
pub mod sweep;
pub mod watch;
