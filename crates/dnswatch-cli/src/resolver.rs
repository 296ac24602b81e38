//! Reverse-DNS lookups against the platform resolver.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::error::Result;

/// A reverse-DNS lookup capability.
///
/// Per-address failure is not an error: a missing PTR record, a timeout,
/// or a server failure all yield `None`, never abort a sweep.
#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// PTR lookup for a single address.
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Option<String>;
}

/// Resolver backed by the system DNS configuration.
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    /// Build a resolver from the platform configuration.
    ///
    /// `timeout` bounds each lookup; a single attempt per address, no
    /// retries.
    pub fn from_system_conf(timeout: Duration) -> Result<Self> {
        let (config, mut opts) = read_system_conf()?;
        opts.timeout = timeout;
        opts.attempts = 1;
        Ok(Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        })
    }
}

#[async_trait]
impl ReverseResolver for SystemResolver {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Option<String> {
        match self.inner.reverse_lookup(IpAddr::V4(addr)).await {
            // First PTR record wins; trim the trailing root dot.
            Ok(lookup) => lookup
                .iter()
                .next()
                .map(|ptr| ptr.to_string().trim_end_matches('.').to_string()),
            Err(e) => {
                tracing::debug!(addr = %addr, error = %e, "Reverse lookup failed");
                None
            }
        }
    }
}
