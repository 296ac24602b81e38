//! Subnet enumeration and the reverse-DNS sweep.

use std::net::Ipv4Addr;
use std::sync::Arc;

use ipnet::{Ipv4AddrRange, Ipv4Net};
use tokio::sync::Semaphore;

use dnswatch_core::types::{is_local_name, HostMapping};

use crate::error::{Result, WatchError};
use crate::resolver::ReverseResolver;

/// Parse a CIDR subnet argument.
///
/// Host bits must be zero: `192.168.1.5/24` is rejected, matching strict
/// network-notation semantics.
pub fn parse_subnet(arg: &str) -> Result<Ipv4Net> {
    let net: Ipv4Net = arg.parse().map_err(|e: ipnet::AddrParseError| {
        WatchError::MalformedSubnet {
            arg: arg.to_string(),
            reason: e.to_string(),
        }
    })?;

    if net.addr() != net.network() {
        return Err(WatchError::MalformedSubnet {
            arg: arg.to_string(),
            reason: "host bits set".to_string(),
        });
    }

    Ok(net)
}

/// Every address in the block, network and broadcast included.
pub fn enumerate(net: Ipv4Net) -> Vec<Ipv4Addr> {
    Ipv4AddrRange::new(net.network(), net.broadcast()).collect()
}

/// Sweep every address of the subnet with a reverse lookup.
///
/// One lookup task per address, bounded by `max_in_flight`. Addresses that
/// do not resolve, or resolve to a `.local` name, contribute no entry, and
/// an individual failure never aborts the sweep. The mapping is assembled
/// in enumeration order regardless of completion order.
pub async fn sweep(
    resolver: Arc<dyn ReverseResolver>,
    net: Ipv4Net,
    max_in_flight: usize,
) -> HostMapping {
    let limiter = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut handles = Vec::new();

    for addr in enumerate(net) {
        let resolver = resolver.clone();
        let limiter = limiter.clone();
        handles.push(tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await.expect("Semaphore closed");
            (addr, resolver.reverse_lookup(addr).await)
        }));
    }

    let mut mapping = HostMapping::new();
    for handle in handles {
        match handle.await {
            Ok((addr, Some(hostname))) if !is_local_name(&hostname) => {
                mapping.insert(addr.to_string(), hostname);
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Lookup task panicked"),
        }
    }

    mapping
}
