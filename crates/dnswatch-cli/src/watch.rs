//! Per-subnet pipeline: sweep, then persist or reconcile.

use std::sync::Arc;

use dnswatch_core::baseline::BaselineStore;
use dnswatch_core::diff::{diff, DiffReport};

use crate::config::WatchConfig;
use crate::error::Result;
use crate::resolver::ReverseResolver;
use crate::sweep;

/// Run one subnet through the full pipeline.
///
/// With `prepare` set — or when no baseline exists yet, which promotes the
/// run to prepare mode — the sweep result overwrites the stored baseline.
/// Otherwise the sweep is diffed against the baseline and the report is
/// printed: mismatch lines always, match lines and the prepare echo only
/// when `verbose`. The baseline is never written in watch mode.
pub async fn watch_subnet(
    resolver: Arc<dyn ReverseResolver>,
    store: &BaselineStore,
    config: &WatchConfig,
    subnet: &str,
    prepare: bool,
    verbose: bool,
) -> Result<()> {
    let net = sweep::parse_subnet(subnet)?;
    let prepare = prepare || !store.exists(subnet);

    let current = sweep::sweep(resolver, net, config.max_in_flight_lookups).await;

    if prepare {
        if verbose {
            for (addr, hostname) in current.iter_sorted() {
                println!("{addr}: {hostname}");
            }
        }
        store.save(subnet, &current)?;
        tracing::info!(
            subnet = %subnet,
            entries = current.len(),
            "Baseline prepared"
        );
    } else {
        let stored = store.load(subnet)?;
        let report = diff(&current, stored);
        print_report(&report, verbose);
        tracing::info!(
            subnet = %subnet,
            matches = report.summary.matches,
            mismatches = report.summary.mismatches,
            "Watch complete"
        );
    }

    Ok(())
}

/// Print verdicts: mismatches always, matches only in verbose mode.
fn print_report(report: &DiffReport, verbose: bool) {
    for verdict in &report.verdicts {
        if verdict.is_mismatch() || verbose {
            println!("{verdict}");
        }
    }
}
