//! Snapshot reconciliation: classify every address of a sweep against the
//! stored baseline.

use std::fmt;

use crate::types::HostMapping;

/// Classification of a single address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Stored and current hostnames agree.
    Match { addr: String, hostname: String },
    /// Stored and current hostnames differ; either side may be absent.
    Mismatch {
        addr: String,
        stored: Option<String>,
        current: Option<String>,
    },
}

impl Verdict {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Verdict::Mismatch { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match { addr, hostname } => write!(f, "OK: {addr} ({hostname})"),
            Verdict::Mismatch {
                addr,
                stored,
                current,
            } => write!(
                f,
                "MISMATCH: {addr} (STORED: {}, NOW: {})",
                stored.as_deref().unwrap_or("None"),
                current.as_deref().unwrap_or("None"),
            ),
        }
    }
}

/// Counts for a completed diff.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    pub matches: u32,
    pub mismatches: u32,
}

/// The outcome of diffing a sweep against a baseline.
#[derive(Debug)]
pub struct DiffReport {
    pub verdicts: Vec<Verdict>,
    pub summary: DiffSummary,
}

/// Compare the current sweep against the stored baseline.
///
/// Addresses present in `current` are classified in ascending string order
/// of the address; each one pops its baseline entry, so whatever remains in
/// `stored` afterwards was in the baseline but not observed now. Those
/// leftovers are reported as mismatches with an absent current side, in
/// baseline order.
pub fn diff(current: &HostMapping, mut stored: HostMapping) -> DiffReport {
    let mut verdicts = Vec::with_capacity(current.len() + stored.len());

    for (addr, hostname) in current.iter_sorted() {
        let verdict = match stored.remove(addr) {
            Some(prev) if prev == hostname => Verdict::Match {
                addr: addr.to_string(),
                hostname: hostname.to_string(),
            },
            prev => Verdict::Mismatch {
                addr: addr.to_string(),
                stored: prev,
                current: Some(hostname.to_string()),
            },
        };
        verdicts.push(verdict);
    }

    for (addr, hostname) in stored.iter() {
        verdicts.push(Verdict::Mismatch {
            addr: addr.to_string(),
            stored: Some(hostname.to_string()),
            current: None,
        });
    }

    let mismatches = verdicts.iter().filter(|v| v.is_mismatch()).count() as u32;
    let matches = verdicts.len() as u32 - mismatches;

    DiffReport {
        verdicts,
        summary: DiffSummary {
            matches,
            mismatches,
        },
    }
}
