//! Core domain types for host mappings.

use indexmap::IndexMap;

/// Reserved suffix for names answered by local-only multicast resolution.
/// An address advertising a `.local` name counts as unresolved.
pub const LOCAL_SUFFIX: &str = ".local";

/// True if the hostname ends in the reserved local-resolution suffix.
pub fn is_local_name(hostname: &str) -> bool {
    hostname.ends_with(LOCAL_SUFFIX)
}

/// A mapping from dotted-quad IPv4 address to resolved hostname.
///
/// Insertion order is preserved: a sweep keeps enumeration order, a loaded
/// baseline keeps file order. Inserting a duplicate address replaces the
/// hostname but keeps the original position, so the last occurrence wins
/// without reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostMapping {
    entries: IndexMap<String, String>,
}

impl HostMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, addr: impl Into<String>, hostname: impl Into<String>) {
        self.entries.insert(addr.into(), hostname.into());
    }

    pub fn get(&self, addr: &str) -> Option<&str> {
        self.entries.get(addr).map(String::as_str)
    }

    pub fn contains(&self, addr: &str) -> bool {
        self.entries.contains_key(addr)
    }

    /// Remove an entry, keeping the relative order of the remaining ones.
    pub fn remove(&mut self, addr: &str) -> Option<String> {
        self.entries.shift_remove(addr)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries in ascending string order of the address.
    ///
    /// The order is lexicographic, not numeric: `10.0.0.10` sorts before
    /// `10.0.0.2`.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl FromIterator<(String, String)> for HostMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
