//! Baseline persistence — one plain-text file per subnet.
//!
//! Baselines live under a settings directory (by default `~/.dnswatch`),
//! one file per subnet, named after the CIDR with `/` replaced by `_`:
//!
//! ```text
//! {root}/
//!   192.168.1.0_24
//!   10.0.0.0_16
//! ```
//!
//! Format: one `address,hostname` record per line, no header. Hostnames
//! containing commas are not supported.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BaselineError;
use crate::types::{is_local_name, HostMapping};

/// File-system backed baseline store.
///
/// The root directory is injected rather than derived from the process
/// environment, so tests can point the store at a temporary directory.
#[derive(Debug, Clone)]
pub struct BaselineStore {
    root: PathBuf,
}

impl BaselineStore {
    /// Open a store rooted at the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, BaselineError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| BaselineError::Write {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Baseline file path for a subnet: the CIDR string with `/` → `_`.
    pub fn path_for(&self, subnet: &str) -> PathBuf {
        self.root.join(subnet.replace('/', "_"))
    }

    /// True if a baseline has been written for this subnet.
    pub fn exists(&self, subnet: &str) -> bool {
        self.path_for(subnet).exists()
    }

    /// Overwrite the baseline for `subnet` with the given mapping.
    ///
    /// `.local` entries are dropped. The content is assembled in memory and
    /// written in a single call; the previous baseline is fully replaced,
    /// never merged.
    pub fn save(&self, subnet: &str, mapping: &HostMapping) -> Result<(), BaselineError> {
        let path = self.path_for(subnet);

        let mut content = String::new();
        let mut entries = 0usize;
        for (addr, hostname) in mapping.iter() {
            if is_local_name(hostname) {
                continue;
            }
            content.push_str(addr);
            content.push(',');
            content.push_str(hostname);
            content.push('\n');
            entries += 1;
        }

        fs::write(&path, content).map_err(|source| BaselineError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            subnet = %subnet,
            path = %path.display(),
            entries,
            "Baseline written"
        );

        Ok(())
    }

    /// Load the baseline for `subnet`.
    ///
    /// Each line splits on the first comma; for duplicate addresses the
    /// last record wins. A line without a comma is a malformed record and
    /// fails the load.
    pub fn load(&self, subnet: &str) -> Result<HostMapping, BaselineError> {
        let path = self.path_for(subnet);
        let content = fs::read_to_string(&path).map_err(|source| BaselineError::Read {
            path: path.clone(),
            source,
        })?;

        let mut mapping = HostMapping::new();
        for (idx, line) in content.lines().enumerate() {
            let Some((addr, hostname)) = line.split_once(',') else {
                return Err(BaselineError::Malformed {
                    path: path.clone(),
                    line: idx + 1,
                });
            };
            mapping.insert(addr, hostname);
        }

        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapping() -> HostMapping {
        let mut mapping = HostMapping::new();
        mapping.insert("192.168.1.1", "router.example.org");
        mapping.insert("192.168.1.20", "nas.example.org");
        mapping.insert("192.168.1.5", "desk.example.org");
        mapping
    }

    #[test]
    fn path_replaces_slash_with_underscore() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();
        assert_eq!(
            store.path_for("192.168.1.0/24"),
            dir.path().join("192.168.1.0_24")
        );
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();
        let mapping = sample_mapping();

        assert!(!store.exists("192.168.1.0/24"));
        store.save("192.168.1.0/24", &mapping).unwrap();
        assert!(store.exists("192.168.1.0/24"));

        let loaded = store.load("192.168.1.0/24").unwrap();
        assert_eq!(loaded, mapping);
    }

    #[test]
    fn save_skips_local_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();

        let mut mapping = sample_mapping();
        mapping.insert("192.168.1.33", "chromecast.local");
        store.save("192.168.1.0/24", &mapping).unwrap();

        let loaded = store.load("192.168.1.0/24").unwrap();
        assert_eq!(loaded, sample_mapping());
    }

    #[test]
    fn save_overwrites_instead_of_merging() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();

        store.save("10.0.0.0/24", &sample_mapping()).unwrap();

        let mut replacement = HostMapping::new();
        replacement.insert("10.0.0.7", "only.example.org");
        store.save("10.0.0.0/24", &replacement).unwrap();

        let loaded = store.load("10.0.0.0/24").unwrap();
        assert_eq!(loaded, replacement);
    }

    #[test]
    fn repeated_save_produces_identical_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();
        let mapping = sample_mapping();

        store.save("192.168.1.0/24", &mapping).unwrap();
        let first = fs::read(store.path_for("192.168.1.0/24")).unwrap();

        store.save("192.168.1.0/24", &mapping).unwrap();
        let second = fs::read(store.path_for("192.168.1.0/24")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn load_missing_baseline_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();

        let result = store.load("172.16.0.0/12");
        assert!(matches!(result, Err(BaselineError::Read { .. })));
    }

    #[test]
    fn load_keeps_file_order_and_last_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();
        let path = store.path_for("10.1.0.0/24");
        fs::write(
            &path,
            "10.1.0.9,nine\n10.1.0.1,one\n10.1.0.9,nine-again\n",
        )
        .unwrap();

        let loaded = store.load("10.1.0.0/24").unwrap();
        assert_eq!(loaded.get("10.1.0.9"), Some("nine-again"));
        let addrs: Vec<&str> = loaded.iter().map(|(a, _)| a).collect();
        assert_eq!(addrs, vec!["10.1.0.9", "10.1.0.1"]);
    }

    #[test]
    fn load_rejects_record_without_comma() {
        let dir = tempfile::tempdir().unwrap();
        let store = BaselineStore::open(dir.path()).unwrap();
        let path = store.path_for("10.2.0.0/24");
        fs::write(&path, "10.2.0.1,one\ngarbage-line\n").unwrap();

        let result = store.load("10.2.0.0/24");
        assert!(matches!(
            result,
            Err(BaselineError::Malformed { line: 2, .. })
        ));
    }
}
