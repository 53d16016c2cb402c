//! Lock manifest persistence
//!
//! The manifest maps plugin identifiers to the digest each plugin binary
//! must have before it may be loaded. Reading is fail-closed: anything that
//! prevents a clean read yields an empty set, which rejects every plugin
//! until the manifest is written again.

use crate::error::{PluginLockError, PluginLockResult};
use crate::lock::digest;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Default manifest file name inside the plugin cache directory
pub const LOCK_FILE_NAME: &str = "providers.json";

/// Trusted digests keyed by plugin identifier.
///
/// Digests must be non-empty: an empty value has no hex form that reads
/// back, so `LockManifest::write` rejects it.
pub type DigestSet = BTreeMap<String, Vec<u8>>;

/// Handle to the lock manifest at a fixed path
#[derive(Debug, Clone)]
pub struct LockManifest {
    path: PathBuf,
}

impl LockManifest {
    /// Create a manifest handle for an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a manifest handle for `providers.json` inside a plugin directory
    pub fn in_dir(plugin_dir: &Path) -> Self {
        Self::new(plugin_dir.join(LOCK_FILE_NAME))
    }

    /// Get the manifest file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the trusted digests.
    ///
    /// Never fails. An unreadable or unparsable file returns an empty set,
    /// and entries whose digest is not valid hex are skipped.
    pub fn read(&self) -> DigestSet {
        let mut digests = DigestSet::new();

        let buf = match fs::read(&self.path) {
            Ok(buf) => buf,
            Err(e) => {
                // Expected before the first lock
                info!(
                    "Failed to read plugin lock file {}: {}",
                    self.path.display(),
                    e
                );
                return digests;
            }
        };

        let encoded: HashMap<String, String> = match serde_json::from_slice(&buf) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(
                    "Plugin lock file {} failed to parse as JSON: {}",
                    self.path.display(),
                    e
                );
                return digests;
            }
        };

        for (name, value) in encoded {
            match digest::decode(&value) {
                Some(bytes) => {
                    digests.insert(name, bytes);
                }
                None => warn!(
                    "Plugin lock file {} has invalid digest for {:?}",
                    self.path.display(),
                    name
                ),
            }
        }

        debug!(
            "Loaded {} plugin digests from {}",
            digests.len(),
            self.path.display()
        );
        digests
    }

    /// Replace the trusted digests.
    ///
    /// The given set must be complete: nothing from the previous manifest
    /// is kept.
    pub fn write(&self, digests: &DigestSet) -> PluginLockResult<()> {
        if let Some((name, _)) = digests.iter().find(|(_, bytes)| bytes.is_empty()) {
            return Err(PluginLockError::EmptyDigest(name.clone()));
        }

        let encoded: BTreeMap<&str, String> = digests
            .iter()
            .map(|(name, bytes)| (name.as_str(), digest::encode(bytes)))
            .collect();

        let content = serde_json::to_string_pretty(&encoded)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // The write below reports a more specific error if this failed
        if let Err(e) = fs::create_dir_all(parent) {
            debug!("Failed to create {}: {}", parent.display(), e);
        }

        // Each call stages into its own file; it is removed on drop if not persisted
        let mut staging = NamedTempFile::new_in(parent).map_err(|e| self.persist_error(e))?;
        staging
            .write_all(content.as_bytes())
            .map_err(|e| self.persist_error(e))?;
        staging
            .persist(&self.path)
            .map_err(|e| self.persist_error(e.error))?;

        debug!(
            "Wrote {} plugin digests to {}",
            digests.len(),
            self.path.display()
        );
        Ok(())
    }

    fn persist_error(&self, source: std::io::Error) -> PluginLockError {
        PluginLockError::Persist {
            path: self.path.clone(),
            source,
        }
    }
}
