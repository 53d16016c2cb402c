//! Plugin binary hashing and hex digest encoding

use crate::error::{PluginLockError, PluginLockResult};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

/// Hash a plugin binary with SHA256, returning the raw 32-byte digest
pub fn sha256_file(path: &Path) -> PluginLockResult<Vec<u8>> {
    let mut file = File::open(path)
        .map_err(|e| PluginLockError::io(format!("opening plugin {}", path.display()), e))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .map_err(|e| PluginLockError::io(format!("reading plugin {}", path.display()), e))?;

    let digest = hasher.finalize().to_vec();
    debug!("Hashed {}: {}", path.display(), encode(&digest));
    Ok(digest)
}

/// Encode a digest as lowercase hex
pub fn encode(digest: &[u8]) -> String {
    hex::encode(digest)
}

/// Decode a hex digest. Empty, odd-length and non-hex input is rejected.
pub fn decode(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() {
        return None;
    }
    hex::decode(value).ok()
}
