//! Path command - print the lock manifest location

use crate::error::PluginLockResult;
use crate::lock::LockManifest;

/// Execute the path command
pub async fn execute(manifest: &LockManifest) -> PluginLockResult<()> {
    println!("{}", manifest.path().display());
    Ok(())
}
