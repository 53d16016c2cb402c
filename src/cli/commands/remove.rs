//! Remove command - drop plugins from the lock manifest

use crate::cli::args::RemoveArgs;
use crate::error::{PluginLockError, PluginLockResult};
use crate::lock::LockManifest;
use console::style;

/// Execute the remove command
pub async fn execute(args: RemoveArgs, manifest: &LockManifest) -> PluginLockResult<()> {
    let mut digests = manifest.read();

    if let Some(missing) = args.names.iter().find(|n| !digests.contains_key(*n)) {
        return Err(PluginLockError::PluginNotLocked(missing.clone()));
    }

    for name in &args.names {
        digests.remove(name);
    }

    manifest.write(&digests)?;

    for name in &args.names {
        println!("{} Removed {}", style("✓").green(), style(name).cyan());
    }

    Ok(())
}
