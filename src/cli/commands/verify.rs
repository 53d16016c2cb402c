//! Verify command - check a plugin binary against its locked digest

use crate::cli::args::VerifyArgs;
use crate::error::{PluginLockError, PluginLockResult};
use crate::lock::{digest, sha256_file, LockManifest};
use console::style;

/// Execute the verify command
pub async fn execute(args: VerifyArgs, manifest: &LockManifest) -> PluginLockResult<()> {
    let digests = manifest.read();

    let expected = digests
        .get(&args.name)
        .ok_or_else(|| PluginLockError::PluginNotLocked(args.name.clone()))?;

    let actual = sha256_file(&args.path)?;
    if actual != *expected {
        return Err(PluginLockError::DigestMismatch {
            name: args.name,
            expected: digest::encode(expected),
            actual: digest::encode(&actual),
        });
    }

    println!(
        "{} {} matches locked digest",
        style("✓").green(),
        style(&args.name).cyan()
    );

    Ok(())
}
