//! Lock command - hash plugin binaries and record their digests

use crate::cli::args::LockArgs;
use crate::error::{PluginLockError, PluginLockResult};
use crate::lock::{digest, sha256_file, DigestSet, LockManifest};
use console::style;
use std::path::PathBuf;
use tracing::debug;

/// Execute the lock command
pub async fn execute(args: LockArgs, manifest: &LockManifest) -> PluginLockResult<()> {
    let specs = args
        .plugins
        .iter()
        .map(|s| parse_plugin_spec(s))
        .collect::<PluginLockResult<Vec<_>>>()?;

    let mut digests = if args.merge {
        manifest.read()
    } else {
        DigestSet::new()
    };

    let mut locked = Vec::with_capacity(specs.len());
    for (name, path) in specs {
        let bytes = sha256_file(&path)?;
        debug!("Locking {} from {}", name, path.display());
        locked.push((name.clone(), digest::encode(&bytes)));
        digests.insert(name, bytes);
    }

    manifest.write(&digests)?;

    for (name, hex) in &locked {
        println!("{} {} {}", style("✓").green(), style(name).cyan(), style(hex).dim());
    }
    println!(
        "Locked {} plugin(s) in {}",
        digests.len(),
        manifest.path().display()
    );

    Ok(())
}

/// Parse a plugin spec in NAME=PATH format
fn parse_plugin_spec(s: &str) -> PluginLockResult<(String, PathBuf)> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(PluginLockError::InvalidPluginSpec(s.to_string())),
    }
}
