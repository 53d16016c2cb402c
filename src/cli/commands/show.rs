//! Show command - list locked plugin digests

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::error::PluginLockResult;
use crate::lock::{digest, DigestSet, LockManifest};
use console::style;
use std::collections::BTreeMap;

/// Execute the show command
pub async fn execute(args: ShowArgs, manifest: &LockManifest) -> PluginLockResult<()> {
    let digests = manifest.read();

    match args.format {
        OutputFormat::Json => print_json(&digests)?,
        _ if digests.is_empty() => println!("No plugins locked."),
        OutputFormat::Table => print_table(&digests),
        OutputFormat::Plain => print_plain(&digests),
    }

    Ok(())
}

fn print_table(digests: &DigestSet) {
    let width = digests.keys().map(|n| n.len()).max().unwrap_or(0).max(6);

    println!("{:<width$} {}", "PLUGIN", "SHA256", width = width);
    println!("{}", "-".repeat(width + 65));

    for (name, bytes) in digests {
        println!(
            "{:<width$} {}",
            style(name).cyan(),
            digest::encode(bytes),
            width = width
        );
    }

    println!();
    println!("Total: {} plugin(s)", digests.len());
}

fn print_json(digests: &DigestSet) -> PluginLockResult<()> {
    let encoded: BTreeMap<&str, String> = digests
        .iter()
        .map(|(name, bytes)| (name.as_str(), digest::encode(bytes)))
        .collect();

    println!("{}", serde_json::to_string_pretty(&encoded)?);
    Ok(())
}

fn print_plain(digests: &DigestSet) {
    for (name, bytes) in digests {
        println!("{} {}", name, digest::encode(bytes));
    }
}
