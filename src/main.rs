//! pluginlock - Plugin integrity lock manifest
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use pluginlock::cli::{Cli, Commands};
use pluginlock::config::ConfigManager;
use pluginlock::error::PluginLockResult;
use pluginlock::lock::LockManifest;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PluginLockResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let mut config = config_manager.load().await?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("pluginlock=warn"),
        1 => EnvFilter::new("pluginlock=info"),
        _ => EnvFilter::new("pluginlock=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    if let Some(dir) = cli.plugin_dir {
        debug!("Plugin dir overridden: {}", dir.display());
        config.plugins.dir = Some(dir);
    }

    let manifest = LockManifest::new(config.manifest_path());
    debug!("Lock manifest: {}", manifest.path().display());

    match cli.command {
        Commands::Show(args) => pluginlock::cli::commands::show(args, &manifest).await,
        Commands::Lock(args) => pluginlock::cli::commands::lock(args, &manifest).await,
        Commands::Remove(args) => pluginlock::cli::commands::remove(args, &manifest).await,
        Commands::Verify(args) => pluginlock::cli::commands::verify(args, &manifest).await,
        Commands::Path => pluginlock::cli::commands::path(&manifest).await,
        Commands::Config(args) => {
            pluginlock::cli::commands::config(args, &config_manager, &config).await
        }
    }
}
