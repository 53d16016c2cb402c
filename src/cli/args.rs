//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pluginlock - Plugin integrity lock manifest
///
/// Records the SHA256 digest of every trusted plugin binary and checks
/// plugins against it before they are loaded.
#[derive(Parser, Debug)]
#[command(name = "pluginlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PLUGINLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Plugin cache directory (overrides config)
    #[arg(long, global = true, env = "PLUGINLOCK_PLUGIN_DIR")]
    pub plugin_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show locked plugin digests
    Show(ShowArgs),

    /// Hash plugin binaries and record their digests
    Lock(LockArgs),

    /// Remove plugins from the lock manifest
    Remove(RemoveArgs),

    /// Check a plugin binary against its locked digest
    Verify(VerifyArgs),

    /// Show lock manifest path
    Path,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the lock command
#[derive(Parser, Debug)]
pub struct LockArgs {
    /// Plugins to lock (NAME=PATH)
    #[arg(required = true)]
    pub plugins: Vec<String>,

    /// Keep existing entries instead of replacing the whole manifest
    #[arg(short, long)]
    pub merge: bool,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Plugin identifiers to remove
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Plugin identifier
    pub name: String,

    /// Path to the plugin binary
    pub path: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for show command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
