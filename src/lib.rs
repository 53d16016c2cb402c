//! pluginlock - Plugin integrity lock manifest
//!
//! Persists the expected digest of every trusted plugin so a host can
//! refuse to load any plugin binary that was not explicitly locked.

pub mod cli;
pub mod config;
pub mod error;
pub mod lock;

pub use error::{PluginLockError, PluginLockResult};
pub use lock::{DigestSet, LockManifest};
