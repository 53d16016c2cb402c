//! Plugin integrity lock manifest
//!
//! Records the expected digest of every trusted plugin in a single JSON
//! file inside the plugin cache directory.
//!
//! # Security Model
//!
//! - A missing or corrupt manifest reads as an empty set (trust nothing)
//! - A malformed digest drops only its own entry
//! - Every write replaces the whole trust set
//!
//! # File Format
//!
//! | Key | Value |
//! |-----|-------|
//! | plugin identifier | lowercase hex digest |

pub mod digest;
pub mod manifest;

pub use digest::sha256_file;
pub use manifest::{DigestSet, LockManifest, LOCK_FILE_NAME};
