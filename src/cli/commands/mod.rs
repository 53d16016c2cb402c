//! CLI command implementations

pub mod config;
pub mod lock;
pub mod path;
pub mod remove;
pub mod show;
pub mod verify;

pub use config::execute as config;
pub use lock::execute as lock;
pub use path::execute as path;
pub use remove::execute as remove;
pub use show::execute as show;
pub use verify::execute as verify;
