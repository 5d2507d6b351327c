#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "web")]
pub mod web_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
