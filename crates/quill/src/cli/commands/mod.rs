//! CLI commands

mod config;
mod preview;

pub use config::ConfigCommand;
pub use preview::PreviewCommand;
