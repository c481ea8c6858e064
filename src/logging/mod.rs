//! Diagnostics and user-visible log lines.
//!
//! Internal diagnostics go through `tracing` to stderr. Anything the user
//! should see is returned as an [`Action::Print`] prefixed with the add-on
//! name, so the host prints it in its core buffer.

use crate::app::action::Action;
use crate::app::ADDON_NAME;
use crate::config::model::LoggingConfig;
use std::fmt::Display;
use tracing::Level;

/// Install the stderr subscriber. Unknown level names fall back to `info`.
pub fn init(config: &LoggingConfig) {
    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn info_line(message: impl Display) -> Action {
    Action::Print { error: false, text: format!("{}: {}", ADDON_NAME, message) }
}

pub fn error_line(message: impl Display) -> Action {
    Action::Print { error: true, text: format!("{}: {}", ADDON_NAME, message) }
}
