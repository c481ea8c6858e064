//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub options: AddonOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// The add-on's own options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonOptions {
    /// Reopen a layout's missing buffers when it is applied.
    #[serde(default)]
    pub layout_apply: bool,
    /// Upper bound on remembered closed buffers.
    #[serde(default = "default_max_closed")]
    pub max_closed: usize,
}

impl Default for AddonOptions {
    fn default() -> Self {
        Self { layout_apply: false, max_closed: default_max_closed() }
    }
}

/// `(key, description)` for every add-on option.
pub const OPTIONS: &[(&str, &str)] = &[
    ("layout_apply", "open closed buffers on /layout apply"),
    ("max_closed", "maximum number of closed buffers to remember"),
];

impl AddonOptions {
    /// Current value of `key` as shown to the user, booleans as `on`/`off`.
    pub fn value_of(&self, key: &str) -> Option<String> {
        match key {
            "layout_apply" => Some(if self.layout_apply { "on" } else { "off" }.to_string()),
            "max_closed" => Some(self.max_closed.to_string()),
            _ => None,
        }
    }
}

/// `key: description (default: "value")` lines, as shown in option help.
pub fn describe_options() -> Vec<String> {
    let defaults = AddonOptions::default();
    OPTIONS
        .iter()
        .map(|(key, desc)| {
            let default = defaults.value_of(key).unwrap_or_default();
            format!("{}: {} (default: \"{}\")", key, desc, default)
        })
        .collect()
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` level name: error, warn, info, debug or trace.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

/// State of the headless host the binary simulates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Buffers open at startup.
    #[serde(default = "default_host_buffers")]
    pub buffers: Vec<String>,
    #[serde(default)]
    pub layouts: Vec<LayoutConfig>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { buffers: default_host_buffers(), layouts: Vec::new() }
    }
}

/// A saved layout: its name and the full names of the buffers it shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub name: String,
    #[serde(default)]
    pub buffers: Vec<String>,
}

fn default_max_closed() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_host_buffers() -> Vec<String> {
    vec!["core.weechat".to_string()]
}
