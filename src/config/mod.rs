pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::AppConfig;

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bufopen")
        .join("config.toml")
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("bufopen-test-missing").join("config.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.options.max_closed, 10);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("bufopen-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.options.layout_apply = true;
        config.options.max_closed = 3;
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        assert!(loaded.options.layout_apply);
        assert_eq!(loaded.options.max_closed, 3);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
