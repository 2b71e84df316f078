//! Global config file source: $XDG_CONFIG_HOME/studyplan/config.toml or ~/.config/studyplan/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::PathBuf;
use tracing::warn;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .or_else(|| directories::BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))?;
    Some(config_home.join("studyplan").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    let Some(path) = global_config_path() else {
        return builder;
    };
    if path.exists() {
        let canonical = path.canonicalize().unwrap_or(path);
        builder.add_source(File::from(canonical).required(false))
    } else {
        warn!(
            config_path = %path.display(),
            "Global configuration file not found. Consider creating it for user-level defaults."
        );
        builder
    }
}
