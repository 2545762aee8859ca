//! # Configuration Loader / 配置加载器
//!
//! Reads `connectu.toml` into the pure-data [`AppConfig`]. No validation and
//! no defaults happen here; policy lives in `wiring`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cu_core::config::AppConfig;
use tracing::info;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CONNECTU_CONFIG";

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "connectu.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Find and load the configuration for this run.
///
/// An explicit path (from [`CONFIG_ENV_VAR`]) must exist. Without one,
/// `connectu.toml` in `working_dir` is used when present, otherwise an
/// empty config.
pub fn resolve_config(
    explicit_path: Option<PathBuf>,
    working_dir: &Path,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit_path {
        info!(path = %path.display(), "loading config from {CONFIG_ENV_VAR}");
        return load_config(path);
    }

    let default_path = working_dir.join(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        return load_config(default_path);
    }

    Ok(AppConfig::empty())
}
