//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Policy defaults (which storage backend an empty string means, the stagger
//! used when none is configured, ...) live in the shell's wiring.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `[navigation] entry_view`: "welcome" / "signup" (may be empty)
    pub entry_view: String,
    /// `[navigation] learn_more`: "signup" / "brochure" (may be empty)
    pub learn_more_target: String,
    /// `[navigation] brochure_url`
    pub brochure_url: String,

    /// `[presentation] reduced_motion`
    pub reduced_motion: bool,
    /// `[presentation] tile_stagger_ms`
    pub tile_stagger_ms: u64,

    /// `[storage] backend`: "memory" / "disabled" (may be empty)
    pub storage_backend: String,
    /// `[storage] quota_bytes`, 0 when unset
    pub storage_quota_bytes: u64,

    /// `[profile_picture] enabled`
    pub profile_picture_enabled: bool,
    /// `[profile_picture] proxy_endpoint`
    pub profile_picture_proxy: String,
    /// `[profile_picture] timeout_ms`
    pub profile_picture_timeout_ms: u64,

    /// `[logging] log_dir` (path info only, no existence check)
    pub log_dir: PathBuf,
}

fn str_at<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn bool_at(value: &toml::Value, section: &str, key: &str) -> bool {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn u64_at(value: &toml::Value, section: &str, key: &str) -> u64 {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .and_then(|v| u64::try_from(v).ok())
        .unwrap_or(0)
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    /// Negative integers are not representable and read as 0.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            entry_view: str_at(toml_value, "navigation", "entry_view").to_string(),
            learn_more_target: str_at(toml_value, "navigation", "learn_more").to_string(),
            brochure_url: str_at(toml_value, "navigation", "brochure_url").to_string(),
            reduced_motion: bool_at(toml_value, "presentation", "reduced_motion"),
            tile_stagger_ms: u64_at(toml_value, "presentation", "tile_stagger_ms"),
            storage_backend: str_at(toml_value, "storage", "backend").to_string(),
            storage_quota_bytes: u64_at(toml_value, "storage", "quota_bytes"),
            profile_picture_enabled: bool_at(toml_value, "profile_picture", "enabled"),
            profile_picture_proxy: str_at(toml_value, "profile_picture", "proxy_endpoint")
                .to_string(),
            profile_picture_timeout_ms: u64_at(toml_value, "profile_picture", "timeout_ms"),
            log_dir: PathBuf::from(str_at(toml_value, "logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            entry_view: String::new(),
            learn_more_target: String::new(),
            brochure_url: String::new(),
            reduced_motion: false,
            tile_stagger_ms: 0,
            storage_backend: String::new(),
            storage_quota_bytes: 0,
            profile_picture_enabled: false,
            profile_picture_proxy: String::new(),
            profile_picture_timeout_ms: 0,
            log_dir: PathBuf::new(),
        }
    }
}
