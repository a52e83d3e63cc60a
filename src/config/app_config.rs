use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use melodium_providers::{ProviderConfig, DEFAULT_OEMBED_ENDPOINT};

pub const CONFIG_FILE: &str = "config.toml";
const MELODIUM_DIR: &str = ".melodium";
const DATA_DIR: &str = "data";

/// 配置作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Local,
    Global,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 数据目录（可选，默认: ~/.melodium/data 或 ./.melodium/data）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// oEmbed 元数据接口
    #[serde(default = "default_oembed_endpoint")]
    pub oembed_endpoint: String,

    /// 元数据请求超时（秒，默认: 10）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// 新建记忆时自动查询歌名与歌手（默认: false）
    #[serde(default)]
    pub auto_lookup: bool,
}

fn default_oembed_endpoint() -> String {
    DEFAULT_OEMBED_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            oembed_endpoint: default_oembed_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            auto_lookup: false,
        }
    }
}

impl AppConfig {
    /// 全局目录：~/.melodium/
    pub fn global_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(MELODIUM_DIR)
    }

    /// 本地目录：./.melodium/
    pub fn local_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(MELODIUM_DIR)
    }

    /// 检查本地配置是否存在
    /// 注意：如果当前目录是用户主目录，则不认为是本地配置
    pub fn has_local_config() -> bool {
        let current_dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(_) => return false,
        };

        if let Some(home) = dirs::home_dir() {
            let current_canonical = current_dir.canonicalize().unwrap_or(current_dir.clone());
            let home_canonical = home.canonicalize().unwrap_or(home);

            if current_canonical == home_canonical {
                return false;
            }
        }

        Self::local_dir().join(CONFIG_FILE).exists()
    }

    /// 验证作用域标志（不能同时指定 local 和 global）
    pub fn validate_scope_flags(local: bool, global: bool) -> Result<()> {
        if local && global {
            anyhow::bail!("Cannot specify both --local and --global, please choose one");
        }
        Ok(())
    }

    pub fn resolve_scope(force_local: bool, force_global: bool) -> ConfigScope {
        if force_local {
            ConfigScope::Local
        } else if force_global {
            ConfigScope::Global
        } else if Self::has_local_config() {
            ConfigScope::Local
        } else {
            ConfigScope::Global
        }
    }

    /// 获取当前作用域名称
    /// 返回 "local" 或 "global"
    pub fn get_scope_name(force_local: bool, force_global: bool) -> &'static str {
        match Self::resolve_scope(force_local, force_global) {
            ConfigScope::Local => "local",
            ConfigScope::Global => "global",
        }
    }

    /// 根据 local 标志获取配置目录
    pub fn get_dir(local: bool) -> PathBuf {
        if local {
            Self::local_dir()
        } else {
            Self::global_dir()
        }
    }

    /// 加载配置：根据 local/global 标志或优先级加载
    /// - local = true: 强制使用本地配置
    /// - global = true: 强制使用全局配置
    /// - 两者都为 false: 优先本地配置，其次全局配置，最后默认配置
    pub fn load_with_scope(force_local: bool, force_global: bool) -> Result<Self> {
        Self::validate_scope_flags(force_local, force_global)?;

        match Self::resolve_scope(force_local, force_global) {
            ConfigScope::Local => Self::load_from_dir(&Self::local_dir(), true),
            ConfigScope::Global => Self::load_from_dir(&Self::global_dir(), false),
        }
    }

    /// 从配置目录加载，配置文件不存在时使用默认值
    ///
    /// 本地配置强制使用本地数据目录
    pub fn load_from_dir(dir: &Path, is_local: bool) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            tracing::debug!("Loaded app config from: {}", path.display());
            config
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        if is_local || config.data_path.is_none() {
            config.data_path = Some(dir.join(DATA_DIR));
        }

        tracing::debug!("Data path: {:?}", config.data_path);
        tracing::debug!("oEmbed endpoint: {}", config.oembed_endpoint);

        Ok(config)
    }

    /// 获取数据目录
    pub fn get_data_path(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| Self::global_dir().join(DATA_DIR))
    }

    /// 确保必要的目录存在
    pub fn ensure_dirs(&self) -> Result<()> {
        let data_path = self.get_data_path();
        std::fs::create_dir_all(&data_path).with_context(|| {
            format!("Failed to create data directory: {}", data_path.display())
        })?;
        Ok(())
    }

    /// 元数据 Provider 配置
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            endpoint: self.oembed_endpoint.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// 保存配置到指定目录
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
data_path = "/tmp/melodium"
oembed_endpoint = "http://localhost:8080/oembed"
request_timeout_secs = 3
auto_lookup = true
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/melodium")));
        assert_eq!(config.oembed_endpoint, "http://localhost:8080/oembed");
        assert_eq!(config.request_timeout_secs, 3);
        assert!(config.auto_lookup);
        assert_eq!(config.provider_config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_default_values() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.data_path, None);
        assert_eq!(config.oembed_endpoint, "https://www.youtube.com/oembed");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.auto_lookup);
    }

    #[test]
    fn test_load_from_dir_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_dir(dir.path(), false).unwrap();

        assert_eq!(config.get_data_path(), dir.path().join("data"));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_local_config_forces_local_data_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "data_path = \"/somewhere/else\"\nauto_lookup = true\n",
        )
        .unwrap();

        let local = AppConfig::load_from_dir(dir.path(), true).unwrap();
        assert_eq!(local.get_data_path(), dir.path().join("data"));
        assert!(local.auto_lookup);

        let global = AppConfig::load_from_dir(dir.path(), false).unwrap();
        assert_eq!(global.get_data_path(), PathBuf::from("/somewhere/else"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            auto_lookup: true,
            ..AppConfig::default()
        };

        let path = config.save_to(dir.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILE));

        let loaded = AppConfig::load_from_dir(dir.path(), false).unwrap();
        assert!(loaded.auto_lookup);
        assert_eq!(loaded.oembed_endpoint, config.oembed_endpoint);
    }

    #[test]
    fn test_conflicting_scope_flags() {
        assert!(AppConfig::validate_scope_flags(true, true).is_err());
        assert!(AppConfig::validate_scope_flags(true, false).is_ok());
    }

    #[test]
    fn test_forced_scope_names() {
        assert_eq!(AppConfig::resolve_scope(true, false), ConfigScope::Local);
        assert_eq!(AppConfig::get_scope_name(true, false), "local");
        assert_eq!(AppConfig::resolve_scope(false, true), ConfigScope::Global);
        assert_eq!(AppConfig::get_scope_name(false, true), "global");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "request_timeout_secs = \"soon\"").unwrap();
        assert!(AppConfig::load_from_dir(dir.path(), false).is_err());
    }
}
