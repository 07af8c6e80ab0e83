use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{
    DEFAULT_LIMIT_ICON, DEFAULT_ROUTE_ICON, ROUTE_LIMIT_KEY, STR_DELIMITER,
};
use crate::core::error::{LimitError, LimitResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub limit: LimitConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// 异步写入；关闭时每条日志直接落盘
    pub async_write: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "route-limit".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
            async_write: true,
        }
    }
}

/// 权限模型配置
///
/// 这些值需要与消费操作地址映射的一方保持一致
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LimitConfig {
    /// 页面访问权限 key
    pub route_limit_key: String,
    /// 操作地址分隔符
    pub str_delimiter: String,
    /// 权限子项缺省图标
    pub limit_icon: String,
    /// 路由节点缺省图标
    pub route_icon: String,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            route_limit_key: ROUTE_LIMIT_KEY.to_string(),
            str_delimiter: STR_DELIMITER.to_string(),
            limit_icon: DEFAULT_LIMIT_ICON.to_string(),
            route_icon: DEFAULT_ROUTE_ICON.to_string(),
        }
    }
}

impl LimitConfig {
    /// 验证配置
    pub fn validate(&self) -> LimitResult<()> {
        if self.route_limit_key.is_empty() {
            return Err(LimitError::config("route_limit_key 不能为空"));
        }
        if self.route_limit_key.contains(',') || self.route_limit_key.contains('/') {
            return Err(LimitError::config("route_limit_key 不能包含 ',' 或 '/'"));
        }
        if self.str_delimiter.is_empty() {
            return Err(LimitError::config("str_delimiter 不能为空"));
        }
        if self.str_delimiter.contains(',') {
            return Err(LimitError::config("str_delimiter 不能包含 ','"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            limit: LimitConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> LimitResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> LimitResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> LimitResult<()> {
        if self.log.max_files == 0 {
            return Err(LimitError::config("log.max_files 必须大于 0"));
        }
        self.limit.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.limit.route_limit_key, "$page");
        assert_eq!(config.limit.str_delimiter, "@@");
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_save() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.limit.str_delimiter = "::".to_string();
        config.save(temp_file.path()).expect("Failed to save config");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[limit]\nroute_limit_key = \"view\"\n")
            .expect("Failed to write TOML content to temporary file");

        let config = Config::load(temp_file.path()).expect("Failed to load partial config");
        assert_eq!(config.limit.route_limit_key, "view");
        assert_eq!(config.limit.str_delimiter, "@@");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_config_rejects_comma_delimiter() {
        let mut config = Config::default();
        config.limit.str_delimiter = ",".to_string();
        assert!(matches!(config.validate(), Err(LimitError::Config(_))));

        config.limit.str_delimiter = "@@".to_string();
        config.limit.route_limit_key = String::new();
        assert!(config.validate().is_err());
    }
}
