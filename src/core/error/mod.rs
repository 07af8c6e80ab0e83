//! 权限模型错误类型
//!
//! 正常的权限计算流程不会失败：循环依赖、缺失的 key、空权限集合都属于
//! 已处理的情况。这里只覆盖外部输入（预设、路由配置、配置文件）的契约错误
//! 以及全局存储的初始化错误。

use thiserror::Error;

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode, PublicError, ToPublicError};

/// 权限模型操作结果类型别名
pub type LimitResult<T> = Result<T, LimitError>;

/// 权限模型相关错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimitError {
    #[error("页面预设格式错误: {0}")]
    InvalidPreset(String),

    #[error("路由配置格式错误: {0}")]
    InvalidRouteConfig(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("日志初始化失败: {0}")]
    Logging(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("全局权限存储尚未初始化")]
    StoreNotInitialized,

    #[error("全局权限存储已经初始化")]
    StoreAlreadyInitialized,
}

impl LimitError {
    pub fn invalid_preset(msg: impl Into<String>) -> Self {
        LimitError::InvalidPreset(msg.into())
    }

    pub fn invalid_route_config(msg: impl Into<String>) -> Self {
        LimitError::InvalidRouteConfig(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        LimitError::Config(msg.into())
    }
}

impl From<std::io::Error> for LimitError {
    fn from(e: std::io::Error) -> Self {
        LimitError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for LimitError {
    fn from(e: toml::de::Error) -> Self {
        LimitError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for LimitError {
    fn from(e: serde_json::Error) -> Self {
        LimitError::Serialization(e.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for LimitError {
    fn from(e: flexi_logger::FlexiLoggerError) -> Self {
        LimitError::Logging(e.to_string())
    }
}

impl From<toml::ser::Error> for LimitError {
    fn from(e: toml::ser::Error) -> Self {
        LimitError::Config(e.to_string())
    }
}

impl ToPublicError for LimitError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            LimitError::InvalidPreset(_) | LimitError::InvalidRouteConfig(_) => {
                ErrorCode::InvalidInput
            }
            LimitError::Config(_) => ErrorCode::ValidationError,
            LimitError::Io(_) | LimitError::Logging(_) => ErrorCode::ResourceUnavailable,
            LimitError::Serialization(_) => ErrorCode::InternalError,
            LimitError::StoreNotInitialized => ErrorCode::ResourceNotFound,
            LimitError::StoreAlreadyInitialized => ErrorCode::ResourceAlreadyExists,
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_error_public_code() {
        let err = LimitError::invalid_preset("apis.list.limits");
        assert_eq!(err.to_error_code(), ErrorCode::InvalidInput);
        assert_eq!(err.to_public_error().message, "页面预设格式错误: apis.list.limits");

        assert_eq!(
            LimitError::StoreNotInitialized.to_error_code(),
            ErrorCode::ResourceNotFound
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LimitError = io.into();
        assert!(matches!(err, LimitError::Io(_)));
        assert_eq!(err.to_error_code(), ErrorCode::ResourceUnavailable);
        assert_eq!(err.to_public_error().exit_code(), 3);
    }

    #[test]
    fn test_config_error_exit_code() {
        let toml_err = toml::from_str::<crate::config::Config>("[limit]\nroute_limit_key = 1")
            .expect_err("类型错误的配置应该解析失败");
        let err: LimitError = toml_err.into();
        let public = err.to_public_error();
        assert_eq!(public.code, ErrorCode::ValidationError);
        assert_eq!(public.exit_code(), 2);
    }
}
