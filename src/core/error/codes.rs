//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (03=验证, 05=资源, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码 - CLI 与宿主应用向调用方报告
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // ==================== 验证错误 (03xx) ====================
    /// 通用验证错误
    ValidationError = 300,
    /// 无效输入
    InvalidInput = 302,

    // ==================== 资源错误 (05xx) ====================
    /// 资源未找到
    ResourceNotFound = 500,
    /// 资源已存在
    ResourceAlreadyExists = 501,
    /// 资源不可用
    ResourceUnavailable = 502,

    // ==================== 系统错误 (09xx) ====================
    /// 内部错误
    InternalError = 900,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            300..=399 => ErrorCategory::Validation,
            500..=599 => ErrorCategory::Resource,
            _ => ErrorCategory::System,
        }
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "验证错误",
            ErrorCode::InvalidInput => "无效输入",
            ErrorCode::ResourceNotFound => "资源未找到",
            ErrorCode::ResourceAlreadyExists => "资源已存在",
            ErrorCode::ResourceUnavailable => "资源不可用",
            ErrorCode::InternalError => "内部错误",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Resource,
    System,
}

impl ErrorCategory {
    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Validation => 2,
            ErrorCategory::Resource => 3,
            ErrorCategory::System => 1,
        }
    }
}

/// 对外错误信息 - 用于序列化到响应中
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    /// 错误码
    pub code: ErrorCode,
    /// 错误消息
    pub message: String,
}

impl PublicError {
    /// 创建新的对外错误
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.code.category().exit_code()
    }
}

impl std::fmt::Display for PublicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_i32(), self.message)
    }
}

/// 转换为对外错误的 trait
pub trait ToPublicError {
    /// 转换为对外错误
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    /// 获取错误码
    fn to_error_code(&self) -> ErrorCode;

    /// 获取对外消息
    fn to_public_message(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::InvalidInput.as_i32(), 302);
        assert_eq!(ErrorCode::InvalidInput.category(), ErrorCategory::Validation);
        assert_eq!(ErrorCode::ResourceUnavailable.category(), ErrorCategory::Resource);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InvalidInput.to_string(), "302 (无效输入)");
    }

    #[test]
    fn test_public_error_exit_code() {
        let err = PublicError::new(ErrorCode::ResourceUnavailable, "路由文件不存在");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "[502] 路由文件不存在");
        assert_eq!(PublicError::new(ErrorCode::ValidationError, "x").exit_code(), 2);
        assert_eq!(PublicError::new(ErrorCode::InternalError, "x").exit_code(), 1);
    }
}
