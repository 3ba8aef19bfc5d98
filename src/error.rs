//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。评分、反馈和历史的核心函数
//! 不会失败，这里的错误都来自外壳边界（输入、配置、会话查找）。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::loader::ConfigValidationError;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 参数验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(e: ConfigValidationError) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) => (400, "INVALID_INPUT".to_string()),
            AppError::Config(_) => (500, "CONFIG_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, code): (u16, String) = (&AppError::NotFound("x".into())).into();
        assert_eq!((status, code.as_str()), (404, "NOT_FOUND"));

        let (status, code): (u16, String) = (&AppError::Validation("x".into())).into();
        assert_eq!((status, code.as_str()), (400, "INVALID_INPUT"));

        let (status, code): (u16, String) = (&AppError::Config("x".into())).into();
        assert_eq!((status, code.as_str()), (500, "CONFIG_ERROR"));
    }

    #[test]
    fn test_config_validation_error_converts() {
        let err: AppError = ConfigValidationError::InvalidPort.into();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::Validation("stress out of range".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
