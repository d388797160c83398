//! API 错误类型
//!
//! 所有请求失败都收敛到 `ApiError`，由视图控制器统一映射为
//! `FetchState::Failure` 或登录表单的内联错误。

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 网络层失败（请求未完成）
    #[error("transport error: {0}")]
    Transport(String),

    /// 服务端返回非 2xx 状态码
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// 响应体无法解析为预期类型
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// 从非 2xx 响应构造错误
    ///
    /// 消息优先取 `error_msg`，其次 `message`，最后退回原始响应体。
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error_msg.or(b.message))
            .unwrap_or_else(|| body.to_string());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 面向用户的错误消息（仅登录表单直接展示）
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
