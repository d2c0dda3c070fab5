use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 统一的错误响应结构
//
// 错误响应固定为 {message, error} 形状；error 无内容时省略
// （如 403 Forbidden 只返回 {message}）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl ToString) -> Self {
        Self {
            message: message.into(),
            error: Some(error.to_string()),
        }
    }

    /// 500 响应体，message 固定为 "Server Error"
    pub fn server_error(error: impl ToString) -> Self {
        Self::with_error("Server Error", error)
    }

    /// 403 响应体
    pub fn forbidden() -> Self {
        Self::new("Forbidden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_shape() {
        let body = serde_json::to_value(ErrorResponse::server_error("boom")).unwrap();
        assert_eq!(body["message"], "Server Error");
        assert_eq!(body["error"], "boom");
    }

    #[test]
    fn test_forbidden_omits_error_field() {
        let body = serde_json::to_value(ErrorResponse::forbidden()).unwrap();
        assert_eq!(body["message"], "Forbidden");
        assert!(body.get("error").is_none());
    }
}
