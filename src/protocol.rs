use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存 token 的固定键名
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 请求 / 响应体 (Wire Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录成功响应
///
/// 服务端可能附带其他字段，这里只关心 token，并且允许它缺失，
/// 由调用方显式判断。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// 失败响应体，`message` 可选
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_tolerates_extra_and_missing_fields() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","user":{"id":1}}"#).unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc"));

        let resp: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.token.is_none());
    }

    #[test]
    fn register_request_uses_plain_field_names() {
        let req = RegisterRequest {
            username: "neo".into(),
            email: "neo@example.com".into(),
            password: "secret1".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "neo",
                "email": "neo@example.com",
                "password": "secret1"
            })
        );
    }
}
