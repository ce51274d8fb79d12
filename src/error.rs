use thiserror::Error;

// =========================================================
// 客户端错误类型
// =========================================================

/// 认证客户端的统一错误类型
///
/// 覆盖两类失败：
/// - 传输层：请求构建失败、网络不可达、响应体无法解析
/// - 应用层：非 2xx 状态码（可能带服务端消息）、登录响应缺少 token
///
/// 表单校验错误不走这里，见 [`crate::form::FormErrors`]。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// 请求构建失败（序列化、Header 等）
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    Network(String),
    /// 响应解析失败
    #[error("response parse failed: {0}")]
    Parse(String),
    /// 服务端返回非成功状态码
    #[error("unexpected status {status}")]
    Status {
        status: u16,
        /// 服务端提供的可展示消息（如果有）
        message: Option<String>,
    },
    /// 2xx 响应中没有可用的 token
    #[error("login response did not contain a token")]
    MissingToken,
}

impl ClientError {
    /// 是否为传输层错误（没有得到可用的 HTTP 响应，或响应体无法解析）
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::RequestBuild(_) | ClientError::Network(_) | ClientError::Parse(_)
        )
    }

    /// 服务端提供的消息，空字符串视为没有
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                message: Some(msg), ..
            } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Parse(e.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
