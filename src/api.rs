use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::protocol::{ApiErrorBody, LoginRequest, LoginResponse, RegisterRequest};
use crate::request::{HttpClient, HttpMethod, HttpRequest};

// =========================================================
// 接口结果 (Outcomes)
// =========================================================

/// 登录结果
///
/// 成功时一定带有非空 token，调用方无需再做空值判断。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { token: String },
    Failure { reason: ClientError },
}

/// 注册结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Success,
    Failure { reason: ClientError },
}

// =========================================================
// 认证接口客户端
// =========================================================

/// 认证接口客户端
///
/// 每次调用只发出一个请求，不重试，不设超时。
/// 所有失败都转换为结果枚举中的 `Failure`，不会向上传播。
#[derive(Debug, Clone)]
pub struct AuthApi<C: HttpClient> {
    client: C,
    config: ApiConfig,
}

impl<C: HttpClient> AuthApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 提交登录凭据
    pub async fn login(&self, credentials: &LoginRequest) -> LoginOutcome {
        match self.try_login(credentials).await {
            Ok(token) => {
                log::info!("[Auth] Login succeeded.");
                LoginOutcome::Success { token }
            }
            Err(reason) => {
                log::warn!("[Auth] Login failed: {}", reason);
                LoginOutcome::Failure { reason }
            }
        }
    }

    async fn try_login(&self, credentials: &LoginRequest) -> Result<String, ClientError> {
        let req = HttpRequest::new(&self.config.login_url, HttpMethod::Post).with_json(credentials)?;
        let resp = self.client.send(req).await?;
        log::debug!("[Auth] Login response status: {}", resp.status);

        if !resp.is_success() {
            return Err(ClientError::Status {
                status: resp.status,
                message: None,
            });
        }

        // 空响应体同样视为没有 token
        if resp.body.trim().is_empty() {
            return Err(ClientError::MissingToken);
        }

        let body: LoginResponse = resp.json()?;
        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ClientError::MissingToken),
        }
    }

    /// 注册新用户
    pub async fn register(&self, user: &RegisterRequest) -> RegisterOutcome {
        match self.try_register(user).await {
            Ok(()) => {
                log::info!("[Auth] Registration succeeded.");
                RegisterOutcome::Success
            }
            Err(reason) => {
                log::warn!("[Auth] Registration failed: {}", reason);
                RegisterOutcome::Failure { reason }
            }
        }
    }

    async fn try_register(&self, user: &RegisterRequest) -> Result<(), ClientError> {
        let req = HttpRequest::new(&self.config.register_url, HttpMethod::Post).with_json(user)?;
        let resp = self.client.send(req).await?;
        log::debug!("[Auth] Register response status: {}", resp.status);

        if resp.is_success() {
            return Ok(());
        }

        // 失败响应体不是合法 JSON 时忽略消息
        let message = resp.json::<ApiErrorBody>().ok().and_then(|b| b.message);
        Err(ClientError::Status {
            status: resp.status,
            message,
        })
    }
}
