//! 认证模块
//!
//! 把核心库的接口客户端和会话存储装配好，通过 Context 在组件间共享。
//! 路由守卫不依赖这里的任何状态，它每次导航都直接读取 LocalStorage。

use authgate::{ApiConfig, AppRoute, AuthApi};
use leptos::prelude::*;

use crate::web::{FetchHttpClient, LocalSessionStore};

/// 认证上下文
#[derive(Clone)]
pub struct AuthContext {
    /// 接口客户端
    pub api: AuthApi<FetchHttpClient>,
    /// 会话存储
    pub session: LocalSessionStore,
}

impl AuthContext {
    /// 使用构建时注入的接口地址创建上下文
    pub fn new() -> Self {
        let config = ApiConfig::from_build_env();
        log::debug!(
            "[Auth] login endpoint: {}, register endpoint: {}",
            config.login_url,
            config.register_url
        );
        Self {
            api: AuthApi::new(FetchHttpClient, config),
            session: LocalSessionStore,
        }
    }

    /// 注销并返回登录路由
    pub fn logout(&self) -> AppRoute {
        authgate::session::logout(&self.session)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
