// =========================================================
// 接口地址配置 (API Configuration)
// =========================================================

/// 这些是默认值，如果构建时没有提供对应的环境变量，则使用这些值
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/users/register";

/// 构建时环境变量名
pub const API_BASE_URL_VAR: &str = "AUTHGATE_API_BASE_URL";
pub const LOGIN_API_URL_VAR: &str = "AUTHGATE_LOGIN_API_URL";

/// 认证接口地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub login_url: String,
    pub register_url: String,
}

impl ApiConfig {
    /// 按给定的变量查找函数组装配置
    ///
    /// - `AUTHGATE_API_BASE_URL` 同时决定登录和注册地址
    /// - `AUTHGATE_LOGIN_API_URL` 是完整的登录地址，优先级最高
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(API_BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let base = base.trim_end_matches('/');

        let login_url = lookup(LOGIN_API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("{}{}", base, LOGIN_PATH));

        Self {
            login_url,
            register_url: format!("{}{}", base, REGISTER_PATH),
        }
    }

    /// 读取编译期注入的环境变量（浏览器端没有运行时环境变量）
    pub fn from_build_env() -> Self {
        Self::from_vars(|name| match name {
            API_BASE_URL_VAR => option_env!("AUTHGATE_API_BASE_URL").map(str::to_string),
            LOGIN_API_URL_VAR => option_env!("AUTHGATE_LOGIN_API_URL").map(str::to_string),
            _ => None,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
