//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性，以及路由守卫。

use std::fmt::Display;

use crate::session::SessionSnapshot;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 所有可导航的路由
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Dashboard,
        AppRoute::NotFound,
    ];

    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            "/" | "/login" => Self::Login,
            "/user/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/user/register",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取登录成功后的跳转目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 路由守卫 (Route Guard)
// =========================================================

/// 守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 允许渲染目标路由
    Render(AppRoute),
    /// 重定向到另一个路由
    Redirect(AppRoute),
}

impl GuardDecision {
    /// 最终会被渲染的路由
    pub fn route(&self) -> AppRoute {
        match self {
            GuardDecision::Render(r) | GuardDecision::Redirect(r) => *r,
        }
    }
}

/// 会话中是否持有 token
pub fn is_authorized(snapshot: &SessionSnapshot) -> bool {
    snapshot.has_token()
}

/// 对一次导航做守卫判定
///
/// 纯函数，不缓存结果：调用方每次导航都要传入新的快照。
pub fn guard(target: AppRoute, snapshot: &SessionSnapshot) -> GuardDecision {
    if target.requires_auth() && !is_authorized(snapshot) {
        GuardDecision::Redirect(AppRoute::auth_failure_redirect())
    } else {
        GuardDecision::Render(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_token(token: &str) -> SessionSnapshot {
        SessionSnapshot::new(Some(token.to_string()))
    }

    #[test]
    fn paths_round_trip_for_known_routes() {
        for route in [AppRoute::Login, AppRoute::Register, AppRoute::Dashboard] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn root_and_trailing_slash_are_normalised() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path(""), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/user/register/"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn only_dashboard_is_protected() {
        let protected: Vec<_> = AppRoute::ALL
            .into_iter()
            .filter(AppRoute::requires_auth)
            .collect();
        assert_eq!(protected, vec![AppRoute::Dashboard]);
    }

    #[test]
    fn protected_routes_redirect_to_login_without_token() {
        let anonymous = SessionSnapshot::default();
        for route in AppRoute::ALL.into_iter().filter(AppRoute::requires_auth) {
            assert_eq!(
                guard(route, &anonymous),
                GuardDecision::Redirect(AppRoute::Login)
            );
        }
    }

    #[test]
    fn protected_route_renders_with_token() {
        let decision = guard(AppRoute::Dashboard, &with_token("abc123"));
        assert_eq!(decision, GuardDecision::Render(AppRoute::Dashboard));
        assert_eq!(decision.route().to_path(), "/dashboard");
    }

    #[test]
    fn empty_token_is_not_authorized() {
        assert!(!is_authorized(&with_token("")));
        assert_eq!(
            guard(AppRoute::Dashboard, &with_token("")),
            GuardDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn public_routes_render_for_everyone() {
        let anonymous = SessionSnapshot::default();
        for route in [AppRoute::Login, AppRoute::Register, AppRoute::NotFound] {
            assert_eq!(guard(route, &anonymous), GuardDecision::Render(route));
            assert_eq!(guard(route, &with_token("t")), GuardDecision::Render(route));
        }
    }
}
