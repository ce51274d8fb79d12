//! authgate 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::router`: 路由服务（History API + 守卫）
//! - `auth`: 接口客户端与会话存储的装配
//! - `components`: UI 组件层
//!
//! 表单校验、提交状态机和路由守卫都在核心库 `authgate` 中，这里只负责渲染和浏览器 API。

mod auth;
mod components {
    pub mod dashboard;
    mod form_field;
    pub mod login;
    pub mod register;
}
mod web;

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;

use authgate::AppRoute;
use leptos::prelude::*;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。守卫已在路由服务中执行。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Login class="link link-primary mt-4 inline-block">
                        "Back to sign in"
                    </Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 装配接口客户端与会话存储
    provide_context(AuthContext::new());

    view! {
        // 2. 路由器组件：每次导航都经过守卫
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
