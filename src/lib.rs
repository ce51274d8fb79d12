//! authgate 核心库
//!
//! 与平台无关的客户端认证逻辑，浏览器端 UI 见 `frontend/`：
//! - `api`: 登录 / 注册接口客户端
//! - `session`: token 存储抽象与注销
//! - `route`: 路由定义与路由守卫
//! - `form`: 表单状态与字段校验
//! - `login` / `register`: 两个表单的提交状态机
//! - `request`: HTTP 抽象层

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod login;
pub mod protocol;
pub mod register;
pub mod request;
pub mod route;
pub mod session;

pub use api::{AuthApi, LoginOutcome, RegisterOutcome};
pub use config::ApiConfig;
pub use error::{ClientError, ClientResult};
pub use route::{AppRoute, GuardDecision, guard, is_authorized};
pub use session::{MemorySessionStore, SessionSnapshot, SessionStore};
