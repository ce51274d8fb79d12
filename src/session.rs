//! 会话存储模块
//!
//! token 是客户端唯一的授权凭据。存储实现通过 [`SessionStore`] 注入，
//! 浏览器端由 frontend 提供基于 LocalStorage 的实现。

use std::cell::RefCell;

use crate::route::AppRoute;

/// 某一时刻的会话快照，供路由守卫使用
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    token: Option<String>,
}

impl SessionSnapshot {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// token 存在且非空
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// 会话存储接口
///
/// 所有访问都发生在单线程的 UI 事件循环中，因此方法只需要 `&self`，
/// 实现方自行使用内部可变性。
pub trait SessionStore {
    /// 读取当前 token
    fn get(&self) -> Option<String>;

    /// 写入 token，覆盖旧值
    fn set(&self, token: &str);

    /// 删除 token，重复调用无副作用
    fn clear(&self);

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.get())
    }
}

/// 内存实现，用于测试和原生平台
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// 注销：清除 token，返回应跳转的登录路由
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> AppRoute {
    store.clear();
    log::info!("[Auth] Logged out.");
    AppRoute::auth_failure_redirect()
}
