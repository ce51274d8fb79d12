//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供本地存储接口，并在其上实现 [`SessionStore`]。

use authgate::SessionStore;
use authgate::protocol::TOKEN_STORAGE_KEY;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值，键不存在或发生错误时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 以 LocalStorage 为后端的会话存储
///
/// 无状态，每次访问都直接读写浏览器存储，刷新页面后 token 仍然有效。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get(TOKEN_STORAGE_KEY)
    }

    fn set(&self, token: &str) {
        if !LocalStorage::set(TOKEN_STORAGE_KEY, token) {
            log::error!("[Session] Failed to persist token to localStorage.");
        }
    }

    fn clear(&self) {
        if !LocalStorage::delete(TOKEN_STORAGE_KEY) {
            log::warn!("[Session] Failed to remove token from localStorage.");
        }
    }
}
