//! 浏览器原生 Web API 封装模块
//!
//! 对 fetch、LocalStorage、History 的轻量级封装，核心库的抽象在这里落地。

mod http;
pub mod router;
mod storage;

pub use http::FetchHttpClient;
pub use storage::LocalSessionStore;
