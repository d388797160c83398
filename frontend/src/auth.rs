//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态；token 本身只存在于 cookie 中，
//! 信号每次被读取时都重新查询会话存储，cookie 过期或在其他标签页被清除后
//! 守卫立即生效。

use crate::web::{CookieSessionStore, FetchHttpClient};
use bookhub_shared::client::BookHubApi;
use bookhub_shared::config::AppConfig;
use bookhub_shared::controller;
use bookhub_shared::route::AppRoute;
use bookhub_shared::session::SessionStore;
use leptos::prelude::*;

/// 浏览器环境下的 API 客户端
pub type Api = BookHubApi<FetchHttpClient, CookieSessionStore>;

/// 认证上下文
///
/// 全部字段都是 Copy 的句柄，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 登录/注销时翻转，用于通知依赖认证状态的 Effect
    is_authenticated: RwSignal<bool>,
    /// API 客户端实例
    api: StoredValue<Api>,
    /// 运行时配置
    config: StoredValue<AppConfig>,
}

impl AuthContext {
    /// 创建新的认证上下文，认证状态从 cookie 初始化
    pub fn new(config: AppConfig) -> Self {
        let session = CookieSessionStore;
        let authenticated = session.is_authenticated();
        let api = BookHubApi::new(config.api_base_url.clone(), FetchHttpClient, session);

        crate::log_info!(
            "[Auth] Initialized against {} (authenticated: {})",
            api.base_url(),
            authenticated
        );

        Self {
            is_authenticated: RwSignal::new(authenticated),
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        session_signal(self.is_authenticated, CookieSessionStore)
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn session_expiry_days(&self) -> u32 {
        self.config.with_value(|c| c.session_expiry_days)
    }

    /// 登录成功后调用（token 已由登录控制器写入 cookie）
    pub fn mark_logged_in(&self) {
        self.is_authenticated.set(true);
    }

    /// 注销并清除状态，返回需要替换到的路由
    pub fn logout(&self) -> AppRoute {
        let target = self.api.with_value(|api| controller::logout(api.session()));
        self.is_authenticated.set(false);
        target
    }
}

/// 以会话存储为准的认证信号
///
/// 读取时总是查询 `session`；`changes` 只负责让订阅者在登录/注销后重新执行。
fn session_signal<S>(changes: RwSignal<bool>, session: S) -> Signal<bool>
where
    S: SessionStore + Send + Sync + 'static,
{
    Signal::derive(move || {
        changes.track();
        session.is_authenticated()
    })
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// 线程安全的内存存储，模拟在别处被修改的 cookie
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<Option<String>>>);

    impl SessionStore for SharedStore {
        fn get(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn set(&self, token: &str, _expiry_days: u32) {
            *self.0.lock().unwrap() = Some(token.to_string());
        }

        fn remove(&self) {
            *self.0.lock().unwrap() = None;
        }
    }

    #[test]
    fn test_signal_follows_session_cleared_elsewhere() {
        let store = SharedStore::default();
        store.set("jwt", 30);
        let flag = RwSignal::new(true);
        let signal = session_signal(flag, store.clone());
        assert!(signal.get_untracked());

        // 过期或其他标签页注销：标志位未变，但守卫应看到未登录
        store.remove();
        assert!(!signal.get_untracked());
        assert_eq!(
            bookhub_shared::route::guard(AppRoute::Bookshelves, signal.get_untracked()),
            bookhub_shared::route::RouteDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_signal_sees_token_written_after_creation() {
        let store = SharedStore::default();
        let signal = session_signal(RwSignal::new(false), store.clone());
        assert!(!signal.get_untracked());

        store.set("jwt", 30);
        assert!(signal.get_untracked());
    }
}
