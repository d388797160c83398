//! 会话存储抽象
//!
//! 登录 token 只通过 `SessionStore` 读写。浏览器端由 cookie 实现，
//! 测试和非浏览器环境使用内存实现。

use std::cell::RefCell;
use std::rc::Rc;

pub trait SessionStore {
    /// 读取当前 token
    fn get(&self) -> Option<String>;

    /// 保存 token，`expiry_days` 天后失效
    fn set(&self, token: &str, expiry_days: u32);

    /// 清除 token
    fn remove(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str, expiry_days: u32) {
        (**self).set(token, expiry_days)
    }

    fn remove(&self) {
        (**self).remove()
    }
}

/// 内存会话存储
///
/// 克隆共享同一份状态，便于测试中同时持有 API 与断言句柄。
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<StoredToken>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredToken {
    token: String,
    expiry_days: u32,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建一个已登录的存储
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token, crate::DEFAULT_SESSION_EXPIRY_DAYS);
        store
    }

    /// 最近一次 `set` 使用的有效天数
    pub fn expiry_days(&self) -> Option<u32> {
        self.inner.borrow().as_ref().map(|t| t.expiry_days)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.inner.borrow().as_ref().map(|t| t.token.clone())
    }

    fn set(&self, token: &str, expiry_days: u32) {
        *self.inner.borrow_mut() = Some(StoredToken {
            token: token.to_string(),
            expiry_days,
        });
    }

    fn remove(&self) {
        self.inner.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.set("token-1", 30);
        assert_eq!(store.get().as_deref(), Some("token-1"));
        assert_eq!(store.expiry_days(), Some(30));

        store.remove();
        assert_eq!(store.get(), None);
        assert_eq!(store.expiry_days(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let handle = store.clone();
        store.set("abc", 1);
        assert_eq!(handle.get().as_deref(), Some("abc"));
        handle.remove();
        assert!(!store.is_authenticated());
    }
}
