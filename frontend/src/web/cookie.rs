//! Cookie 会话存储模块
//!
//! 使用 `document.cookie` 保存登录 token，实现共享的 `SessionStore` 接口。

use bookhub_shared::SESSION_COOKIE_KEY;
use bookhub_shared::session::SessionStore;
use url::form_urlencoded;
use wasm_bindgen::JsCast;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// 浏览器 Cookie 会话存储
///
/// 无内部状态，每次读写都直接访问 `document.cookie`。
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSessionStore;

impl CookieSessionStore {
    /// 获取 HtmlDocument 实例
    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }

    fn read_all() -> Option<String> {
        Self::document()?.cookie().ok()
    }

    fn write(cookie: &str) -> bool {
        Self::document()
            .and_then(|d| d.set_cookie(cookie).ok())
            .is_some()
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self) -> Option<String> {
        parse_cookie(&Self::read_all()?, SESSION_COOKIE_KEY)
    }

    fn set(&self, token: &str, expiry_days: u32) {
        let max_age = expiry_days as u64 * SECONDS_PER_DAY;
        let cookie = format_cookie(SESSION_COOKIE_KEY, token, max_age);
        if !Self::write(&cookie) {
            crate::log_error!("[Session] Failed to write session cookie");
        }
    }

    fn remove(&self) {
        // max-age=0 让浏览器立即删除
        let cookie = format_cookie(SESSION_COOKIE_KEY, "", 0);
        if !Self::write(&cookie) {
            crate::log_error!("[Session] Failed to clear session cookie");
        }
    }
}

// ============================================================================
// 纯函数：Cookie 字符串的生成与解析
// ============================================================================

/// 生成单条 cookie 写入字符串
pub(crate) fn format_cookie(key: &str, value: &str, max_age_secs: u64) -> String {
    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    format!("{}={}; max-age={}; path=/; SameSite=Lax", key, encoded, max_age_secs)
}

/// 从 `document.cookie` 中取出指定键的值，空值视为不存在
pub(crate) fn parse_cookie(all: &str, key: &str) -> Option<String> {
    all.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode_component(v))
        .filter(|v| !v.is_empty())
}

fn decode_component(raw: &str) -> String {
    // 编码后的值不含 '&' 与 '='，整体会被解析为一个键
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .unwrap_or_default()
}
