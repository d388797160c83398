//! 运行时配置
//!
//! 默认值写死在常量中，外部（前端构建时的环境变量）可以按键覆盖。

use crate::{DEFAULT_API_BASE_URL, DEFAULT_SESSION_EXPIRY_DAYS};

pub const ENV_API_URL: &str = "BOOKHUB_API_URL";
pub const ENV_SESSION_DAYS: &str = "BOOKHUB_SESSION_DAYS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API 源地址（不带结尾斜杠）
    pub api_base_url: String,
    /// 登录 token 的有效天数
    pub session_expiry_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_expiry_days: DEFAULT_SESSION_EXPIRY_DAYS,
        }
    }
}

impl AppConfig {
    /// 通过查找函数读取覆盖项，读不到或无法解析时使用默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(ENV_API_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        let session_expiry_days = match lookup(ENV_SESSION_DAYS) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(days) if days > 0 => days,
                _ => {
                    tracing::warn!(value = %raw, "invalid session expiry, using default");
                    defaults.session_expiry_days
                }
            },
            None => defaults.session_expiry_days,
        };

        Self {
            api_base_url,
            session_expiry_days,
        }
        .normalized()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    pub fn with_session_expiry_days(mut self, days: u32) -> Self {
        self.session_expiry_days = days;
        self
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "https://apis.ccbp.in");
        assert_eq!(config.session_expiry_days, 30);
    }

    #[test]
    fn test_overrides_are_applied_and_trailing_slash_trimmed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:3000/"),
            (ENV_SESSION_DAYS, "7"),
        ]));
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.session_expiry_days, 7);
    }

    #[test]
    fn test_invalid_days_fall_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_SESSION_DAYS, "zero")]));
        assert_eq!(config.session_expiry_days, 30);

        let config = AppConfig::from_lookup(lookup_from(&[(ENV_SESSION_DAYS, "0")]));
        assert_eq!(config.session_expiry_days, 30);
    }
}
