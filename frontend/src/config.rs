//! 构建期配置
//!
//! 浏览器中没有进程环境变量，覆盖项在编译时通过 `option_env!` 注入，
//! 例如 `BOOKHUB_API_URL=http://localhost:3000 trunk build`。

use bookhub_shared::config::{AppConfig, ENV_API_URL, ENV_SESSION_DAYS};

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_URL => option_env!("BOOKHUB_API_URL"),
        ENV_SESSION_DAYS => option_env!("BOOKHUB_SESSION_DAYS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn app_config() -> AppConfig {
    AppConfig::from_lookup(build_env)
}
