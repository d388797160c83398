//! Book Hub 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `bookhub_shared::route`: 路由定义与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => (::web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => (::web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

// =========================================================
// tracing 订阅器
// =========================================================

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// 调试构建输出 debug 级别（含请求地址与被丢弃的过期响应），发布构建只保留 info 及以上
pub fn tracing_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// 把 shared crate 的 tracing 事件输出到浏览器控制台，需在挂载前调用一次
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(tracing_level());

    tracing_subscriber::registry().with(fmt_layer).init();
}

mod auth;
mod components {
    pub mod book_details;
    pub mod bookshelves;
    pub mod footer;
    pub mod header;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod not_found;
    pub mod status;
}
mod config;

use crate::auth::AuthContext;
use crate::components::book_details::BookDetailsPage;
use crate::components::bookshelves::BookshelvesPage;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::not_found::NotFoundPage;

use bookhub_shared::route::AppRoute;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装：cookie、fetch 与 History 路由。
pub(crate) mod web {
    mod cookie;
    mod http;
    pub mod router;

    pub use cookie::CookieSessionStore;
    pub use http::FetchHttpClient;
}

use web::router::{Router, RouterOutlet};

/// 受保护页面外包一层页头页脚
fn with_shell(page: AnyView) -> AnyView {
    view! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Header />
            <main class="flex-1">{page}</main>
            <Footer />
        </div>
    }
    .into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    let shell = route.shows_shell();
    let page = match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Bookshelves => view! { <BookshelvesPage /> }.into_any(),
        AppRoute::BookDetails(id) => view! { <BookDetailsPage id=id /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    if shell { with_shell(page) } else { page }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new(config::app_config());
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_keeps_request_failures() {
        // 请求失败以 warn 记录，任何构建都必须输出
        assert!(tracing_level() >= LevelFilter::WARN);
        assert!(tracing_level() >= LevelFilter::INFO);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_build_logs_request_urls() {
        assert_eq!(tracing_level(), LevelFilter::DEBUG);
    }
}
