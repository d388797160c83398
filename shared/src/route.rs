//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫规则。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 首页 (需要认证)
    #[default]
    Home,
    /// 登录页面
    Login,
    /// 书架列表 (需要认证)
    Bookshelves,
    /// 书籍详情 (需要认证)
    BookDetails(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 忽略查询串、锚点以及一个结尾斜杠。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match path {
            "" | "/" => Self::Home,
            "/login" => Self::Login,
            "/shelf" => Self::Bookshelves,
            _ => match path.strip_prefix("/books/") {
                Some(id) if is_book_id(id) => Self::BookDetails(id.to_string()),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Bookshelves => "/shelf".to_string(),
            Self::BookDetails(id) => format!("/books/{}", id),
            Self::NotFound => "/not-found".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 404 页面对任何人可见。
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }

    /// 外壳（页头/页脚）只在受保护页面显示
    pub fn shows_shell(&self) -> bool {
        self.requires_auth()
    }
}

/// 单个路径段，且不是 `.`/`..`（拼进 API 地址后会被规范化到别的接口）
fn is_book_id(id: &str) -> bool {
    !id.is_empty() && !id.contains('/') && id != "." && id != ".."
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 路由守卫 (Route Guard)
// =========================================================

/// 守卫对一次导航的裁决
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// 放行，渲染目标页面
    Render(AppRoute),
    /// 拒绝，替换历史记录并跳转
    Redirect(AppRoute),
}

impl RouteDecision {
    /// 最终会被渲染的路由
    pub fn route(&self) -> &AppRoute {
        match self {
            RouteDecision::Render(route) | RouteDecision::Redirect(route) => route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteDecision::Redirect(_))
    }
}

/// 路由是否允许进入
pub fn can_enter(route_requires_auth: bool, is_authenticated: bool) -> bool {
    !route_requires_auth || is_authenticated
}

/// 根据认证状态对目标路由做出裁决
pub fn guard(target: AppRoute, is_authenticated: bool) -> RouteDecision {
    if !can_enter(target.requires_auth(), is_authenticated) {
        return RouteDecision::Redirect(AppRoute::auth_failure_redirect());
    }

    if target.should_redirect_when_authenticated() && is_authenticated {
        return RouteDecision::Redirect(AppRoute::auth_success_redirect());
    }

    RouteDecision::Render(target)
}
