use crate::route::AppRoute;
use crate::session::SessionStore;

/// 页头导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    pub fn route(&self) -> AppRoute {
        AppRoute::from_path(self.path)
    }

    pub fn is_active(&self, current: &AppRoute) -> bool {
        &self.route() == current
    }
}

pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Home",
        path: "/",
    },
    NavItem {
        label: "Bookshelves",
        path: "/shelf",
    },
];

/// 注销：清除 token，返回需要替换到的路由
pub fn logout<S: SessionStore>(session: &S) -> AppRoute {
    session.remove();
    tracing::info!("logged out");
    AppRoute::auth_failure_redirect()
}
