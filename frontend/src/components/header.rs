//! 页头
//!
//! Logo 链接首页，导航项高亮当前页，注销后替换到登录页。

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use bookhub_shared::controller::NAV_ITEMS;
use leptos::prelude::*;

const LOGO_URL: &str =
    "https://res.cloudinary.com/dkxxgpzd8/image/upload/v1647190320/Group_7731_v0p1nt_gjeokw.png";

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current_route = router.current_route();
    let is_authenticated = auth.is_authenticated_signal();

    let on_logout = move |_| {
        let target = auth.logout();
        router.replace(target);
    };

    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            let item = *item;
            let class = move || {
                if item.is_active(&current_route.get()) {
                    "font-semibold text-primary"
                } else {
                    "text-base-content/70"
                }
            };
            view! {
                <li>
                    <Link to=item.path>
                        <span class=class>{item.label}</span>
                    </Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="navbar bg-base-100 shadow-sm px-4 lg:px-16">
            <div class="flex-1">
                <Link to="/">
                    <img src=LOGO_URL alt="website logo" class="h-10" />
                </Link>
            </div>
            <nav class="flex-none flex items-center gap-4">
                <ul class="menu menu-horizontal px-1">{nav}</ul>
                <Show when=move || is_authenticated.get()>
                    <button type="button" class="btn btn-primary btn-sm" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
