//! 首页
//!
//! 挂载时加载热门书籍并以轮播形式展示，每页 [`BOOKS_PER_SLIDE`] 本。

use crate::auth::use_auth;
use crate::components::icons::{ChevronLeft, ChevronRight};
use crate::components::status::{FailureView, Loader};
use crate::web::router::{Link, use_router};
use bookhub_shared::BookSummary;
use bookhub_shared::controller::HomeController;
use bookhub_shared::fetch::FetchState;
use bookhub_shared::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::ops::Range;

const BOOKS_PER_SLIDE: usize = 4;

// =========================================================
// 轮播窗口计算
// =========================================================

/// 最大起始下标，保证最后一页仍然是满的
fn max_start(len: usize, per_page: usize) -> usize {
    len.saturating_sub(per_page)
}

/// 当前可见的书籍区间
fn carousel_window(len: usize, start: usize, per_page: usize) -> Range<usize> {
    let start = start.min(max_start(len, per_page));
    start..(start + per_page).min(len)
}

// =========================================================
// 组件
// =========================================================

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let home = RwSignal::new(HomeController::new());

    let load = move || {
        let Some((ticket, req)) = home.try_update(|c| c.begin_load()) else {
            return;
        };
        let api = auth.api();
        spawn_local(async move {
            let result = api.request(&req).await;
            home.try_update(|c| c.finish_load(ticket, result));
        });
    };

    // 初始加载
    Effect::new(move |_| load());

    let content = move || {
        home.with(|c| match c.state() {
            FetchState::Loading => view! { <Loader /> }.into_any(),
            FetchState::Success(books) => {
                view! { <TopRatedCarousel books=books.clone() /> }.into_any()
            }
            FetchState::Empty => view! { <TopRatedCarousel books=Vec::new() /> }.into_any(),
            FetchState::Failure(_) => view! { <FailureView on_retry=move |_| load() /> }.into_any(),
        })
    };

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8 space-y-8">
            <section class="space-y-4">
                <h1 class="text-3xl font-bold">"Find Your Next Favorite Books?"</h1>
                <p class="text-base-content/70">
                    "You are in the right place. Tell us what titles or genres you have enjoyed in the past, and we will give you surprisingly insightful recommendations."
                </p>
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| router.navigate(&AppRoute::Bookshelves.to_path())
                >
                    "Find Books"
                </button>
            </section>

            <section class="card bg-base-100 shadow-md">
                <div class="card-body">
                    <h2 class="card-title">"Top Rated Books"</h2>
                    {content}
                </div>
            </section>
        </div>
    }
}

#[component]
fn TopRatedCarousel(books: Vec<BookSummary>) -> impl IntoView {
    let len = books.len();
    let books = StoredValue::new(books);
    let (start, set_start) = signal(0usize);

    let prev = move |_: leptos::ev::MouseEvent| set_start.update(|s| *s = s.saturating_sub(1));
    let next = move |_: leptos::ev::MouseEvent| set_start.update(|s| *s = (*s + 1).min(max_start(len, BOOKS_PER_SLIDE)));

    let slide = move || {
        let window = carousel_window(len, start.get(), BOOKS_PER_SLIDE);
        books.with_value(|all| {
            all[window]
                .iter()
                .map(|book| view! { <TopRatedBook book=book.clone() /> })
                .collect_view()
        })
    };

    view! {
        <div class="flex items-center gap-2">
            <button
                type="button"
                class="btn btn-ghost btn-circle"
                aria-label="previous"
                disabled=move || start.get() == 0
                on:click=prev
            >
                <ChevronLeft attr:class="h-5 w-5" />
            </button>
            <ul class="grid grid-cols-2 md:grid-cols-4 gap-4 flex-1">{slide}</ul>
            <button
                type="button"
                class="btn btn-ghost btn-circle"
                aria-label="next"
                disabled=move || start.get() >= max_start(len, BOOKS_PER_SLIDE)
                on:click=next
            >
                <ChevronRight attr:class="h-5 w-5" />
            </button>
        </div>
    }
}

#[component]
fn TopRatedBook(book: BookSummary) -> impl IntoView {
    let path = AppRoute::BookDetails(book.id.clone()).to_path();

    view! {
        <li>
            <Link to=path class="flex flex-col items-center gap-2 text-center">
                <img src=book.cover_pic alt=book.title.clone() class="h-48 rounded-lg object-cover" />
                <h3 class="font-semibold">{book.title}</h3>
                <p class="text-sm text-base-content/70">{book.author_name}</p>
            </Link>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_window_first_page() {
        assert_eq!(carousel_window(10, 0, 4), 0..4);
    }

    #[test]
    fn test_carousel_window_clamps_to_last_full_page() {
        assert_eq!(carousel_window(10, 8, 4), 6..10);
        assert_eq!(max_start(10, 4), 6);
    }

    #[test]
    fn test_carousel_window_shorter_than_page() {
        assert_eq!(carousel_window(3, 2, 4), 0..3);
        assert_eq!(carousel_window(0, 0, 4), 0..0);
    }
}
