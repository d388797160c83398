//! 书架页
//!
//! 左侧书架筛选，右侧搜索框与书籍列表。切换书架、提交搜索、重试
//! 都经由 `BookshelvesController` 产生请求，过期的响应会被丢弃。

use crate::auth::{Api, use_auth};
use crate::components::icons::{Search, Star};
use crate::components::status::{FailureView, Loader};
use crate::web::router::Link;
use bookhub_shared::controller::BookshelvesController;
use bookhub_shared::fetch::{FetchState, RequestTicket};
use bookhub_shared::protocol::BooksRequest;
use bookhub_shared::route::AppRoute;
use bookhub_shared::{BookSummary, Shelf};
use leptos::prelude::*;
use leptos::task::spawn_local;

const NO_BOOKS_IMAGE_URL: &str =
    "https://res.cloudinary.com/dkxxgpzd8/image/upload/v1647250727/Asset_1_1_kfnhpx.png";

/// 在控制器上开始一次请求并在后台完成它
fn dispatch(
    shelves: RwSignal<BookshelvesController>,
    api: Api,
    begin: impl FnOnce(&mut BookshelvesController) -> (RequestTicket, BooksRequest),
) {
    let Some((ticket, req)) = shelves.try_update(begin) else {
        return;
    };
    spawn_local(async move {
        let result = api.request(&req).await;
        shelves.try_update(|c| c.finish_load(ticket, result));
    });
}

#[component]
pub fn BookshelvesPage() -> impl IntoView {
    let auth = use_auth();
    let shelves = RwSignal::new(BookshelvesController::new());

    // 初始加载
    Effect::new(move |_| dispatch(shelves, auth.api(), |c| c.begin_load()));

    let select_shelf =
        move |shelf: Shelf| dispatch(shelves, auth.api(), move |c| c.select_shelf(shelf));
    let submit_search = move || dispatch(shelves, auth.api(), |c| c.submit_search());
    let retry = move || dispatch(shelves, auth.api(), |c| c.begin_retry());

    let active_shelf = Memo::new(move |_| shelves.with(|c| c.active_shelf()));

    let shelf_buttons = Shelf::ALL
        .into_iter()
        .map(|shelf| {
            let class = move || {
                if active_shelf.get() == shelf {
                    "btn btn-sm btn-primary justify-start"
                } else {
                    "btn btn-sm btn-ghost justify-start"
                }
            };
            view! {
                <li>
                    <button type="button" class=class on:click=move |_| select_shelf(shelf)>
                        {shelf.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_search();
    };

    // 输入框每次按键都会写入控制器，列表只在请求状态变化时重建
    let state = Memo::new(move |_| shelves.with(|c| c.state().clone()));
    let empty_message = Memo::new(move |_| shelves.with(|c| c.empty_message()));
    let heading = Memo::new(move |_| shelves.with(|c| c.heading()));

    let content = move || match state.get() {
        FetchState::Loading => view! { <Loader /> }.into_any(),
        FetchState::Success(books) => view! { <BookList books=books /> }.into_any(),
        FetchState::Empty => {
            let message = empty_message.get().unwrap_or_default();
            view! { <NoBooks message=message /> }.into_any()
        }
        FetchState::Failure(_) => view! { <FailureView on_retry=move |_| retry() /> }.into_any(),
    };

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8 flex flex-col md:flex-row gap-8">
            <aside class="md:w-56 shrink-0">
                <h1 class="text-lg font-bold mb-4">"Bookshelves"</h1>
                <ul class="flex md:flex-col gap-2 flex-wrap">{shelf_buttons}</ul>
            </aside>

            <section class="flex-1 space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                    <h2 class="text-2xl font-bold">{heading}</h2>
                    <form class="join" on:submit=on_search>
                        <input
                            type="search"
                            placeholder="Search"
                            class="input input-bordered join-item"
                            prop:value=move || shelves.with(|c| c.search_input().to_string())
                            on:input=move |ev| shelves.update(|c| c.set_search_input(event_target_value(&ev)))
                        />
                        <button type="submit" class="btn join-item" data-testid="searchButton">
                            <Search attr:class="h-4 w-4" />
                        </button>
                    </form>
                </div>
                {content}
            </section>
        </div>
    }
}

#[component]
fn BookList(books: Vec<BookSummary>) -> impl IntoView {
    view! {
        <ul class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            {books.into_iter().map(|book| view! { <BookItem book=book /> }).collect_view()}
        </ul>
    }
}

#[component]
fn BookItem(book: BookSummary) -> impl IntoView {
    let path = AppRoute::BookDetails(book.id.clone()).to_path();
    let rating = book.rating.map(|r| r.to_string()).unwrap_or_default();
    let status = book.read_status.map(|s| s.label()).unwrap_or_default();

    view! {
        <li>
            <Link to=path class="flex gap-4 p-4 rounded-box bg-base-100 shadow-sm hover:shadow-md">
                <img src=book.cover_pic alt=book.title.clone() class="h-40 w-28 object-cover rounded" />
                <div class="space-y-1">
                    <h3 class="text-lg font-semibold">{book.title}</h3>
                    <p class="text-base-content/70">{book.author_name}</p>
                    <p class="flex items-center gap-1">
                        "Avg Rating "
                        <Star attr:class="h-4 w-4 text-warning" />
                        {rating}
                    </p>
                    <p>
                        "Status: "
                        <span class="text-primary">{status}</span>
                    </p>
                </div>
            </Link>
        </li>
    }
}

#[component]
fn NoBooks(message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4 py-16 text-center">
            <img src=NO_BOOKS_IMAGE_URL alt="no books" class="w-64 max-w-full" />
            <p class="text-lg text-base-content/80">{message}</p>
        </div>
    }
}
