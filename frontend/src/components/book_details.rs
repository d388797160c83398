use crate::auth::use_auth;
use crate::components::icons::Star;
use crate::components::status::{FailureView, Loader};
use bookhub_shared::BookDetail;
use bookhub_shared::controller::BookDetailsController;
use bookhub_shared::fetch::FetchState;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 书籍详情页，`id` 来自路由 `/books/:id`
#[component]
pub fn BookDetailsPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let details = RwSignal::new(BookDetailsController::new(id));

    let load = move || {
        let Some((ticket, req)) = details.try_update(|c| c.begin_load()) else {
            return;
        };
        let api = auth.api();
        spawn_local(async move {
            let result = api.request(&req).await;
            details.try_update(|c| c.finish_load(ticket, result));
        });
    };

    Effect::new(move |_| load());

    let content = move || {
        details.with(|c| match c.state() {
            FetchState::Loading => view! { <Loader /> }.into_any(),
            FetchState::Success(book) => view! { <BookDetailCard book=book.clone() /> }.into_any(),
            // 详情接口总是返回一本书，Empty 只会在列表接口出现
            FetchState::Empty | FetchState::Failure(_) => {
                view! { <FailureView on_retry=move |_| load() /> }.into_any()
            }
        })
    };

    view! { <div class="max-w-5xl mx-auto px-4 py-8">{content}</div> }
}

#[component]
fn BookDetailCard(book: BookDetail) -> impl IntoView {
    let BookDetail {
        summary,
        about_author,
        about_book,
    } = book;
    let rating = summary.rating.map(|r| r.to_string()).unwrap_or_default();
    let status = summary.read_status.map(|s| s.label()).unwrap_or_default();

    view! {
        <article class="card bg-base-100 shadow-md">
            <div class="card-body space-y-6">
                <div class="flex flex-col sm:flex-row gap-6">
                    <img src=summary.cover_pic alt=summary.title.clone() class="h-64 w-44 object-cover rounded" />
                    <div class="space-y-2">
                        <h1 class="text-2xl font-bold">{summary.title}</h1>
                        <p class="text-base-content/70">{summary.author_name}</p>
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
                </div>
                <div class="divider"></div>
                <section class="space-y-2">
                    <h2 class="text-lg font-semibold">"About Author"</h2>
                    <p class="text-base-content/80">{about_author}</p>
                </section>
                <section class="space-y-2">
                    <h2 class="text-lg font-semibold">"About Book"</h2>
                    <p class="text-base-content/80">{about_book}</p>
                </section>
            </div>
        </article>
    }
}
