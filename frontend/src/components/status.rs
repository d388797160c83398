//! 加载中与失败视图
//!
//! 每个数据页面都在这两者之间切换，文案保持一致。

use bookhub_shared::GENERIC_FAILURE_MESSAGE;
use leptos::prelude::*;

const FAILURE_IMAGE_URL: &str =
    "https://res.cloudinary.com/dkxxgpzd8/image/upload/v1647250727/Screenshot_30_uavmge.png";

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-24" data-testid="loader">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 失败视图，"Try Again" 原样重发上一次请求
#[component]
pub fn FailureView(#[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4 py-16 text-center">
            <img src=FAILURE_IMAGE_URL alt="failure view" class="w-64 max-w-full" />
            <p class="text-lg text-base-content/80">{GENERIC_FAILURE_MESSAGE}</p>
            <button type="button" class="btn btn-primary" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
