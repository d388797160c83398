//! 登录页
//!
//! 表单状态由 `LoginController` 持有；页面只负责把输入写进去、
//! 在提交完成后根据结果替换路由。

use crate::auth::use_auth;
use crate::web::router::use_router;
use bookhub_shared::controller::{LoginController, LoginOutcome, LoginState};
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOGIN_IMAGE_URL: &str =
    "https://res.cloudinary.com/dkxxgpzd8/image/upload/v1647190320/Rectangle_1467_ynoyqz.png";
const LOGIN_LOGO_URL: &str =
    "https://res.cloudinary.com/dkxxgpzd8/image/upload/v1647190320/Group_7731_v0p1nt_gjeokw.png";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let login = RwSignal::new(LoginController::new(auth.session_expiry_days()));

    let is_submitting = move || login.with(|c| *c.state() == LoginState::Submitting);
    let error_msg = move || login.with(|c| c.error_message().map(str::to_string));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 提交中再次提交直接忽略
        let Some(req) = login.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };

        let api = auth.api();
        spawn_local(async move {
            let result = api.request(&req).await;

            // 页面可能已经卸载
            let outcome = login.try_update(|c| c.finish_submit(api.session(), result));

            if let Some(LoginOutcome::Redirect(route)) = outcome {
                auth.mark_logged_in();
                router.replace(route);
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col lg:flex-row bg-base-200">
            <div class="hidden lg:block lg:w-3/5">
                <img src=LOGIN_IMAGE_URL alt="website login" class="h-screen w-full object-cover" />
            </div>

            <div class="flex flex-1 items-center justify-center p-6">
                <div class="card shrink-0 w-full max-w-md shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="flex justify-center mb-4">
                            <img src=LOGIN_LOGO_URL alt="login website logo" class="h-12" />
                        </div>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username*"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| login.update(|c| c.set_username(event_target_value(&ev)))
                                prop:value=move || login.with(|c| c.username().to_string())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password*"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| login.update(|c| c.set_password(event_target_value(&ev)))
                                prop:value=move || login.with(|c| c.password().to_string())
                                class="input input-bordered"
                            />
                        </div>

                        {move || error_msg().map(|msg| view! {
                            <p class="text-error text-sm mt-2">{msg}</p>
                        })}

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=is_submitting>
                                "Login"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
