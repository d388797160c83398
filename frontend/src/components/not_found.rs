use crate::web::router::Link;
use leptos::prelude::*;

const NOT_FOUND_IMAGE_URL: &str =
    "https://res.cloudinary.com/dkxxgpzd8/image/upload/v1647250714/Screenshot_29_qvdr3k.png";

/// 404 页面，不带页头页脚，无需登录
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col text-center">
                <img src=NOT_FOUND_IMAGE_URL alt="not found" class="w-80 max-w-full" />
                <h1 class="text-3xl font-bold">"Page Not Found"</h1>
                <p class="text-base-content/70">
                    "we are sorry, the page you requested could not be found"
                </p>
                <Link to="/">
                    <button type="button" class="btn btn-primary">"Go Back to Home"</button>
                </Link>
            </div>
        </div>
    }
}
