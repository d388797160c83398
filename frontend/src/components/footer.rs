use crate::components::icons::{Google, Instagram, Twitter, Youtube};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-8 bg-base-100 text-base-content">
            <div class="flex gap-6">
                <Google attr:class="h-5 w-5" />
                <Twitter attr:class="h-5 w-5" />
                <Instagram attr:class="h-5 w-5" />
                <Youtube attr:class="h-5 w-5" />
            </div>
            <p class="font-medium">"Contact us"</p>
        </footer>
    }
}
