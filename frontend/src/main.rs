use bookhub_frontend::{App, init_tracing, log_info};
use leptos::prelude::*;

// wasm32 下使用 lol_alloc 作为全局分配器以减小体积
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    // panic 信息转发到 console.error
    console_error_panic_hook::set_once();
    init_tracing();
    log_info!("[Main] Mounting Book Hub");
    mount_to_body(App);
}
