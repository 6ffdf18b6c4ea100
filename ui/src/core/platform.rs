//! Platform detection and async plumbing helpers.

/// Short label for the running platform, used in debug traces.
pub fn platform_label() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "web"
    } else {
        "desktop"
    }
}

/// Fire-and-forget a future on the browser task queue.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
