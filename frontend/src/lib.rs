mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Leave Desk frontend");

    // window.__LEAVE_DESK_ENV (env.js) takes precedence over ./config.json.
    // The page reads layout and reset wiring once, so mount only after they resolve.
    leptos::spawn_local(async move {
        let settings = config::await_ui_settings().await;
        log::debug!("Runtime config initialized: {:?}", settings);
        router::mount_app(settings);
    });
}
