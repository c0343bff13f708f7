use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{api::ApiClient, config::UiSettings, pages::leaves::LeavePage};

pub fn mount_app(settings: UiSettings) {
    mount_to_body(move || app_root(settings));
}

/// Root view; `settings` must already be resolved from the runtime config.
pub fn app_root(settings: UiSettings) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(settings);
    view! {
        <Router>
            <Routes>
                <Route path="/" view=LeavePage/>
            </Routes>
        </Router>
    }
}
