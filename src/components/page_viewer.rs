use leptos::prelude::*;
use crate::state::AppState;

#[component]
pub fn PageViewer() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="viewer-container">
            <iframe
                class="page-viewer"
                title=move || format!("Page {}", state.current_page.get())
                src=move || state.viewer_url.get().unwrap_or_default()
            />
        </div>
    }
}
