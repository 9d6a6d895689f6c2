use std::rc::Rc;

use leptos::prelude::*;
use pagelens_core::{Dictation, HttpGateway};
use crate::audio::dictation::BrowserDictation;
use crate::components::page_viewer::PageViewer;
use crate::components::sidebar::Sidebar;
use crate::components::timeline::Timeline;
use crate::config;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();

    let Some(base) = config::api_base(&config) else {
        log::error!("No backend origin: set api_base in #pagelens-config");
        return view! { <div class="empty-state">"No backend address configured"</div> }.into_any();
    };
    let gateway = match HttpGateway::new(&base) {
        Ok(g) => g,
        Err(e) => {
            log::error!("Bad backend address {}: {}", base, e);
            return view! { <div class="empty-state">{e.to_string()}</div> }.into_any();
        }
    };
    let dictation = BrowserDictation::detect(&config.dictation_lang)
        .map(|d| Rc::new(d) as Rc<dyn Dictation>);

    let state = AppState::new(&config, gateway, dictation);
    provide_context(state);

    let controller = state.controller();
    wasm_bindgen_futures::spawn_local(async move {
        controller.load_documents().await;
    });

    view! {
        <div class="app">
            <Sidebar />
            <MainArea />
        </div>
    }
    .into_any()
}

#[component]
fn MainArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let has_document = Memo::new(move |_| state.selected_document.get().is_some());

    view! {
        <div class="main">
            <div class="toolbar">
                <span style="color: #666">"PageLens"</span>
                <span class="status">{move || state.status.get()}</span>
            </div>
            {move || {
                if has_document.get() {
                    view! {
                        <Timeline />
                        <PageViewer />
                    }.into_any()
                } else {
                    view! {
                        <div class="empty-state">
                            "Upload a PDF in the sidebar to start searching"
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
