use leptos::prelude::*;
use crate::state::AppState;

#[component]
pub(super) fn HistoryPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="sidebar-panel">
            <div class="setting-group">
                <div class="setting-group-title">"History"</div>
                <ul class="history-list">
                    {move || state.history.get().into_iter().map(|entry| {
                        let label = entry.label();
                        view! {
                            <li
                                class="history-item"
                                on:click=move |_| {
                                    let controller = state.controller();
                                    let entry = entry.clone();
                                    wasm_bindgen_futures::spawn_local(async move {
                                        controller.replay_history_entry(&entry).await;
                                    });
                                }
                            >{label}</li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
