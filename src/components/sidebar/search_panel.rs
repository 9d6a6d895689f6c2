use leptos::prelude::*;
use crate::state::AppState;

#[component]
pub(super) fn SearchPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let run_search = move || {
        let params = state.search_params();
        let controller = state.controller();
        wasm_bindgen_futures::spawn_local(async move {
            controller.search(params).await;
        });
    };

    let on_export = move |_: web_sys::MouseEvent| {
        let controller = state.controller();
        wasm_bindgen_futures::spawn_local(async move {
            controller.export_last_result().await;
        });
    };

    let dictation_available = state.dictation_available;

    view! {
        <div class="sidebar-panel">
            <div class="setting-group">
                <div class="setting-group-title">"Search"</div>
                <div class="setting-row">
                    <input
                        type="text"
                        class="setting-text"
                        placeholder="Ask about the document…"
                        prop:value=move || state.query.get()
                        on:input=move |ev: web_sys::Event| {
                            state.query.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                run_search();
                            }
                        }
                    />
                    <button
                        class="layer-btn"
                        disabled=!dictation_available
                        title=if dictation_available { "Dictate query" } else { "Speech API unavailable in this browser" }
                        on:click=move |_| state.controller().dictate()
                    >"Voice"</button>
                </div>
                <div class="setting-row">
                    <span class="setting-label">{move || format!("Smoothing: {:.1}", state.smoothing.get())}</span>
                    <input
                        type="range"
                        class="setting-range"
                        min="0"
                        max="8"
                        step="0.5"
                        prop:value=move || state.smoothing.get().to_string()
                        on:input=move |ev: web_sys::Event| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                state.smoothing.set(v);
                            }
                        }
                    />
                </div>
                <div class="setting-row">
                    <span class="setting-label">{move || format!("Threshold: {:.2}", state.threshold.get())}</span>
                    <input
                        type="range"
                        class="setting-range"
                        min="0"
                        max="1"
                        step="0.05"
                        prop:value=move || state.threshold.get().to_string()
                        on:input=move |ev: web_sys::Event| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                state.threshold.set(v);
                            }
                        }
                    />
                </div>
                <div class="setting-row">
                    <span class="setting-label">"Top K"</span>
                    <input
                        type="number"
                        class="setting-number"
                        min="1"
                        max="50"
                        prop:value=move || state.top_k.get().to_string()
                        on:change=move |ev: web_sys::Event| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                state.top_k.set(v.max(1));
                            }
                        }
                    />
                </div>
                <div class="setting-row">
                    <button class="layer-btn" on:click=move |_| run_search()>"Search"</button>
                    <button class="layer-btn" on:click=on_export>"Export"</button>
                </div>
            </div>
        </div>
    }
}
