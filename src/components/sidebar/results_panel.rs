use leptos::prelude::*;
use crate::state::AppState;

#[component]
pub(super) fn ResultsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="sidebar-panel">
            <div class="setting-group">
                <div class="setting-group-title">"Results"</div>
                <ul class="result-list">
                    {move || state.results.get().into_iter().map(|p| {
                        let page = p.page;
                        view! {
                            <li
                                class=move || if state.current_page.get() == page { "result sel" } else { "result" }
                                on:click=move |_| state.controller().seek(page)
                            >
                                <b>{format!("p.{}", p.page)}</b>
                                {format!(" score={:.3}", p.score)}
                                <div class="small">{p.snippet}</div>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
