mod document_panel;
mod history_panel;
mod results_panel;
mod search_panel;

use leptos::prelude::*;
use document_panel::DocumentPanel;
use history_panel::HistoryPanel;
use results_panel::ResultsPanel;
use search_panel::SearchPanel;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar">
            <DocumentPanel />
            <SearchPanel />
            <ResultsPanel />
            <HistoryPanel />
        </div>
    }
}

