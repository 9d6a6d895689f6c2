use std::rc::Rc;

use leptos::prelude::*;
use pagelens_core::chart::ChartFrame;
use pagelens_core::types::{DocumentId, DocumentMeta, HistoryEntry, Passage, SearchParams};
use pagelens_core::{ClientConfig, Dictation, HttpGateway, SessionController, ViewSink};

pub type AppController = SessionController<HttpGateway, SignalViews>;

/// Reactive view state. Only the session controller writes to these through
/// [`SignalViews`]; the search form fields are also bound to their inputs.
#[derive(Clone, Copy)]
pub struct AppState {
    pub documents: RwSignal<Vec<DocumentMeta>>,
    pub selected_document: RwSignal<Option<DocumentId>>,
    pub viewer_url: RwSignal<Option<String>>,
    pub current_page: RwSignal<usize>,
    pub chart: RwSignal<ChartFrame>,
    pub results: RwSignal<Vec<Passage>>,
    pub history: RwSignal<Vec<HistoryEntry>>,
    pub status: RwSignal<String>,
    // search form
    pub query: RwSignal<String>,
    pub smoothing: RwSignal<f64>,
    pub threshold: RwSignal<f64>,
    pub top_k: RwSignal<u32>,
    pub timeline_width: u32,
    pub timeline_height: u32,
    pub dictation_available: bool,
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppState {
    pub fn new(config: &ClientConfig, gateway: HttpGateway, dictation: Option<Rc<dyn Dictation>>) -> Self {
        let views = SignalViews {
            documents: RwSignal::new(Vec::new()),
            selected_document: RwSignal::new(None),
            viewer_url: RwSignal::new(None),
            current_page: RwSignal::new(1),
            chart: RwSignal::new(ChartFrame::default()),
            results: RwSignal::new(Vec::new()),
            history: RwSignal::new(Vec::new()),
            status: RwSignal::new(String::new()),
            query: RwSignal::new(String::new()),
            smoothing: RwSignal::new(config.search.smoothing),
            threshold: RwSignal::new(config.search.threshold),
            top_k: RwSignal::new(config.search.top_k),
        };
        let dictation_available = dictation.is_some();
        let controller = SessionController::new(gateway, views, dictation);

        Self {
            documents: views.documents,
            selected_document: views.selected_document,
            viewer_url: views.viewer_url,
            current_page: views.current_page,
            chart: views.chart,
            results: views.results,
            history: views.history,
            status: views.status,
            query: views.query,
            smoothing: views.smoothing,
            threshold: views.threshold,
            top_k: views.top_k,
            timeline_width: config.timeline_width,
            timeline_height: config.timeline_height,
            dictation_available,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Current search form values.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            query: self.query.get_untracked(),
            smoothing: self.smoothing.get_untracked(),
            threshold: self.threshold.get_untracked(),
            top_k: self.top_k.get_untracked(),
        }
    }
}

/// The controller's window onto the UI: every call just sets signals.
#[derive(Clone, Copy)]
pub struct SignalViews {
    documents: RwSignal<Vec<DocumentMeta>>,
    selected_document: RwSignal<Option<DocumentId>>,
    viewer_url: RwSignal<Option<String>>,
    current_page: RwSignal<usize>,
    chart: RwSignal<ChartFrame>,
    results: RwSignal<Vec<Passage>>,
    history: RwSignal<Vec<HistoryEntry>>,
    status: RwSignal<String>,
    query: RwSignal<String>,
    smoothing: RwSignal<f64>,
    threshold: RwSignal<f64>,
    top_k: RwSignal<u32>,
}

impl ViewSink for SignalViews {
    fn show_documents(&self, documents: &[DocumentMeta], selected: Option<DocumentId>) {
        self.documents.set(documents.to_vec());
        self.selected_document.set(selected);
    }

    fn show_selection(&self, selected: Option<DocumentId>) {
        self.selected_document.set(selected);
    }

    fn show_page(&self, url: &str, page: usize) {
        self.viewer_url.set(Some(url.to_string()));
        self.current_page.set(page);
    }

    fn show_chart(&self, frame: &ChartFrame) {
        self.chart.set(frame.clone());
    }

    fn show_results(&self, passages: &[Passage]) {
        self.results.set(passages.to_vec());
    }

    fn show_history(&self, entries: &[HistoryEntry]) {
        self.history.set(entries.to_vec());
    }

    fn show_status(&self, message: &str) {
        self.status.set(message.to_string());
    }

    fn fill_search_form(&self, params: &SearchParams) {
        self.query.set(params.query.clone());
        self.smoothing.set(params.smoothing);
        self.threshold.set(params.threshold);
        self.top_k.set(params.top_k);
    }

    fn fill_query(&self, text: &str) {
        self.query.set(text.to_string());
    }
}
