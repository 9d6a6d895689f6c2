//! The session controller: the only owner of "which document, which page,
//! which result", and the only writer to the dependent views.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::chart::{zero_fill, ChartFrame};
use crate::dictation::Dictation;
use crate::error::{ApiError, Result};
use crate::gateway::Gateway;
use crate::types::{
    DocumentId, DocumentMeta, ExportedFiles, HistoryEntry, Passage, SearchParams, SearchRequest,
    SearchResult, UploadFile, UploadedDocument,
};

/// Everything the controller pushes out. Implementations only display what
/// they are given; they never call back into the controller synchronously.
pub trait ViewSink {
    fn show_documents(&self, documents: &[DocumentMeta], selected: Option<DocumentId>);
    fn show_selection(&self, selected: Option<DocumentId>);
    /// Point the page viewer at `url` (showing `page`).
    fn show_page(&self, url: &str, page: usize);
    fn show_chart(&self, frame: &ChartFrame);
    fn show_results(&self, passages: &[Passage]);
    fn show_history(&self, entries: &[HistoryEntry]);
    fn show_status(&self, message: &str);
    fn fill_search_form(&self, params: &SearchParams);
    fn fill_query(&self, text: &str);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub document_id: Option<DocumentId>,
    pub page_count: usize,
    /// 1-based; within `[1, page_count]` whenever `page_count > 0`.
    pub current_page: usize,
    /// Always computed for `document_id`.
    pub last_result: Option<SearchResult>,
}

impl Session {
    pub fn for_document(document_id: DocumentId, page_count: usize) -> Self {
        Self {
            document_id: Some(document_id),
            page_count,
            current_page: 1,
            last_result: None,
        }
    }

    /// `page` pulled into `[1, page_count]`, or `None` for an empty document.
    pub fn clamp_page(&self, page: usize) -> Option<usize> {
        (self.page_count > 0).then(|| page.clamp(1, self.page_count))
    }

    /// What the timeline should show for this session. Score series shorter
    /// than the page count are zero-filled.
    pub fn chart_frame(&self) -> ChartFrame {
        let n = self.page_count;
        let marker = (n > 0).then(|| self.current_page.clamp(1, n) - 1);
        match &self.last_result {
            Some(result) => ChartFrame {
                scores: zero_fill(&result.smoothed_scores, n),
                raw: Some(zero_fill(&result.raw_scores, n)),
                marker,
            },
            None => ChartFrame { marker, ..ChartFrame::empty(n) },
        }
    }
}

struct Inner<G, V> {
    gateway: G,
    views: V,
    dictation: Option<Rc<dyn Dictation>>,
    session: RefCell<Session>,
    /// Bumped by every search and document switch; a search response is only
    /// applied if its ticket is still the latest.
    ticket: Cell<u64>,
}

/// Cheap to clone; clones share one session. Runs on a single thread, and no
/// `RefCell` borrow is held across an await.
pub struct SessionController<G, V> {
    inner: Rc<Inner<G, V>>,
}

impl<G, V> Clone for SessionController<G, V> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<G: Gateway + 'static, V: ViewSink + 'static> SessionController<G, V> {
    pub fn new(gateway: G, views: V, dictation: Option<Rc<dyn Dictation>>) -> Self {
        Self {
            inner: Rc::new(Inner {
                gateway,
                views,
                dictation,
                session: RefCell::new(Session::default()),
                ticket: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn dictation_available(&self) -> bool {
        self.inner.dictation.is_some()
    }

    fn next_ticket(&self) -> u64 {
        let t = self.inner.ticket.get() + 1;
        self.inner.ticket.set(t);
        t
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.inner.ticket.get() == ticket
    }

    fn fail(&self, action: &str, err: &ApiError) {
        log::warn!("{action} failed: {err}");
        self.inner.views.show_status(&err.to_string());
    }

    /// Fetch the document list and select the first document, if any.
    pub async fn load_documents(&self) {
        let Some(docs) = self.refresh_documents(None).await else { return };
        if let Some(first) = docs.first() {
            self.select_document(first.id, first.page_count).await;
        }
    }

    async fn refresh_documents(&self, selected: Option<DocumentId>) -> Option<Vec<DocumentMeta>> {
        match self.inner.gateway.list_documents().await {
            Ok(docs) => {
                let selected = selected.or_else(|| docs.first().map(|d| d.id));
                self.inner.views.show_documents(&docs, selected);
                Some(docs)
            }
            Err(e) => {
                self.fail("listing documents", &e);
                None
            }
        }
    }

    /// Switch to another document: fresh session on page 1, no result, empty
    /// timeline, then that document's history. Any search still in flight is
    /// abandoned, so its "Searching..." status is cleared here.
    pub async fn select_document(&self, document_id: DocumentId, page_count: usize) {
        self.next_ticket();
        let session = Session::for_document(document_id, page_count);
        let frame = session.chart_frame();
        *self.inner.session.borrow_mut() = session;
        log::info!("selected document {document_id} ({page_count} pages)");

        let views = &self.inner.views;
        views.show_selection(Some(document_id));
        views.show_status("");
        views.show_results(&[]);
        views.show_page(&self.inner.gateway.viewer_url(document_id, 1), 1);
        views.show_chart(&frame);
        self.refresh_history(document_id).await;
    }

    /// Upload and select a new document. Errors are shown verbatim and leave
    /// the session untouched.
    pub async fn upload(&self, file: UploadFile) -> Result<UploadedDocument> {
        self.inner.views.show_status("Ingesting PDF...");
        let doc = match self.inner.gateway.upload(file).await {
            Ok(doc) => doc,
            Err(e) => {
                self.fail("upload", &e);
                return Err(e);
            }
        };
        self.refresh_documents(Some(doc.document_id)).await;
        self.select_document(doc.document_id, doc.page_count).await;
        self.inner.views.show_status(&format!("Loaded {}", doc.filename));
        Ok(doc)
    }

    /// Run a query against the selected document. Blank queries and the
    /// no-document case are ignored. A response that was overtaken by a later
    /// search or a document switch is dropped.
    pub async fn search(&self, params: SearchParams) {
        let Some(document_id) = self.inner.session.borrow().document_id else { return };
        if params.query.trim().is_empty() {
            return;
        }

        let ticket = self.next_ticket();
        let request = SearchRequest::new(document_id, &params);
        self.inner.views.show_status("Searching...");

        let response = self.inner.gateway.search(&request).await;
        if !self.is_current(ticket) {
            log::debug!("dropping stale search response for {:?}", request.query);
            return;
        }
        let result = match response {
            Ok(result) => result,
            Err(e) => {
                self.fail("search", &e);
                return;
            }
        };

        let page_count = self.inner.session.borrow().page_count;
        if result.smoothed_scores.len() != page_count || result.raw_scores.len() != page_count {
            log::debug!(
                "score series length {}/{} differs from page count {page_count}",
                result.smoothed_scores.len(),
                result.raw_scores.len()
            );
        }

        let frame = {
            let mut session = self.inner.session.borrow_mut();
            session.last_result = Some(result.clone());
            session.chart_frame()
        };
        let views = &self.inner.views;
        views.show_results(&result.passages);
        views.show_chart(&frame);
        if self.refresh_history(document_id).await && self.is_current(ticket) {
            views.show_status(&format!("Done ({})", result.backend));
        }
    }

    /// Move to `page` (1-based, clamped into range) and repaint the marker.
    pub fn seek(&self, page: usize) {
        let (document_id, page, frame) = {
            let mut session = self.inner.session.borrow_mut();
            let Some(document_id) = session.document_id else { return };
            let Some(page) = session.clamp_page(page) else { return };
            session.current_page = page;
            (document_id, page, session.chart_frame())
        };
        log::debug!("seek to page {page}");
        let views = &self.inner.views;
        views.show_page(&self.inner.gateway.viewer_url(document_id, page), page);
        views.show_chart(&frame);
    }

    /// Seek to a zero-based timeline index.
    pub fn seek_index(&self, index: usize) {
        self.seek(index + 1);
    }

    /// Put a past query back into the form and run it again.
    pub async fn replay_history_entry(&self, entry: &HistoryEntry) {
        let params = SearchParams::from(entry);
        self.inner.views.fill_search_form(&params);
        self.search(params).await;
    }

    /// Send the last result to the backend for export. No-op before the first
    /// successful search.
    pub async fn export_last_result(&self) -> Option<ExportedFiles> {
        let (document_id, result) = {
            let session = self.inner.session.borrow();
            (session.document_id?, session.last_result.clone()?)
        };
        match self.inner.gateway.export(document_id, &result).await {
            Ok(files) => {
                self.inner
                    .views
                    .show_status(&format!("Exported {} and {}", files.json, files.csv));
                Some(files)
            }
            Err(e) => {
                self.fail("export", &e);
                None
            }
        }
    }

    /// Listen for a spoken query and drop the transcript into the query field.
    pub fn dictate(&self) {
        let Some(dictation) = &self.inner.dictation else { return };
        let this = self.clone();
        dictation.listen(Box::new(move |text| this.inner.views.fill_query(&text)));
    }

    /// `false` if the fetch failed; the error is already on the status line.
    async fn refresh_history(&self, document_id: DocumentId) -> bool {
        let entries = match self.inner.gateway.history(document_id).await {
            Ok(entries) => entries,
            Err(e) => {
                self.fail("loading history", &e);
                return false;
            }
        };
        // the user may have switched documents while this was in flight
        if self.inner.session.borrow().document_id == Some(document_id) {
            self.inner.views.show_history(&entries);
        }
        true
    }
}
