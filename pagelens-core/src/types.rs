use serde::{Deserialize, Serialize};

pub type DocumentId = i64;

/// One entry of `GET /api/documents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub id: DocumentId,
    pub filename: String,
    pub page_count: usize,
}

impl DocumentMeta {
    /// Option label shown in the document picker, e.g. `report.pdf (12p)`.
    pub fn label(&self) -> String {
        format!("{} ({}p)", self.filename, self.page_count)
    }
}

/// Response of `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub document_id: DocumentId,
    pub filename: String,
    pub page_count: usize,
}

/// A file picked by the user, already read into memory.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Values of the search form.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub smoothing: f64,
    pub threshold: f64,
    pub top_k: u32,
}

impl From<&HistoryEntry> for SearchParams {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            query: entry.query.clone(),
            smoothing: entry.smoothing,
            threshold: entry.threshold,
            top_k: entry.top_k,
        }
    }
}

/// Body of `POST /api/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub document_id: DocumentId,
    pub query: String,
    pub smoothing: f64,
    pub threshold: f64,
    pub top_k: u32,
}

impl SearchRequest {
    pub fn new(document_id: DocumentId, params: &SearchParams) -> Self {
        Self {
            document_id,
            query: params.query.trim().to_string(),
            smoothing: params.smoothing,
            threshold: params.threshold,
            top_k: params.top_k,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub page: usize,
    pub score: f64,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<usize>,
}

/// A page that passed the threshold, as ranked by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedPage {
    pub page: usize,
    pub score: f64,
}

/// Response of `POST /api/search`. Fields this client does not know about are
/// kept in `extra` so an export forwards the result unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub passages: Vec<Passage>,
    #[serde(default)]
    pub raw_scores: Vec<f64>,
    #[serde(default)]
    pub smoothed_scores: Vec<f64>,
    #[serde(default)]
    pub top_pages: Vec<RankedPage>,
    #[serde(default)]
    pub backend: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One row of `GET /api/document/{id}/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub smoothing: f64,
    pub threshold: f64,
    pub top_k: u32,
}

impl HistoryEntry {
    pub fn label(&self) -> String {
        format!("{} (s={}, t={}, k={})", self.query, self.smoothing, self.threshold, self.top_k)
    }
}

/// Response of `POST /api/export/{id}`: server-side file names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportedFiles {
    pub json: String,
    pub csv: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_search_payload() {
        let body = json!({
            "raw_scores": [0.0, 1.0, 0.5],
            "smoothed_scores": [0.1, 0.9, 0.4],
            "top_pages": [{"page": 2, "score": 0.9}],
            "passages": [
                {"page": 2, "chunk_index": 0, "score": 0.71, "snippet": "solar panels"}
            ],
            "backend": "sentence-transformers",
            "took_ms": 12
        });
        let result: SearchResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(result.passages[0].page, 2);
        assert_eq!(result.passages[0].chunk_index, Some(0));
        assert_eq!(result.top_pages, vec![RankedPage { page: 2, score: 0.9 }]);
        assert_eq!(result.backend, "sentence-transformers");
        assert_eq!(result.extra.get("took_ms"), Some(&json!(12)));

        // exported verbatim
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn missing_series_default_to_empty() {
        let result: SearchResult = serde_json::from_str(r#"{"backend": "hash"}"#).unwrap();
        assert!(result.raw_scores.is_empty());
        assert!(result.smoothed_scores.is_empty());
        assert!(result.passages.is_empty());
    }

    #[test]
    fn search_request_trims_query() {
        let params = SearchParams {
            query: "  heat pumps ".into(),
            smoothing: 2.0,
            threshold: 0.1,
            top_k: 5,
        };
        let req = SearchRequest::new(4, &params);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"document_id": 4, "query": "heat pumps", "smoothing": 2.0, "threshold": 0.1, "top_k": 5})
        );
    }

    #[test]
    fn labels() {
        let doc = DocumentMeta { id: 1, filename: "manual.pdf".into(), page_count: 12 };
        assert_eq!(doc.label(), "manual.pdf (12p)");
        let entry = HistoryEntry { query: "wiring".into(), smoothing: 2.0, threshold: 0.0, top_k: 10 };
        assert_eq!(entry.label(), "wiring (s=2, t=0, k=10)");
        assert_eq!(SearchParams::from(&entry).query, "wiring");
    }
}
