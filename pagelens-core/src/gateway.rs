//! Backend access. [`Gateway`] is the seam the session controller talks
//! through; [`HttpGateway`] is the reqwest implementation used in the browser.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::types::{
    DocumentId, DocumentMeta, ExportedFiles, HistoryEntry, SearchRequest, SearchResult,
    UploadFile, UploadedDocument,
};

#[async_trait(?Send)]
pub trait Gateway {
    async fn list_documents(&self) -> Result<Vec<DocumentMeta>>;
    async fn upload(&self, file: UploadFile) -> Result<UploadedDocument>;
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult>;
    async fn history(&self, document_id: DocumentId) -> Result<Vec<HistoryEntry>>;
    async fn export(&self, document_id: DocumentId, result: &SearchResult) -> Result<ExportedFiles>;

    /// Address the page viewer loads to show `page` of a document.
    fn viewer_url(&self, document_id: DocumentId, page: usize) -> String {
        format!("/api/document/{document_id}/file#page={page}")
    }
}

#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base: Url,
}

impl HttpGateway {
    /// `base` is the backend origin; API paths are resolved against it.
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client: Client::new(), base })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }
}

/// Turn a response into `T`, or into the raw body text when the status is not
/// a success.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("backend returned {}: {}", status, body);
        return Err(ApiError::http(status.as_u16(), body));
    }
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn list_documents(&self) -> Result<Vec<DocumentMeta>> {
        let response = self.client.get(self.url("/api/documents")?).send().await?;
        decode(response).await
    }

    async fn upload(&self, file: UploadFile) -> Result<UploadedDocument> {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("/api/upload")?)
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let response = self
            .client
            .post(self.url("/api/search")?)
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn history(&self, document_id: DocumentId) -> Result<Vec<HistoryEntry>> {
        let url = self.url(&format!("/api/document/{document_id}/history"))?;
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn export(&self, document_id: DocumentId, result: &SearchResult) -> Result<ExportedFiles> {
        let response = self
            .client
            .post(self.url(&format!("/api/export/{document_id}"))?)
            .json(result)
            .send()
            .await?;
        decode(response).await
    }

    fn viewer_url(&self, document_id: DocumentId, page: usize) -> String {
        match self.url(&format!("/api/document/{document_id}/file")) {
            Ok(url) => format!("{url}#page={page}"),
            Err(_) => format!("/api/document/{document_id}/file#page={page}"),
        }
    }
}
