use thiserror::Error;

/// Failure talking to the document backend. HTTP failures display as the raw
/// response body, which is what the status line shows.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success HTTP status.
    #[error("{body}")]
    Http { status: u16, body: String },

    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = if body.trim().is_empty() { format!("HTTP {status}") } else { body };
        ApiError::Http { status, body }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_shows_raw_body() {
        let e = ApiError::http(400, r#"{"detail":"Only PDF files are supported"}"#);
        assert_eq!(e.to_string(), r#"{"detail":"Only PDF files are supported"}"#);
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        assert_eq!(ApiError::http(502, "  ").to_string(), "HTTP 502");
    }
}
