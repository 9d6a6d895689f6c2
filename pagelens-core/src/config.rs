use serde::{Deserialize, Serialize};

/// Client settings. Every field has a default, so an empty JSON object (or no
/// config at all) is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`. `None` means the origin
    /// the page was served from.
    pub api_base: Option<String>,
    /// Fixed pixel size of the timeline surface.
    pub timeline_width: u32,
    pub timeline_height: u32,
    pub search: SearchDefaults,
    /// BCP 47 language tag for dictation.
    pub dictation_lang: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            timeline_width: 1000,
            timeline_height: 120,
            search: SearchDefaults::default(),
            dictation_lang: "en-US".into(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Initial values of the search form; mirror the backend's request defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub smoothing: f64,
    pub threshold: f64,
    pub top_k: u32,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self { smoothing: 2.0, threshold: 0.0, top_k: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = ClientConfig::from_json(
            r#"{"api_base": "http://localhost:8000", "search": {"top_k": 3}}"#,
        )
        .unwrap();
        assert_eq!(cfg.api_base.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cfg.search.top_k, 3);
        assert_eq!(cfg.search.smoothing, 2.0);
        assert_eq!(cfg.timeline_width, 1000);
        assert_eq!(cfg.dictation_lang, "en-US");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ClientConfig::from_json("{timeline_width: 3").is_err());
    }
}
