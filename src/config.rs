use pagelens_core::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "pagelens-config";

/// Read the optional `<script type="application/json" id="pagelens-config">`
/// block from the host page. Missing or malformed config falls back to the
/// defaults.
pub fn load() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return ClientConfig::default();
    };
    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            ClientConfig::default()
        }
    }
}

/// Backend origin: the configured `api_base`, else the page's own origin.
pub fn api_base(config: &ClientConfig) -> Option<String> {
    if let Some(base) = &config.api_base {
        return Some(base.clone());
    }
    web_sys::window()?.location().origin().ok()
}
