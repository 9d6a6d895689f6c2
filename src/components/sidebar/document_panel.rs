use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use pagelens_core::types::{DocumentId, UploadFile};
use crate::state::AppState;

/// Read a picked file into memory for the multipart upload.
async fn read_file(file: &web_sys::File) -> Option<UploadFile> {
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("Failed to read {}: {:?}", file.name(), e);
            return None;
        }
    };
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(UploadFile { name: file.name(), bytes })
}

#[component]
pub(super) fn DocumentPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_select = move |ev: web_sys::Event| {
        let Ok(id) = event_target_value(&ev).parse::<DocumentId>() else { return };
        let doc = state.documents.with_untracked(|docs| docs.iter().find(|d| d.id == id).cloned());
        let Some(doc) = doc else { return };
        let controller = state.controller();
        wasm_bindgen_futures::spawn_local(async move {
            controller.select_document(doc.id, doc.page_count).await;
        });
    };

    let on_file = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let input: web_sys::HtmlInputElement = target.unchecked_into();
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        // let the same file be picked again after a failed upload
        input.set_value("");
        let controller = state.controller();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(upload) = read_file(&file).await else { return };
            if let Ok(doc) = controller.upload(upload).await {
                log::info!("Uploaded {} as document {}", doc.filename, doc.document_id);
            }
        });
    };

    view! {
        <div class="sidebar-panel">
            <div class="setting-group">
                <div class="setting-group-title">"Document"</div>
                <div class="setting-row">
                    <input
                        type="file"
                        accept="application/pdf,.pdf"
                        on:change=on_file
                    />
                </div>
                <div class="setting-row">
                    <select class="setting-select" on:change=on_select>
                        {move || state.documents.get().into_iter().map(|doc| {
                            let id = doc.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || state.selected_document.get() == Some(id)
                                >{doc.label()}</option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}
