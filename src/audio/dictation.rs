use std::cell::RefCell;

use js_sys::{Array, Function, Reflect};
use pagelens_core::Dictation;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static ON_RESULT: RefCell<Option<Closure<dyn FnMut(JsValue)>>> = RefCell::new(None);
    static PENDING: RefCell<Option<Box<dyn FnOnce(String)>>> = RefCell::new(None);
}

/// The browser's Web Speech API recogniser, one utterance per `listen`.
pub struct BrowserDictation {
    recognition: JsValue,
}

impl BrowserDictation {
    /// Probe for `SpeechRecognition` (or the webkit-prefixed one). `None`
    /// when the browser has neither.
    pub fn detect(lang: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let ctor = ["SpeechRecognition", "webkitSpeechRecognition"]
            .iter()
            .find_map(|name| {
                Reflect::get(&window, &JsValue::from_str(name))
                    .ok()
                    .filter(|v| v.is_function())
            })?;
        let ctor: Function = ctor.unchecked_into();
        let recognition = match Reflect::construct(&ctor, &Array::new()) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to create SpeechRecognition: {:?}", e);
                return None;
            }
        };

        let _ = Reflect::set(&recognition, &JsValue::from_str("lang"), &JsValue::from_str(lang));
        let _ = Reflect::set(&recognition, &JsValue::from_str("continuous"), &JsValue::FALSE);
        let _ = Reflect::set(&recognition, &JsValue::from_str("interimResults"), &JsValue::FALSE);

        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let Some(text) = first_transcript(&event) else { return };
            let callback = PENDING.with(|p| p.borrow_mut().take());
            if let Some(callback) = callback {
                callback(text);
            }
        });
        let _ = Reflect::set(&recognition, &JsValue::from_str("onresult"), handler.as_ref().unchecked_ref());
        ON_RESULT.with(|h| *h.borrow_mut() = Some(handler));

        log::info!("Speech recognition available ({})", lang);
        Some(Self { recognition })
    }
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript")).ok()?.as_string()
}

impl Dictation for BrowserDictation {
    fn listen(&self, on_transcript: Box<dyn FnOnce(String)>) {
        PENDING.with(|p| *p.borrow_mut() = Some(on_transcript));
        let start = Reflect::get(&self.recognition, &JsValue::from_str("start"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        let Some(start) = start else {
            log::error!("SpeechRecognition has no start()");
            return;
        };
        if let Err(e) = start.call0(&self.recognition) {
            // already listening, or the user denied the microphone
            log::warn!("Speech recognition did not start: {:?}", e);
        }
    }
}
