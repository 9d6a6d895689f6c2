/// Speech-to-text, when the environment offers it. Detected once at startup
/// and handed to the controller as `Option<Rc<dyn Dictation>>`.
pub trait Dictation {
    /// Start one listening session; `on_transcript` runs with the recognised
    /// text if anything was heard.
    fn listen(&self, on_transcript: Box<dyn FnOnce(String)>);
}
