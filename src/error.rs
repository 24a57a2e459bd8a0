//! Startup errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while binding the behavior layer to the page.
///
/// Only raised during startup. Once bound, every handler recovers locally.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The page has no browser `window` or `document`.
    #[error("no browser document available")]
    NoDocument,
    /// A required element is missing from the markup.
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),
    /// A DOM call threw while wiring listeners or observers.
    #[error("DOM call failed during {context}: {message}")]
    Js { context: &'static str, message: String },
}

impl SetupError {
    #[cfg(feature = "hydrate")]
    pub(crate) fn js(context: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Js { context, message: format!("{err:?}") }
    }
}
