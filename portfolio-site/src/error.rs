use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no section with id `{0}`")]
    MissingSection(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
