use wasm_bindgen::JsValue;

/// Failures inside the page glue. None of these ever reach the page:
/// entry points log them and carry on.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("localStorage is not available")]
    StorageUnavailable,

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid site-ui config: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    pub(crate) fn dom(context: &str, err: JsValue) -> Self {
        UiError::Dom(format!("{context}: {err:?}"))
    }

    pub(crate) fn storage(context: &str, err: JsValue) -> Self {
        UiError::Storage(format!("{context}: {err:?}"))
    }
}

pub type UiResult<T> = Result<T, UiError>;
