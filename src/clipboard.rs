use crate::error::AppError;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// System clipboard. Opened lazily so a headless session still starts.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
