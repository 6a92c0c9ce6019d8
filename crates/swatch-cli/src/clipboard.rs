use swatch_common::SwatchError;

/// System clipboard backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, SwatchError> {
        let inner = arboard::Clipboard::new().map_err(clipboard_error)?;
        Ok(Self { inner })
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), SwatchError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(clipboard_error)
    }
}

fn clipboard_error(e: arboard::Error) -> SwatchError {
    SwatchError::Other(format!("clipboard error: {e}"))
}
