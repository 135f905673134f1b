use clipboard::{ClipboardContext, ClipboardProvider};

use crate::core::error::SystemError;

pub struct ClipboardService;

impl ClipboardService {
    pub fn copy_text(text: &str) -> Result<(), SystemError> {
        let mut context: ClipboardContext =
            ClipboardProvider::new().map_err(|e| SystemError::Clipboard(e.to_string()))?;
        context
            .set_contents(text.to_string())
            .map_err(|e| SystemError::Clipboard(e.to_string()))
    }
}
