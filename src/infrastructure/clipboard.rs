//! System clipboard integration.

use crate::error::AppError;

/// Copies `text` to the system clipboard.
///
/// Clipboard initialization can fail on headless machines; callers treat
/// the error as non-fatal and warn instead of aborting.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| AppError::Clipboard(format!("failed to copy: {e}")))?;
    Ok(())
}
