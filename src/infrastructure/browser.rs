//! Default browser integration.

use crate::error::AppError;

/// Opens `url` in the default browser.
///
/// Callers treat failure as non-fatal: the short link is already on
/// screen, opening it is a convenience.
pub fn open_in_browser(url: &str) -> Result<(), AppError> {
    open::that(url).map_err(|e| AppError::Browser(format!("failed to open browser: {e}")))?;
    Ok(())
}
