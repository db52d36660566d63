//! External integrations: clipboard and browser.

pub mod browser;
pub mod clipboard;
