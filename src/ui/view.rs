//! View-model for the shorten result panel.
//!
//! All presentation state lives here and is passed explicitly into the
//! flow; rendering is a separate pass over the finished view. Nothing in
//! this module performs I/O.

/// Presentation state of the result panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Loader is being shown.
    pub loading: bool,
    /// Result panel is visible.
    pub visible: bool,
    /// The short URL text, empty when there is none.
    pub text: String,
    /// Error message, empty when there is none.
    pub error: String,
    /// Whether the copy/open action hint is shown.
    pub action_visible: bool,
}

impl ResultView {
    /// A submission has started: loader on, panel hidden.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.visible = false;
    }

    /// The request finished: loader off, panel shown.
    ///
    /// Always runs before the outcome is rendered, so the loader can
    /// never be left stuck on the failure path.
    pub fn finish_loading(&mut self) {
        self.loading = false;
        self.visible = true;
    }

    /// Shows a successful result: short URL set, error cleared, action shown.
    pub fn show_short_url(&mut self, short_url: impl Into<String>) {
        self.text = short_url.into();
        self.error.clear();
        self.action_visible = true;
    }

    /// Shows a failure: error set, result text cleared, action hidden.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.text.clear();
        self.action_visible = false;
    }
}
