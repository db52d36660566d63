//! URL submission flow.

use std::sync::Arc;

use crate::api::client::ShortenBackend;
use crate::state::InputState;
use crate::ui::view::ResultView;
use crate::utils::url_normalizer::{ensure_web_scheme, normalize_url};
use tracing::info;

/// What a submission produced, for the caller to apply side effects
/// (clipboard, confetti, browser) on top of the rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// The service rejected the URL or could not be reached.
    Invalid,
    /// A short link was created.
    Shortened { short_url: String },
}

/// Service running the shorten flow against an injected backend.
///
/// The flow is total: it always completes, always finishes the loader
/// transition, and reports through the view-model plus the returned
/// outcome. A rejected URL and an unreachable service render the same
/// generic error.
pub struct ShortenService<B: ShortenBackend> {
    backend: Arc<B>,
    /// Public base the short code is appended to, fragment already stripped.
    display_base: String,
}

impl<B: ShortenBackend> ShortenService<B> {
    /// Creates a shorten service.
    ///
    /// `base_url` is the public base short links are displayed under; any
    /// `#fragment` is stripped once here.
    pub fn new(backend: Arc<B>, base_url: &str) -> Self {
        let display_base = match base_url.split_once('#') {
            Some((before, _)) => before.to_string(),
            None => base_url.to_string(),
        };

        Self {
            backend,
            display_base,
        }
    }

    /// Runs one submission of the input value.
    ///
    /// # Flow
    ///
    /// 1. Loader on, panel hidden
    /// 2. Normalize the typed value, then apply the web-scheme guard
    /// 3. Submit to the backend (single request, no retries)
    /// 4. Loader off, panel shown
    /// 5. Clear the input
    /// 6. Render the outcome into the view
    pub async fn handle_shorten(
        &self,
        state: &mut InputState,
        view: &mut ResultView,
    ) -> ShortenOutcome {
        view.begin_loading();

        let normalized = normalize_url(&state.input_value);
        let valid_url = ensure_web_scheme(&normalized);

        let new_url = self.backend.shorten(&valid_url).await;

        view.finish_loading();
        state.input_value.clear();

        match new_url {
            None => {
                view.show_error("This url is invalid..");
                ShortenOutcome::Invalid
            }
            Some(code) => {
                let short_url = format!("{}{}", self.display_base, code);
                info!("shortened to {short_url}");
                view.show_short_url(&short_url);
                ShortenOutcome::Shortened { short_url }
            }
        }
    }
}
