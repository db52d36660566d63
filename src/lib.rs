//! # URL Shortener CLI
//!
//! Terminal client for the url-shortener service: normalizes what the
//! user typed, submits it for shortening, and presents the outcome.
//!
//! ## Architecture
//!
//! - **Utils** ([`utils`]) - URL normalization, the pure core
//! - **API Layer** ([`api`]) - Wire DTOs and the HTTP backend
//! - **Application Layer** ([`application`]) - The shorten flow
//! - **UI** ([`ui`]) - View-model, terminal rendering, confetti
//! - **Infrastructure** ([`infrastructure`]) - Clipboard and browser
//!
//! All presentation state lives in an explicit [`ui::ResultView`] passed
//! through the flow; nothing reads or mutates ambient UI state.
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the client at the service
//! export API_DOMAIN="https://s.example.com"
//!
//! # One-shot
//! shorten example.com
//!
//! # Interactive
//! shorten
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod ui;
pub mod utils;

pub mod config;

pub use error::AppError;
pub use state::InputState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::{ShortenBackend, ShortenerClient};
    pub use crate::application::services::{ShortenOutcome, ShortenService};
    pub use crate::error::AppError;
    pub use crate::state::InputState;
    pub use crate::ui::ResultView;
    pub use crate::utils::url_normalizer::{ensure_web_scheme, normalize_url};
}
