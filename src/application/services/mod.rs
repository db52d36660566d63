//! Application services.

pub mod shorten_service;

pub use shorten_service::{ShortenOutcome, ShortenService};
