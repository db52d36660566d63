//! Client-side view of the shortener service API.

pub mod client;
pub mod dto;

pub use client::{ShortenBackend, ShortenerClient};
