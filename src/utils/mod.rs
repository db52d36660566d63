//! Shared utility functions.

pub mod url_normalizer;
