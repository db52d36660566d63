//! DTOs for the v1 shortener endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten, already normalized by the caller.
    pub original_url: String,
}

/// Response from the shortener endpoint.
///
/// A successful response carries the short code in `newUrl`. Error
/// responses have some other shape entirely; deserializing them here
/// simply leaves `new_url` empty, which is all the client needs to know.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    #[serde(default)]
    pub new_url: Option<String>,
}
