//! Wire DTOs for the shortener service API.

pub mod shorten;

pub use shorten::{ShortenRequest, ShortenResponse};
