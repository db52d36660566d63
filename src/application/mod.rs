//! Application layer: orchestration of the shorten flow.

pub mod services;
