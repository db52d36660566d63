//! Terminal presentation: view-model, rendering, and effects.

pub mod effects;
pub mod render;
pub mod view;

pub use view::ResultView;
