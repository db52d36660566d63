//! Input widget state.

/// State of the URL input box.
///
/// Holds the value the user typed; cleared after every submission,
/// successful or not.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub input_value: String,
}

impl InputState {
    /// Creates input state holding the given value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input_value: value.into(),
        }
    }
}
