//! UI interaction state

/// Transient UI state: the current error message and the focus-by-number
/// input field.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Error message to display in UI (status line)
    pub error_message: Option<String>,

    /// Text of the "focus trial #" input field
    pub focus_input: String,
}

impl UiState {
    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
