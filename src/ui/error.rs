//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn, or restored
    #[error("Terminal error: {0}")]
    TerminalError(#[from] std::io::Error),

    /// The keyboard input thread stopped unexpectedly
    #[error("Input stream closed")]
    InputClosed,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
