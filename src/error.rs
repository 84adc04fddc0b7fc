//! Error types for the tradedocs CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::engine::TemplateError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for tradedocs operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum TradeDocsError {
    /// User provided invalid arguments or the workspace is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Template content could not be rendered.
    #[error("Render failed: {0}")]
    RenderError(#[from] TemplateError),

    /// Reading or writing the template store (or an output file) failed.
    #[error("Storage operation failed: {0}")]
    StorageError(String),
}

impl TradeDocsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TradeDocsError::UserError(_) => exit_codes::USER_ERROR,
            TradeDocsError::RenderError(_) => exit_codes::RENDER_FAILURE,
            TradeDocsError::StorageError(_) => exit_codes::STORAGE_FAILURE,
        }
    }
}

/// Result type alias for tradedocs operations.
pub type Result<T> = std::result::Result<T, TradeDocsError>;
