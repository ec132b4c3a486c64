//! Error types for quoting.

use crate::config::Thickness;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Malformed catalog or store file (-3)
    ParseError = -3,
    /// Request rejected by validation (E100)
    InvalidInput = 100,
    /// No sheet offers the thickness (E200)
    NoSuitableSheet = 200,
    /// No priced sheet can hold a single part (E201)
    PartsDoNotFit = 201,
    /// Packed layout leaves the sheet or overlaps itself (E202)
    InvalidLayout = 202,
    /// Catalog content is inconsistent (E300)
    InvalidCatalog = 300,
}

/// Main error type for the quoting engine.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("No suitable sheet found for thickness {thickness}")]
    NoSuitableSheet { thickness: Thickness },

    #[error("Parts do not fit on any sheet offered in thickness {thickness}")]
    PartsDoNotFit { thickness: Thickness },

    #[error("Invalid layout on sheet {sheet}: {message}")]
    InvalidLayout { sheet: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::NoSuitableSheet { .. } => ErrorCode::NoSuitableSheet,
            QuoteError::PartsDoNotFit { .. } => ErrorCode::PartsDoNotFit,
            QuoteError::InvalidLayout { .. } => ErrorCode::InvalidLayout,
            QuoteError::InvalidInput { .. } => ErrorCode::InvalidInput,
            QuoteError::InvalidCatalog { .. } => ErrorCode::InvalidCatalog,
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
            QuoteError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quoting operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
