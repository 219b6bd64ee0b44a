//! Error types for addany operations.
//!
//! This module defines [`AddAnyError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing or unreadable templates directory is a configuration error and
//!   is fatal for the process; see [`AddAnyError::is_configuration_error`]
//! - Failing to read a single template only fails that one request
//! - No matching template is not an error at all: resolution returns `None`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for addany operations.
#[derive(Debug, Error)]
pub enum AddAnyError {
    /// Templates directory does not exist.
    #[error("Templates directory not found: {path}")]
    TemplatesNotFound { path: PathBuf },

    /// Templates directory exists but could not be scanned.
    #[error("Templates directory {path} is unreadable: {message}")]
    TemplatesUnreadable { path: PathBuf, message: String },

    /// A selected template could not be read.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A requested file or folder name is not usable.
    #[error("Invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    /// Refusing to overwrite an existing file.
    #[error("The file already exists: {path}")]
    FileExists { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AddAnyError {
    /// Whether this error means the template registry cannot be used at all.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::TemplatesNotFound { .. } | Self::TemplatesUnreadable { .. }
        )
    }
}

/// Result type alias for addany operations.
pub type Result<T> = std::result::Result<T, AddAnyError>;
