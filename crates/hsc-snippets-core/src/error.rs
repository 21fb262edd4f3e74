//! Unified error types for hsc-snippets.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a snippet.
#[derive(Error, Debug)]
pub enum SnippetError {
    /// The snippet name failed validation. No files were touched.
    #[error("invalid snippet name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A target file already exists. Files written earlier in the same run stay on disk
    /// unless the run used [`crate::scaffold::WriteMode::Atomic`].
    #[error("file already exists: {}", .0.display())]
    FileExists(PathBuf),

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// A filesystem I/O error (missing directory, permission denied, disk full).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, SnippetError>`.
pub type Result<T> = std::result::Result<T, SnippetError>;
