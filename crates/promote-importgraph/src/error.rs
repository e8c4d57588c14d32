use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while discovering or loading a package.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    /// The package directory holds no source files. Not reported by the
    /// graph builder.
    #[error("no buildable source files in {}", dir.display())]
    #[diagnostic(code(promote_importgraph::no_buildable_source))]
    NoBuildableSource { dir: PathBuf },

    #[error("package `{path}` not found")]
    #[diagnostic(code(promote_importgraph::not_found))]
    NotFound { path: String },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(promote_importgraph::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package or import clauses of a source file could not be read.
    #[error("{}:{line}: {message}", file.display())]
    #[diagnostic(code(promote_importgraph::syntax_error))]
    Syntax {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// A failure reported by a workspace implementation.
    #[error("{0}")]
    #[diagnostic(code(promote_importgraph::other))]
    Other(String),
}

impl LoadError {
    pub fn is_no_buildable_source(&self) -> bool {
        matches!(self, LoadError::NoBuildableSource { .. })
    }
}
