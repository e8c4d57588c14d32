use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors reported by the `promote` binary.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(promote::cli::io_error))]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}", path.display())]
    #[diagnostic(code(promote::cli::config_error), help("the file may contain `[workspace]` and `[build]` tables only"))]
    ConfigError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("workspace root {} is not a directory", root.display())]
    #[diagnostic(code(promote::cli::root_not_found), help("pass an existing directory with --root"))]
    RootNotFound { root: PathBuf },

    #[error("failed to write output")]
    #[diagnostic(code(promote::cli::output_error))]
    OutputError(#[source] std::io::Error),
}

/// Convert IO errors with context
pub fn convert_io_error(error: std::io::Error, path: PathBuf) -> CliError {
    CliError::IoError { path, source: error }
}
