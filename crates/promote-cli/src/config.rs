//! `promote.toml` loading and flag overrides.

use std::path::{Path, PathBuf};

use promote_importgraph::{BuildConfig, WorkspaceConfig};
use serde::Deserialize;

use crate::error::{convert_io_error, CliError};

/// Contents of a `promote.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub workspace: WorkspaceConfig,
    pub build: BuildConfig,
}

impl FileConfig {
    /// Reads `path`. A relative `workspace.root` is taken relative to the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| convert_io_error(e, path.to_path_buf()))?;
        let mut config = Self::parse(&content, path)?;
        if config.workspace.root.is_relative() {
            if let Some(dir) = path.parent() {
                config.workspace.root = dir.join(&config.workspace.root);
            }
        }
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|source| CliError::ConfigError { path: path.to_path_buf(), source })
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub no_tests: bool,
}

impl Overrides {
    pub fn apply(self, mut config: FileConfig) -> FileConfig {
        if let Some(root) = self.root {
            config.workspace.root = root;
        }
        if let Some(jobs) = self.jobs {
            config.build.workers = jobs;
        }
        if self.no_tests {
            config.workspace.include_tests = false;
        }
        config
    }
}
