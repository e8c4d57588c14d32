// src/config.rs
//! Configuration for workspace loading and graph building.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for [`build`](crate::build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Number of loader threads. Values below 1 are treated as 1.
    pub workers: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig { workers: num_cpus::get() }
    }
}

impl BuildConfig {
    pub fn with_workers(workers: usize) -> Self {
        BuildConfig { workers }
    }

    pub(crate) fn effective_workers(&self) -> usize {
        self.workers.max(1)
    }
}

/// Settings for a [`DirWorkspace`](crate::DirWorkspace).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory whose subdirectories are the packages.
    pub root: PathBuf,
    /// Whether `_test.go` files contribute imports.
    pub include_tests: bool,
    /// Additional directory names to skip, with their subtrees.
    pub skip_dirs: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        WorkspaceConfig { root: PathBuf::from("."), include_tests: true, skip_dirs: Vec::new() }
    }
}

impl WorkspaceConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        WorkspaceConfig { root: root.into(), ..Self::default() }
    }
}
