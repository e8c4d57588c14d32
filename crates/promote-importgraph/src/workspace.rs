// src/workspace.rs
//! The collaborators the graph builder loads packages through.

use crate::error::LoadError;

/// Direct imports of one package, split by where they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageImports {
    /// Imports of the package's regular source files.
    pub imports: Vec<String>,
    /// Imports of in-package test files.
    pub test_imports: Vec<String>,
    /// Imports of external test files (package `<name>_test`).
    pub xtest_imports: Vec<String>,
}

impl PackageImports {
    /// Every import, test imports included, in list order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .chain(&self.test_imports)
            .chain(&self.xtest_imports)
            .map(String::as_str)
    }
}

/// A set of packages that can be enumerated and loaded.
///
/// Implementations are shared between the builder's worker threads, so
/// `import` must be callable concurrently.
pub trait Workspace: Sync {
    /// Calls `visit` once per package import path. A package whose metadata
    /// could not be read is reported with an error.
    fn for_each_package(&self, visit: &mut dyn FnMut(String, Option<LoadError>));

    /// Loads the import lists of the package at `path`.
    fn import(&self, path: &str) -> Result<PackageImports, LoadError>;
}
