// src/fs.rs
//! A workspace backed by a directory tree of `.go` source files.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::WorkspaceConfig;
use crate::error::LoadError;
use crate::scan::scan_header;
use crate::workspace::{PackageImports, Workspace};

const SOURCE_EXT: &str = ".go";
const TEST_SUFFIX: &str = "_test.go";
const XTEST_PACKAGE_SUFFIX: &str = "_test";

/// Treats every directory below `root` as a package whose import path is
/// the `/`-separated path relative to the root.
#[derive(Debug, Clone)]
pub struct DirWorkspace {
    config: WorkspaceConfig,
}

impl DirWorkspace {
    pub fn new(config: WorkspaceConfig) -> Self {
        DirWorkspace { config }
    }

    /// A workspace over `root` with default settings.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::new(WorkspaceConfig::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// The directory holding the package at import path `path`.
    pub fn package_dir(&self, path: &str) -> PathBuf {
        path.split('/').filter(|seg| !seg.is_empty()).fold(self.config.root.clone(), |dir, seg| dir.join(seg))
    }

    fn is_skipped(&self, name: &str) -> bool {
        name.starts_with('.')
            || name.starts_with('_')
            || name == "testdata"
            || self.config.skip_dirs.iter().any(|s| s == name)
    }

    fn walk(&self, dir: &Path, rel: &str, visit: &mut dyn FnMut(String, Option<LoadError>)) {
        let entries = match read_dir_sorted(dir) {
            Ok(entries) => entries,
            Err(source) => {
                let path = if rel.is_empty() { ".".to_string() } else { rel.to_string() };
                visit(path, Some(LoadError::Io { path: dir.to_path_buf(), source }));
                return;
            }
        };

        for (name, path) in entries {
            match fs::symlink_metadata(&path) {
                Ok(meta) if meta.is_dir() => {}
                _ => continue,
            }
            if self.is_skipped(&name) {
                log::trace!("skipping directory {}", path.display());
                continue;
            }
            let child = if rel.is_empty() { name } else { format!("{}/{}", rel, name) };
            visit(child.clone(), None);
            self.walk(&path, &child, visit);
        }
    }
}

impl Workspace for DirWorkspace {
    fn for_each_package(&self, visit: &mut dyn FnMut(String, Option<LoadError>)) {
        self.walk(&self.config.root, "", visit);
    }

    fn import(&self, path: &str) -> Result<PackageImports, LoadError> {
        let dir = self.package_dir(path);
        let entries = read_dir_sorted(&dir).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound { path: path.to_string() }
            } else {
                LoadError::Io { path: dir.clone(), source }
            }
        })?;

        let mut imports = BTreeSet::new();
        let mut test_imports = BTreeSet::new();
        let mut xtest_imports = BTreeSet::new();
        let mut sources = 0usize;

        for (name, file) in entries {
            if !name.ends_with(SOURCE_EXT) || !file.is_file() {
                continue;
            }
            let is_test = name.ends_with(TEST_SUFFIX);
            if is_test && !self.config.include_tests {
                continue;
            }
            sources += 1;

            let src = fs::read_to_string(&file).map_err(|source| LoadError::Io { path: file.clone(), source })?;
            let header = scan_header(&src).map_err(|e| LoadError::Syntax {
                file: file.clone(),
                line: e.line,
                message: e.message,
            })?;

            let target = if !is_test {
                &mut imports
            } else if header.package.ends_with(XTEST_PACKAGE_SUFFIX) {
                &mut xtest_imports
            } else {
                &mut test_imports
            };
            target.extend(header.imports);
        }

        if sources == 0 {
            return Err(LoadError::NoBuildableSource { dir });
        }

        Ok(PackageImports {
            imports: imports.into_iter().collect(),
            test_imports: test_imports.into_iter().collect(),
            xtest_imports: xtest_imports.into_iter().collect(),
        })
    }
}

/// Directory entries with UTF-8 names, sorted by name.
fn read_dir_sorted(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => entries.push((name, entry.path())),
            Err(name) => log::warn!("ignoring non UTF-8 name {:?} in {}", name, dir.display()),
        }
    }
    entries.sort();
    Ok(entries)
}
