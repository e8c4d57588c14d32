//! Forward and reverse import dependency graphs for every package in a
//! workspace.
//!
//! [`build`] enumerates the packages of a [`Workspace`], loads each one's
//! import lists concurrently, and folds the discovered edges into a forward
//! [`Graph`] (package → imports) and its transpose. [`Graph::search`] answers
//! reachability queries over either.
//!
//! [`DirWorkspace`] is a filesystem implementation of the workspace
//! collaborator for trees of `.go` files.

pub mod builder;
pub mod config;
pub mod error;
pub mod fs;
pub mod graph;
pub mod scan;
pub mod workspace;

pub use builder::{build, BuildOutput};
pub use config::{BuildConfig, WorkspaceConfig};
pub use error::LoadError;
pub use fs::DirWorkspace;
pub use graph::Graph;
pub use workspace::{PackageImports, Workspace};
