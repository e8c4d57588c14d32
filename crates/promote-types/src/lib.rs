//! Type model for selector resolution.
//!
//! This crate holds the read-only type graph that field and method lookup
//! runs over: packages, named types with their declared methods, structs with
//! (possibly embedded) fields, interfaces, pointers, and signatures. All of it
//! lives in a single [`TypeContext`] arena and is referenced by integer
//! handles, so named types compare by identity and cyclic embedding is
//! representable without reference counting.

pub mod context;
pub mod display;
pub mod error;
pub mod identity;
pub mod types;
pub mod visibility;

pub use context::TypeContext;
pub use display::TypeDisplay;
pub use error::{TypeError, TypeResult};
pub use types::*;
