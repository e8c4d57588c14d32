//! Selector resolution over the `promote-types` type graph.
//!
//! [`SelectorResolver::lookup_field_or_method`] finds the field or method a
//! selector `x.f` denotes, following Go's promotion rules through embedded
//! fields. [`SelectorResolver::missing_method`] builds on it to decide
//! whether a type's method set satisfies an interface.
//!
//! Both are pure queries over a read-only [`promote_types::TypeContext`].

pub mod error;
pub mod lookup;
pub mod satisfy;

pub use error::LookupError;
pub use lookup::{IndexPath, LookupResult, Selection, SelectorResolver};
pub use satisfy::Satisfaction;
