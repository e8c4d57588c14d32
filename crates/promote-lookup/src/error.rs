use miette::Diagnostic;
use thiserror::Error;

/// Errors reported when a selector does not denote a unique member.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("`{ty}` has no field or method `{name}`")]
    #[diagnostic(code(promote_lookup::not_found))]
    NotFound { name: String, ty: String },

    /// Several members named `name` are promoted from the same depth.
    #[error("ambiguous selector `{name}` in `{ty}`")]
    #[diagnostic(
        code(promote_lookup::ambiguous_selector),
        help("qualify the selector with the embedded field it should come from")
    )]
    Ambiguous {
        name: String,
        ty: String,
        /// Index path of one of the colliding members.
        index: Vec<usize>,
    },
}
