use miette::Diagnostic;
use thiserror::Error;

/// Result type for type model operations
pub type TypeResult<T> = Result<T, TypeError>;

/// Errors raised while building or querying the type model.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A named type already declares a method with this name
    #[error("duplicate method `{method}` on type `{type_name}`")]
    #[diagnostic(code(promote_types::duplicate_method))]
    DuplicateMethod {
        type_name: String,
        method: String,
    },

    /// Two fields of one struct share a name
    #[error("duplicate field `{field}` in struct")]
    #[diagnostic(code(promote_types::duplicate_field))]
    DuplicateField { field: String },

    /// Two interface methods with the same name have different signatures
    #[error("duplicate method `{method}` with conflicting signatures in interface")]
    #[diagnostic(code(promote_types::conflicting_interface_method))]
    ConflictingInterfaceMethod { method: String },

    #[error("underlying type of `{type_name}` is already set")]
    #[diagnostic(code(promote_types::underlying_already_set))]
    UnderlyingAlreadySet { type_name: String },

    /// Used before `set_underlying`, or `set_underlying` was given such a type
    #[error("underlying type of `{type_name}` is not set")]
    #[diagnostic(code(promote_types::underlying_not_set))]
    UnderlyingNotSet { type_name: String },

    #[error("`{ty}` is not a named type")]
    #[diagnostic(code(promote_types::not_a_named_type))]
    NotANamedType { ty: String },

    #[error("`{ty}` is not an interface type")]
    #[diagnostic(
        code(promote_types::not_an_interface),
        help("interface satisfaction is only defined against interface types")
    )]
    NotAnInterface { ty: String },

    #[error("`{ty}` is not a function signature")]
    #[diagnostic(code(promote_types::not_a_signature))]
    NotASignature { ty: String },

    /// A handle from another context, or a forged one
    #[error("invalid handle: {0}")]
    #[diagnostic(code(promote_types::invalid_handle))]
    InvalidHandle(String),
}
