// src/types.rs
//! Type and object definitions stored in a [`TypeContext`](crate::TypeContext).
//!
//! Every entity is addressed through a small `Copy` handle. Two handles are
//! equal exactly when they name the same arena slot, which is the notion of
//! identity the selector search relies on.

use std::fmt;

/// Identity of a package. Only its path takes part in visibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(pub u32);

/// Handle to a type in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Handle to a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

/// Handle to a function or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuncId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A package. Identity for visibility purposes is the path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub path: String,
    /// Package name as written in the package clause (last path segment by default).
    pub name: String,
}

/// Predeclared basic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    String,
    UnsafePointer,
}

impl BasicKind {
    /// All basic kinds, in registration order.
    pub const ALL: [BasicKind; 16] = [
        BasicKind::Bool,
        BasicKind::Int,
        BasicKind::Int8,
        BasicKind::Int16,
        BasicKind::Int32,
        BasicKind::Int64,
        BasicKind::Uint,
        BasicKind::Uint8,
        BasicKind::Uint16,
        BasicKind::Uint32,
        BasicKind::Uint64,
        BasicKind::Uintptr,
        BasicKind::Float32,
        BasicKind::Float64,
        BasicKind::String,
        BasicKind::UnsafePointer,
    ];

    /// Source spelling of the kind.
    pub fn name(self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::String => "string",
            BasicKind::UnsafePointer => "unsafe.Pointer",
        }
    }
}

/// A user-declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub pkg: PackageId,
    /// Never itself a named type once set.
    pub underlying: Option<TypeId>,
    /// Declared methods, unique by name.
    pub methods: Vec<FuncId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructType {
    pub fields: Vec<FieldId>,
}

/// An interface with its complete method set (embedded interfaces already flattened).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InterfaceType {
    pub methods: Vec<FuncId>,
}

impl InterfaceType {
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// A function signature. The receiver is `None` for plain functions and
/// for interface methods.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub recv: Option<TypeId>,
    pub params: Vec<TypeId>,
    pub results: Vec<TypeId>,
    pub variadic: bool,
}

/// The kinds of type the model knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Basic(BasicKind),
    Named(NamedType),
    Pointer(TypeId),
    Slice(TypeId),
    Struct(StructType),
    Interface(InterfaceType),
    Signature(Signature),
}

impl Type {
    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            Type::Named(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Type::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Type::Interface(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_signature(&self) -> Option<&Signature> {
        match self {
            Type::Signature(s) => Some(s),
            _ => None,
        }
    }
}

/// A struct field. `anonymous` marks an embedded field, whose name is the
/// name of the embedded type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub pkg: PackageId,
    pub ty: TypeId,
    pub anonymous: bool,
}

/// A function or method. `sig` always refers to a [`Type::Signature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Func {
    pub name: String,
    pub pkg: PackageId,
    pub sig: TypeId,
}

/// A selectable member: either a field or a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Field(FieldId),
    Func(FuncId),
}

impl Object {
    pub fn as_func(self) -> Option<FuncId> {
        match self {
            Object::Func(f) => Some(f),
            Object::Field(_) => None,
        }
    }

    pub fn as_field(self) -> Option<FieldId> {
        match self {
            Object::Field(f) => Some(f),
            Object::Func(_) => None,
        }
    }
}

/// Reports whether `name` is visible outside its declaring package.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().map_or(false, char::is_uppercase)
}

/// The blank identifier is never selectable.
pub const BLANK: &str = "_";
