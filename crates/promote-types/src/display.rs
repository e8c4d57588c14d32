// src/display.rs
//! Human readable rendering of types, used in diagnostics and logs.

use std::fmt;

use crate::context::TypeContext;
use crate::types::{Object, Signature, Type, TypeId};

/// Renders a type through its context. Created by [`TypeContext::display`].
pub struct TypeDisplay<'a> {
    ctx: &'a TypeContext,
    ty: TypeId,
}

impl TypeContext {
    pub fn display(&self, ty: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { ctx: self, ty }
    }

    /// A short description of a selectable member, e.g. `field X int`.
    pub fn describe(&self, obj: Object) -> String {
        match obj {
            Object::Field(f) => {
                let field = self.field(f);
                format!("field {} {}", field.name, self.display(field.ty))
            }
            Object::Func(f) => {
                let func = self.func(f);
                format!("method {}{}", func.name, SignatureTail { ctx: self, ty: func.sig })
            }
        }
    }
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(self.ctx, self.ty, f)
    }
}

impl fmt::Debug for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A signature without the leading `func` keyword.
struct SignatureTail<'a> {
    ctx: &'a TypeContext,
    ty: TypeId,
}

impl fmt::Display for SignatureTail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ctx.ty(self.ty) {
            Type::Signature(sig) => write_signature(self.ctx, sig, f),
            _ => write_type(self.ctx, self.ty, f),
        }
    }
}

fn write_type(ctx: &TypeContext, ty: TypeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match ctx.ty(ty) {
        Type::Basic(kind) => f.write_str(kind.name()),
        // Named types print by name only, which keeps cyclic graphs finite.
        Type::Named(named) => write!(f, "{}.{}", ctx.package(named.pkg).name, named.name),
        Type::Pointer(base) => {
            f.write_str("*")?;
            write_type(ctx, *base, f)
        }
        Type::Slice(elem) => {
            f.write_str("[]")?;
            write_type(ctx, *elem, f)
        }
        Type::Struct(s) => {
            f.write_str("struct{")?;
            for (i, &field) in s.fields.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                let field = ctx.field(field);
                if !field.anonymous {
                    write!(f, "{} ", field.name)?;
                }
                write_type(ctx, field.ty, f)?;
            }
            f.write_str("}")
        }
        Type::Interface(iface) => {
            f.write_str("interface{")?;
            for (i, &m) in iface.methods.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                let func = ctx.func(m);
                write!(f, "{}{}", func.name, SignatureTail { ctx, ty: func.sig })?;
            }
            f.write_str("}")
        }
        Type::Signature(sig) => {
            f.write_str("func")?;
            write_signature(ctx, sig, f)
        }
    }
}

fn write_signature(ctx: &TypeContext, sig: &Signature, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("(")?;
    for (i, &param) in sig.params.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if sig.variadic && i + 1 == sig.params.len() {
            f.write_str("...")?;
            match ctx.ty(param) {
                Type::Slice(elem) => write_type(ctx, *elem, f)?,
                _ => write_type(ctx, param, f)?,
            }
        } else {
            write_type(ctx, param, f)?;
        }
    }
    f.write_str(")")?;
    match sig.results.as_slice() {
        [] => Ok(()),
        [single] => {
            f.write_str(" ")?;
            write_type(ctx, *single, f)
        }
        results => {
            f.write_str(" (")?;
            for (i, &r) in results.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_type(ctx, r, f)?;
            }
            f.write_str(")")
        }
    }
}
