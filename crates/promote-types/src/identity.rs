// src/identity.rs
//! Structural type identity.

use crate::context::TypeContext;
use crate::types::{Signature, Type, TypeId};

impl TypeContext {
    /// Reports whether `a` and `b` are identical types.
    ///
    /// Named types are identical only to themselves. Every other kind is
    /// compared structurally; receivers do not take part in signature identity.
    /// Recursion always stops at a named type, so cyclic graphs terminate.
    pub fn identical(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        match (self.ty(a), self.ty(b)) {
            (Type::Basic(x), Type::Basic(y)) => x == y,
            (Type::Pointer(x), Type::Pointer(y)) | (Type::Slice(x), Type::Slice(y)) => self.identical(*x, *y),
            (Type::Struct(x), Type::Struct(y)) => {
                x.fields.len() == y.fields.len()
                    && x.fields.iter().zip(&y.fields).all(|(&f, &g)| {
                        let (f, g) = (self.field(f), self.field(g));
                        f.anonymous == g.anonymous
                            && self.same_id(f.pkg, &f.name, g.pkg, &g.name)
                            && self.identical(f.ty, g.ty)
                    })
            }
            (Type::Interface(x), Type::Interface(y)) => {
                // Method sets are compared as sets; declaration order is irrelevant.
                x.methods.len() == y.methods.len()
                    && x.methods.iter().all(|&m| {
                        let func = self.func(m);
                        match self.lookup_method(&y.methods, func.pkg, &func.name) {
                            Some((_, other)) => self.identical(func.sig, self.func(other).sig),
                            None => false,
                        }
                    })
            }
            (Type::Signature(x), Type::Signature(y)) => self.identical_signatures(x, y),
            _ => false,
        }
    }

    fn identical_signatures(&self, x: &Signature, y: &Signature) -> bool {
        x.variadic == y.variadic
            && self.identical_lists(&x.params, &y.params)
            && self.identical_lists(&x.results, &y.results)
    }

    fn identical_lists(&self, xs: &[TypeId], ys: &[TypeId]) -> bool {
        xs.len() == ys.len() && xs.iter().zip(ys).all(|(&x, &y)| self.identical(x, y))
    }
}
