// src/satisfy.rs
//! Interface satisfaction.

use promote_types::{FuncId, TypeError, TypeId, TypeResult};

use crate::lookup::{LookupResult, SelectorResolver};

/// Whether a type implements an interface, and if not, the first offending method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction {
    Satisfied,
    /// The required method is absent from the type's method set.
    Missing(FuncId),
    /// A method with the required name exists but its signature differs.
    WrongType(FuncId),
}

impl Satisfaction {
    pub fn is_satisfied(self) -> bool {
        self == Satisfaction::Satisfied
    }

    /// The offending method and whether it merely has the wrong type.
    pub fn into_parts(self) -> (Option<FuncId>, bool) {
        match self {
            Satisfaction::Satisfied => (None, false),
            Satisfaction::Missing(m) => (Some(m), false),
            Satisfaction::WrongType(m) => (Some(m), true),
        }
    }
}

impl<'ctx> SelectorResolver<'ctx> {
    /// Checks `ty` against the method set required by `iface`.
    ///
    /// `iface` must be an interface type or a named type whose underlying
    /// type is one. Required methods are checked in order and the first
    /// failure is reported.
    pub fn missing_method(&self, ty: TypeId, iface: TypeId) -> TypeResult<Satisfaction> {
        let ctx = self.context();
        let required = ctx
            .interface_of(iface)
            .ok_or_else(|| TypeError::NotAnInterface { ty: ctx.display(iface).to_string() })?;

        if required.is_empty() {
            return Ok(Satisfaction::Satisfied);
        }

        // An interface type implements T if it has at least the methods of T.
        if let Some(have) = ctx.interface_of(ty) {
            for &m in &required.methods {
                let want = ctx.func(m);
                match ctx.lookup_method(&have.methods, want.pkg, &want.name) {
                    None => return Ok(self.report(ty, Satisfaction::Missing(m))),
                    Some((_, got)) if !ctx.identical(ctx.func(got).sig, want.sig) => {
                        return Ok(self.report(ty, Satisfaction::WrongType(m)));
                    }
                    Some(_) => {}
                }
            }
            return Ok(Satisfaction::Satisfied);
        }

        for &m in &required.methods {
            let want = ctx.func(m);
            let (obj, indirect) = match self.lookup_field_or_method(ty, want.pkg, &want.name) {
                LookupResult::Found { obj, indirect, .. } => (obj, indirect),
                LookupResult::Ambiguous { .. } | LookupResult::NotFound => {
                    return Ok(self.report(ty, Satisfaction::Missing(m)));
                }
            };

            // A field of that name hides any promoted method.
            let Some(found) = obj.as_func() else {
                return Ok(self.report(ty, Satisfaction::Missing(m)));
            };

            // Pointer receiver methods belong to the value's method set only
            // when an indirection was already taken on the way there.
            if let Some(recv) = ctx.signature(found).and_then(|sig| sig.recv) {
                let (_, is_ptr) = ctx.deref(recv);
                if is_ptr && !indirect {
                    return Ok(self.report(ty, Satisfaction::Missing(m)));
                }
            }

            if !ctx.identical(ctx.func(found).sig, want.sig) {
                return Ok(self.report(ty, Satisfaction::WrongType(m)));
            }
        }

        Ok(Satisfaction::Satisfied)
    }

    /// Reports whether `ty` implements `iface`.
    pub fn implements(&self, ty: TypeId, iface: TypeId) -> TypeResult<bool> {
        self.missing_method(ty, iface).map(Satisfaction::is_satisfied)
    }

    fn report(&self, ty: TypeId, result: Satisfaction) -> Satisfaction {
        if let Satisfaction::Missing(m) | Satisfaction::WrongType(m) = result {
            log::debug!(
                "{} does not satisfy interface: {:?} {}",
                self.context().display(ty),
                result,
                self.context().func(m).name
            );
        }
        result
    }
}
