// src/context.rs
//! The arena that owns every package, type, field, and function.

use rustc_hash::FxHashSet;

use crate::error::{TypeError, TypeResult};
use crate::types::*;

/// Owns the type graph of one compilation unit.
///
/// The context is filled in once, while declarations are checked, and is
/// read-only afterwards. Queries take `&self` and may run on several threads
/// at once.
#[derive(Debug, Clone)]
pub struct TypeContext {
    packages: Vec<Package>,
    types: Vec<Type>,
    fields: Vec<Field>,
    funcs: Vec<Func>,
    basics: Vec<TypeId>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    /// Creates a context with every basic type registered.
    pub fn new() -> Self {
        let mut ctx = TypeContext {
            packages: Vec::new(),
            types: Vec::new(),
            fields: Vec::new(),
            funcs: Vec::new(),
            basics: Vec::with_capacity(BasicKind::ALL.len()),
        };
        for kind in BasicKind::ALL {
            let id = ctx.push_type(Type::Basic(kind));
            ctx.basics.push(id);
        }
        ctx
    }

    fn push_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    // --- Accessors ---

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.0 as usize]
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.0 as usize]
    }

    pub fn func(&self, id: FuncId) -> &Func {
        &self.funcs[id.0 as usize]
    }

    /// The pre-registered type for a basic kind.
    pub fn basic(&self, kind: BasicKind) -> TypeId {
        // `basics` is filled in `BasicKind::ALL` order, which is declaration order.
        self.basics[kind as usize]
    }

    pub fn named(&self, id: TypeId) -> Option<&NamedType> {
        self.ty(id).as_named()
    }

    /// The signature of a function. Always present for functions built through
    /// [`TypeContext::new_func`].
    pub fn signature(&self, func: FuncId) -> Option<&Signature> {
        self.ty(self.func(func).sig).as_signature()
    }

    /// Object name, package, and type, uniformly for fields and methods.
    pub fn object_name(&self, obj: Object) -> &str {
        match obj {
            Object::Field(f) => &self.field(f).name,
            Object::Func(f) => &self.func(f).name,
        }
    }

    pub fn object_pkg(&self, obj: Object) -> PackageId {
        match obj {
            Object::Field(f) => self.field(f).pkg,
            Object::Func(f) => self.func(f).pkg,
        }
    }

    pub fn object_type(&self, obj: Object) -> TypeId {
        match obj {
            Object::Field(f) => self.field(f).ty,
            Object::Func(f) => self.func(f).sig,
        }
    }

    /// The underlying type of `id`. Named types without an underlying type yet
    /// are returned unchanged.
    pub fn underlying(&self, id: TypeId) -> TypeId {
        match self.ty(id) {
            Type::Named(n) => n.underlying.unwrap_or(id),
            _ => id,
        }
    }

    /// Strips one pointer level, reporting whether one was present.
    pub fn deref(&self, id: TypeId) -> (TypeId, bool) {
        match self.ty(id) {
            Type::Pointer(base) => (*base, true),
            _ => (id, false),
        }
    }

    /// The interface behind `id`, looking through a named type.
    pub fn interface_of(&self, id: TypeId) -> Option<&InterfaceType> {
        self.ty(self.underlying(id)).as_interface()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // --- Construction ---

    /// Registers a package whose name is the last path segment.
    pub fn new_package(&mut self, path: impl Into<String>) -> PackageId {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        self.new_package_named(path, name)
    }

    pub fn new_package_named(&mut self, path: impl Into<String>, name: impl Into<String>) -> PackageId {
        let id = PackageId(self.packages.len() as u32);
        self.packages.push(Package { path: path.into(), name: name.into() });
        id
    }

    /// Declares a named type. Its underlying type is attached later with
    /// [`TypeContext::set_underlying`], which allows self-referential declarations.
    pub fn new_named(&mut self, pkg: PackageId, name: impl Into<String>) -> TypeId {
        let name = name.into();
        log::trace!("declaring named type {}.{}", self.package(pkg).name, name);
        self.push_type(Type::Named(NamedType { name, pkg, underlying: None, methods: Vec::new() }))
    }

    /// Attaches the underlying type of `named`. A named `underlying` is replaced
    /// by its own underlying type, so the stored value is never named.
    pub fn set_underlying(&mut self, named: TypeId, underlying: TypeId) -> TypeResult<()> {
        let target = match self.ty(underlying) {
            Type::Named(n) => n.underlying.ok_or_else(|| TypeError::UnderlyingNotSet {
                type_name: n.name.clone(),
            })?,
            _ => underlying,
        };
        let display = self.display(named).to_string();
        match &mut self.types[named.0 as usize] {
            Type::Named(n) if n.underlying.is_some() => {
                Err(TypeError::UnderlyingAlreadySet { type_name: n.name.clone() })
            }
            Type::Named(n) => {
                n.underlying = Some(target);
                Ok(())
            }
            _ => Err(TypeError::NotANamedType { ty: display }),
        }
    }

    pub fn new_field(&mut self, pkg: PackageId, name: impl Into<String>, ty: TypeId, anonymous: bool) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(Field { name: name.into(), pkg, ty, anonymous });
        id
    }

    /// Declares an embedded field of type `T` or `*T`. The field takes the
    /// name of `T`.
    pub fn new_embedded(&mut self, pkg: PackageId, ty: TypeId) -> FieldId {
        let (base, _) = self.deref(ty);
        let name = match self.ty(base) {
            Type::Named(n) => n.name.clone(),
            Type::Basic(k) => k.name().to_string(),
            _ => self.display(base).to_string(),
        };
        self.new_field(pkg, name, ty, true)
    }

    /// Builds a struct from previously declared fields.
    pub fn new_struct(&mut self, fields: Vec<FieldId>) -> TypeResult<TypeId> {
        {
            let mut names = FxHashSet::default();
            for &f in &fields {
                let name = &self.field(f).name;
                if name != BLANK && !names.insert(name.as_str()) {
                    return Err(TypeError::DuplicateField { field: name.clone() });
                }
            }
        }
        Ok(self.push_type(Type::Struct(StructType { fields })))
    }

    pub fn new_signature(&mut self, sig: Signature) -> TypeId {
        self.push_type(Type::Signature(sig))
    }

    pub fn new_pointer(&mut self, base: TypeId) -> TypeId {
        self.push_type(Type::Pointer(base))
    }

    pub fn new_slice(&mut self, elem: TypeId) -> TypeId {
        self.push_type(Type::Slice(elem))
    }

    /// Declares a function object. `sig` must be a signature type.
    pub fn new_func(&mut self, pkg: PackageId, name: impl Into<String>, sig: TypeId) -> TypeResult<FuncId> {
        if self.ty(sig).as_signature().is_none() {
            return Err(TypeError::NotASignature { ty: self.display(sig).to_string() });
        }
        let id = FuncId(self.funcs.len() as u32);
        self.funcs.push(Func { name: name.into(), pkg, sig });
        Ok(id)
    }

    /// Attaches a declared method to a named type.
    pub fn add_method(&mut self, named: TypeId, method: FuncId) -> TypeResult<()> {
        let method_name = self.func(method).name.clone();
        let display = self.display(named).to_string();
        match &mut self.types[named.0 as usize] {
            Type::Named(n) => {
                let funcs = &self.funcs;
                if n.methods.iter().any(|m| funcs[m.0 as usize].name == method_name) {
                    return Err(TypeError::DuplicateMethod { type_name: n.name.clone(), method: method_name });
                }
                n.methods.push(method);
                Ok(())
            }
            _ => Err(TypeError::NotANamedType { ty: display }),
        }
    }

    /// Declares a method on `named` in the named type's package.
    pub fn new_method(&mut self, named: TypeId, name: impl Into<String>, sig: Signature) -> TypeResult<FuncId> {
        let pkg = self
            .named(named)
            .map(|n| n.pkg)
            .ok_or_else(|| TypeError::NotANamedType { ty: self.display(named).to_string() })?;
        let sig = self.new_signature(sig);
        let func = self.new_func(pkg, name, sig)?;
        self.add_method(named, func)?;
        Ok(func)
    }

    /// Builds an interface from explicit methods plus the method sets of
    /// `embedded` interfaces. Methods with the same identity and identical
    /// signatures are merged.
    pub fn new_interface(&mut self, methods: Vec<FuncId>, embedded: &[TypeId]) -> TypeResult<TypeId> {
        let mut all: Vec<FuncId> = Vec::with_capacity(methods.len());
        let mut candidates = methods;
        for &e in embedded {
            let iface = self
                .interface_of(e)
                .ok_or_else(|| TypeError::NotAnInterface { ty: self.display(e).to_string() })?;
            candidates.extend(iface.methods.iter().copied());
        }

        for m in candidates {
            let func = self.func(m);
            let existing = all
                .iter()
                .copied()
                .find(|&other| {
                    let o = self.func(other);
                    self.same_id(o.pkg, &o.name, func.pkg, &func.name)
                });
            match existing {
                Some(other) if other == m || self.identical(self.func(other).sig, func.sig) => {}
                Some(_) => {
                    return Err(TypeError::ConflictingInterfaceMethod { method: func.name.clone() });
                }
                None => all.push(m),
            }
        }
        Ok(self.push_type(Type::Interface(InterfaceType { methods: all })))
    }
}
