// Test entry point for promote-lookup.
// Shared builders live here; scenarios are grouped in the submodules.

use promote_lookup::*;
use promote_types::*;

mod lookup;
mod satisfy;

/// A type context with one package `example.com/p` that declarations default to.
struct Fixture {
    ctx: TypeContext,
    p: PackageId,
}

impl Fixture {
    fn new() -> Self {
        let mut ctx = TypeContext::new();
        let p = ctx.new_package("example.com/p");
        Fixture { ctx, p }
    }

    fn int(&self) -> TypeId {
        self.ctx.basic(BasicKind::Int)
    }

    fn string(&self) -> TypeId {
        self.ctx.basic(BasicKind::String)
    }

    fn field(&mut self, name: &str, ty: TypeId) -> FieldId {
        self.ctx.new_field(self.p, name, ty, false)
    }

    fn embed(&mut self, ty: TypeId) -> FieldId {
        self.ctx.new_embedded(self.p, ty)
    }

    fn ptr(&mut self, ty: TypeId) -> TypeId {
        self.ctx.new_pointer(ty)
    }

    fn declare(&mut self, name: &str) -> TypeId {
        self.ctx.new_named(self.p, name)
    }

    fn define_struct(&mut self, named: TypeId, fields: Vec<FieldId>) {
        let st = self.ctx.new_struct(fields).unwrap();
        self.ctx.set_underlying(named, st).unwrap();
    }

    fn named_struct(&mut self, name: &str, fields: Vec<FieldId>) -> TypeId {
        let named = self.declare(name);
        self.define_struct(named, fields);
        named
    }

    /// `func (T) name()`
    fn method(&mut self, named: TypeId, name: &str) -> FuncId {
        let sig = Signature { recv: Some(named), ..Signature::default() };
        self.ctx.new_method(named, name, sig).unwrap()
    }

    /// `func (*T) name()`
    fn ptr_method(&mut self, named: TypeId, name: &str) -> FuncId {
        let recv = self.ptr(named);
        let sig = Signature { recv: Some(recv), ..Signature::default() };
        self.ctx.new_method(named, name, sig).unwrap()
    }

    /// An interface method `name(params) results`.
    fn iface_method(&mut self, name: &str, params: Vec<TypeId>, results: Vec<TypeId>) -> FuncId {
        let sig = self.ctx.new_signature(Signature { recv: None, params, results, variadic: false });
        self.ctx.new_func(self.p, name, sig).unwrap()
    }

    fn named_interface(&mut self, name: &str, methods: Vec<FuncId>) -> TypeId {
        let named = self.declare(name);
        let iface = self.ctx.new_interface(methods, &[]).unwrap();
        self.ctx.set_underlying(named, iface).unwrap();
        named
    }

    fn resolver(&self) -> SelectorResolver<'_> {
        SelectorResolver::new(&self.ctx)
    }

    /// Looks up `name` as seen from package `p`.
    fn lookup(&self, ty: TypeId, name: &str) -> LookupResult {
        self.resolver().lookup_field_or_method(ty, self.p, name)
    }
}

fn path(index: &[usize]) -> IndexPath {
    index.iter().copied().collect()
}

fn found(obj: Object, index: &[usize], indirect: bool) -> LookupResult {
    LookupResult::Found { obj, index: path(index), indirect }
}
