// tests/satisfy/concrete.rs
use crate::*;

/// `type Stringer interface { String() string }`
fn stringer(fx: &mut Fixture) -> (TypeId, FuncId) {
    let string = fx.string();
    let m = fx.iface_method("String", vec![], vec![string]);
    (fx.named_interface("Stringer", vec![m]), m)
}

/// Declares `func (T) String() string` or `func (*T) String() string`.
fn string_method(fx: &mut Fixture, named: TypeId, pointer: bool) -> FuncId {
    let string = fx.string();
    let recv = if pointer { fx.ptr(named) } else { named };
    let sig = Signature { recv: Some(recv), params: vec![], results: vec![string], variadic: false };
    fx.ctx.new_method(named, "String", sig).unwrap()
}

#[test]
fn test_value_method_satisfies() {
    let mut fx = Fixture::new();
    let (iface, _) = stringer(&mut fx);
    let t = fx.named_struct("T", vec![]);
    string_method(&mut fx, t, false);

    let result = fx.resolver().missing_method(t, iface).unwrap();
    assert_eq!(result, Satisfaction::Satisfied);
    assert_eq!(result.into_parts(), (None, false));

    let pt = fx.ptr(t);
    assert_eq!(fx.resolver().implements(pt, iface), Ok(true));
}

#[test]
fn test_missing_method() {
    let mut fx = Fixture::new();
    let (iface, m) = stringer(&mut fx);
    let t = fx.named_struct("T", vec![]);

    let result = fx.resolver().missing_method(t, iface).unwrap();
    assert_eq!(result, Satisfaction::Missing(m));
    assert_eq!(result.into_parts(), (Some(m), false));
}

#[test]
fn test_wrong_signature() {
    let mut fx = Fixture::new();
    let (iface, m) = stringer(&mut fx);
    let t = fx.named_struct("T", vec![]);
    fx.method(t, "String");

    assert_eq!(fx.resolver().missing_method(t, iface), Ok(Satisfaction::WrongType(m)));
}

#[test]
fn test_pointer_receiver_needs_pointer() {
    let mut fx = Fixture::new();
    let (iface, m) = stringer(&mut fx);
    let t = fx.named_struct("T", vec![]);
    string_method(&mut fx, t, true);
    let pt = fx.ptr(t);

    let resolver = fx.resolver();
    assert_eq!(resolver.missing_method(t, iface), Ok(Satisfaction::Missing(m)));
    assert_eq!(resolver.missing_method(pt, iface), Ok(Satisfaction::Satisfied));
}

#[test]
fn test_pointer_receiver_through_embedded_pointer() {
    let mut fx = Fixture::new();
    let (iface, m) = stringer(&mut fx);
    let e = fx.named_struct("E", vec![]);
    string_method(&mut fx, e, true);

    let pe = fx.ptr(e);
    let by_pointer = fx.embed(pe);
    let s = fx.named_struct("S", vec![by_pointer]);
    assert_eq!(fx.resolver().missing_method(s, iface), Ok(Satisfaction::Satisfied));

    let by_value = fx.embed(e);
    let v = fx.named_struct("V", vec![by_value]);
    assert_eq!(fx.resolver().missing_method(v, iface), Ok(Satisfaction::Missing(m)));
}

#[test]
fn test_field_shadowing_method_is_missing() {
    let mut fx = Fixture::new();
    let (iface, m) = stringer(&mut fx);
    let e = fx.named_struct("E", vec![]);
    string_method(&mut fx, e, false);
    let string = fx.string();
    let field = fx.field("String", string);
    let embed = fx.embed(e);
    let s = fx.named_struct("S", vec![field, embed]);

    assert_eq!(fx.resolver().missing_method(s, iface), Ok(Satisfaction::Missing(m)));
}

#[test]
fn test_ambiguous_method_is_missing() {
    let mut fx = Fixture::new();
    let (iface, m) = stringer(&mut fx);
    let a = fx.named_struct("A", vec![]);
    string_method(&mut fx, a, false);
    let b = fx.named_struct("B", vec![]);
    string_method(&mut fx, b, false);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![embed_a, embed_b]);

    assert_eq!(fx.resolver().missing_method(s, iface), Ok(Satisfaction::Missing(m)));
}

#[test]
fn test_embedded_interface_satisfies() {
    let mut fx = Fixture::new();
    let (iface, _) = stringer(&mut fx);
    let embed = fx.embed(iface);
    let s = fx.named_struct("S", vec![embed]);
    assert_eq!(fx.resolver().implements(s, iface), Ok(true));
}

#[test]
fn test_unexported_method_from_other_package() {
    let mut fx = Fixture::new();
    let q = fx.ctx.new_package("example.com/q");
    let want = fx.iface_method("close", vec![], vec![]);
    let closer = fx.named_interface("closer", vec![want]);

    let t = fx.ctx.new_named(q, "T");
    let st = fx.ctx.new_struct(vec![]).unwrap();
    fx.ctx.set_underlying(t, st).unwrap();
    fx.ctx
        .new_method(t, "close", Signature { recv: Some(t), ..Signature::default() })
        .unwrap();

    assert_eq!(fx.resolver().missing_method(t, closer), Ok(Satisfaction::Missing(want)));

    let u = fx.named_struct("U", vec![]);
    fx.method(u, "close");
    assert_eq!(fx.resolver().missing_method(u, closer), Ok(Satisfaction::Satisfied));
}
