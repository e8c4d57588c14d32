// tests/satisfy/interfaces.rs
use crate::*;

#[test]
fn test_empty_interface_is_always_satisfied() {
    let mut fx = Fixture::new();
    let any = fx.named_interface("Any", vec![]);
    let int = fx.int();
    let resolver = fx.resolver();
    assert_eq!(resolver.missing_method(int, any), Ok(Satisfaction::Satisfied));
    assert_eq!(resolver.missing_method(any, any), Ok(Satisfaction::Satisfied));
}

#[test]
fn test_non_interface_target_is_rejected() {
    let mut fx = Fixture::new();
    let s = fx.named_struct("S", vec![]);
    let int = fx.int();
    assert_eq!(
        fx.resolver().missing_method(int, s),
        Err(TypeError::NotAnInterface { ty: "p.S".to_string() })
    );
}

#[test]
fn test_interface_with_superset_satisfies() {
    let mut fx = Fixture::new();
    let read = fx.iface_method("Read", vec![], vec![]);
    let close = fx.iface_method("Close", vec![], vec![]);
    let reader = fx.named_interface("Reader", vec![read]);
    let read_closer = fx.named_interface("ReadCloser", vec![close, read]);

    let resolver = fx.resolver();
    assert_eq!(resolver.missing_method(read_closer, reader), Ok(Satisfaction::Satisfied));
    assert_eq!(resolver.missing_method(reader, read_closer), Ok(Satisfaction::Missing(close)));
}

#[test]
fn test_interface_method_with_other_signature_is_wrong_type() {
    let mut fx = Fixture::new();
    let int = fx.int();
    let string = fx.string();
    let want = fx.iface_method("Len", vec![], vec![int]);
    let got = fx.iface_method("Len", vec![], vec![string]);
    let sized = fx.named_interface("Sized", vec![want]);
    let other = fx.named_interface("Other", vec![got]);

    let result = fx.resolver().missing_method(other, sized).unwrap();
    assert_eq!(result, Satisfaction::WrongType(want));
    assert_eq!(result.into_parts(), (Some(want), true));
}

#[test]
fn test_unnamed_interfaces_compare_structurally() {
    let mut fx = Fixture::new();
    let int = fx.int();
    let a = fx.iface_method("Get", vec![int], vec![int]);
    let b = fx.iface_method("Get", vec![int], vec![int]);
    let want = fx.ctx.new_interface(vec![a], &[]).unwrap();
    let have = fx.ctx.new_interface(vec![b], &[]).unwrap();
    assert_eq!(fx.resolver().implements(have, want), Ok(true));
}
