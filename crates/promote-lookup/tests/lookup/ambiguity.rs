// tests/lookup/ambiguity.rs
use crate::*;

/// Builds `A { X int }` and `B { X int }`.
fn two_branches(fx: &mut Fixture) -> (TypeId, TypeId) {
    let int = fx.int();
    let ax = fx.field("X", int);
    let a = fx.named_struct("A", vec![ax]);
    let bx = fx.field("X", int);
    let b = fx.named_struct("B", vec![bx]);
    (a, b)
}

#[test]
fn test_same_depth_collision_is_ambiguous() {
    let mut fx = Fixture::new();
    let (a, b) = two_branches(&mut fx);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![embed_a, embed_b]);

    let result = fx.lookup(s, "X");
    assert!(result.is_ambiguous());
    assert_eq!(result.obj(), None);
    assert_eq!(result.index(), Some(&[1, 0][..]));
}

#[test]
fn test_collision_does_not_depend_on_field_order() {
    let mut fx = Fixture::new();
    let (a, b) = two_branches(&mut fx);
    let embed_b = fx.embed(b);
    let embed_a = fx.embed(a);
    let s = fx.named_struct("S", vec![embed_b, embed_a]);

    let result = fx.lookup(s, "X");
    assert!(result.is_ambiguous());
    assert!(result.index().is_some());
}

#[test]
fn test_method_colliding_with_field() {
    let mut fx = Fixture::new();
    let int = fx.int();
    let a = fx.named_struct("A", vec![]);
    fx.method(a, "M");
    let bm = fx.field("M", int);
    let b = fx.named_struct("B", vec![bm]);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![embed_a, embed_b]);

    assert!(fx.lookup(s, "M").is_ambiguous());
}

#[test]
fn test_shallower_unique_match_beats_deeper_collision() {
    let mut fx = Fixture::new();
    let int = fx.int();
    let (a, b) = two_branches(&mut fx);
    let x = fx.field("X", int);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![x, embed_a, embed_b]);

    assert_eq!(fx.lookup(s, "X"), found(Object::Field(x), &[0], false));
}

#[test]
fn test_shallow_collision_hides_deeper_unique_match() {
    let mut fx = Fixture::new();
    let int = fx.int();
    let (a, b) = two_branches(&mut fx);
    let deep_y = fx.field("X", int);
    let d = fx.named_struct("D", vec![deep_y]);
    let embed_d = fx.embed(d);
    let c = fx.named_struct("C", vec![embed_d]);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let embed_c = fx.embed(c);
    let s = fx.named_struct("S", vec![embed_c, embed_a, embed_b]);

    assert!(fx.lookup(s, "X").is_ambiguous());
}

/// `S { A; B }`, `A { C }`, `B { C }`: C is reached twice at depth 2.
#[test]
fn test_diamond_embedding_is_ambiguous() {
    let mut fx = Fixture::new();
    let int = fx.int();
    let z = fx.field("Z", int);
    let c = fx.named_struct("C", vec![z]);
    let c_in_a = fx.embed(c);
    let a = fx.named_struct("A", vec![c_in_a]);
    let c_in_b = fx.embed(c);
    let b = fx.named_struct("B", vec![c_in_b]);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![embed_a, embed_b]);

    let result = fx.lookup(s, "Z");
    assert_eq!(result, LookupResult::Ambiguous { index: path(&[0, 0, 0]) });

    // The embedded field C itself is also reachable twice.
    assert!(fx.lookup(s, "C").is_ambiguous());
}

#[test]
fn test_multiples_propagate_to_deeper_depths() {
    let mut fx = Fixture::new();
    let d = fx.named_struct("D", vec![]);
    fx.method(d, "M");
    let embed_d = fx.embed(d);
    let c = fx.named_struct("C", vec![embed_d]);
    let c_in_a = fx.embed(c);
    let a = fx.named_struct("A", vec![c_in_a]);
    let c_in_b = fx.embed(c);
    let b = fx.named_struct("B", vec![c_in_b]);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![embed_a, embed_b]);

    assert_eq!(fx.lookup(s, "M"), LookupResult::Ambiguous { index: path(&[0, 0, 0, 0]) });
}

#[test]
fn test_select_reports_ambiguity() {
    let mut fx = Fixture::new();
    let (a, b) = two_branches(&mut fx);
    let embed_a = fx.embed(a);
    let embed_b = fx.embed(b);
    let s = fx.named_struct("S", vec![embed_a, embed_b]);

    match fx.resolver().select(s, fx.p, "X") {
        Err(LookupError::Ambiguous { name, ty, index }) => {
            assert_eq!(name, "X");
            assert_eq!(ty, "p.S");
            assert_eq!(index, vec![1, 0]);
        }
        other => panic!("expected ambiguity, got {:?}", other),
    }
}
