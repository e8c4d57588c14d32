// src/lookup.rs
//! Field and method lookup with promotion through embedded fields.
//!
//! The search walks the embedding graph breadth first, one embedding depth
//! at a time. The first depth that yields a match decides the result:
//! exactly one match is the answer, two or more are an ambiguity. Named types
//! are expanded at most once, which both implements shadowing of deeper
//! occurrences and guarantees termination on cyclic embedding.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use promote_types::{Object, PackageId, Type, TypeContext, TypeId, BLANK};

use crate::error::LookupError;

/// Embedded field indices from depth 0 down to the match, followed by the
/// index of the match in its declaring type's field list, method list, or
/// interface method set.
pub type IndexPath = SmallVec<[usize; 4]>;

/// Outcome of [`SelectorResolver::lookup_field_or_method`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// A unique field or method was found.
    Found {
        obj: Object,
        index: IndexPath,
        /// At least one pointer was dereferenced on the way to `obj`.
        indirect: bool,
    },
    /// Several members share the name at the shallowest matching depth.
    /// `index` points at one of them.
    Ambiguous { index: IndexPath },
    NotFound,
}

impl LookupResult {
    pub fn obj(&self) -> Option<Object> {
        match self {
            LookupResult::Found { obj, .. } => Some(*obj),
            _ => None,
        }
    }

    /// The index path. `None` means nothing was found; `Some` without an
    /// object means the selector is ambiguous.
    pub fn index(&self) -> Option<&[usize]> {
        match self {
            LookupResult::Found { index, .. } | LookupResult::Ambiguous { index } => Some(index.as_slice()),
            LookupResult::NotFound => None,
        }
    }

    pub fn indirect(&self) -> bool {
        matches!(self, LookupResult::Found { indirect: true, .. })
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, LookupResult::Ambiguous { .. })
    }
}

/// A successful selection, as returned by [`SelectorResolver::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub obj: Object,
    pub index: IndexPath,
    pub indirect: bool,
}

/// A named type reached through embedding, queued for the next depth.
#[derive(Debug, Clone)]
struct EmbeddedType {
    /// `None` only for the starting entry when the start type is not named.
    named: Option<TypeId>,
    index: IndexPath,
    indirect: bool,
    /// The type was reached along more than one path at this depth.
    multiples: bool,
}

/// Resolves selectors against a read-only [`TypeContext`].
#[derive(Debug, Clone, Copy)]
pub struct SelectorResolver<'ctx> {
    ctx: &'ctx TypeContext,
}

impl<'ctx> SelectorResolver<'ctx> {
    pub fn new(ctx: &'ctx TypeContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &'ctx TypeContext {
        self.ctx
    }

    /// Looks up the field or method `(pkg, name)` in `ty`.
    ///
    /// `ty` may be a pointer; one level is dereferenced first and counts as
    /// an indirection. Methods declared on a named type shadow fields and
    /// interface methods reached through it. A match at a shallower depth
    /// always wins over deeper ones.
    pub fn lookup_field_or_method(&self, ty: TypeId, pkg: PackageId, name: &str) -> LookupResult {
        if name == BLANK {
            return LookupResult::NotFound;
        }

        let ctx = self.ctx;
        let (start, is_ptr) = ctx.deref(ty);
        let mut current = vec![EmbeddedType {
            named: ctx.named(start).map(|_| start),
            index: IndexPath::new(),
            indirect: is_ptr,
            multiples: false,
        }];

        // Named types already expanded at this or a shallower depth.
        let mut seen: FxHashSet<TypeId> = FxHashSet::default();
        let mut depth = 0usize;

        while !current.is_empty() {
            log::trace!("lookup `{}` in {}: depth {} with {} type(s)", name, ctx.display(ty), depth, current.len());
            let mut next: Vec<EmbeddedType> = Vec::new();
            let mut found: Option<(Object, IndexPath, bool)> = None;

            for e in &current {
                let mut search = start;

                if let Some(named) = e.named {
                    if !seen.insert(named) {
                        // A shallower occurrence of this type shadows this one.
                        continue;
                    }
                    if let Some(info) = ctx.named(named) {
                        if let Some((i, m)) = ctx.lookup_method(&info.methods, pkg, name) {
                            let index = concat(&e.index, i);
                            if found.is_some() || e.multiples {
                                return self.collision(ty, name, index);
                            }
                            found = Some((Object::Func(m), index, e.indirect));
                            // A type's own method hides its fields and interface methods.
                            continue;
                        }
                    }
                    search = ctx.underlying(named);
                }

                match ctx.ty(search) {
                    Type::Struct(st) => {
                        for (i, &f) in st.fields.iter().enumerate() {
                            let field = ctx.field(f);
                            if ctx.same_id(field.pkg, &field.name, pkg, name) {
                                let index = concat(&e.index, i);
                                if found.is_some() || e.multiples {
                                    return self.collision(ty, name, index);
                                }
                                found = Some((Object::Field(f), index, e.indirect));
                                continue;
                            }
                            // Once a match exists at this depth nothing deeper matters.
                            // Embedded basic types carry no fields or methods.
                            if found.is_none() && field.anonymous {
                                let (base, is_ptr) = ctx.deref(field.ty);
                                if ctx.named(base).is_some() {
                                    next.push(EmbeddedType {
                                        named: Some(base),
                                        index: concat(&e.index, i),
                                        indirect: e.indirect || is_ptr,
                                        multiples: e.multiples,
                                    });
                                }
                            }
                        }
                    }
                    Type::Interface(iface) => {
                        if let Some((i, m)) = ctx.lookup_method(&iface.methods, pkg, name) {
                            let index = concat(&e.index, i);
                            if found.is_some() || e.multiples {
                                return self.collision(ty, name, index);
                            }
                            found = Some((Object::Func(m), index, e.indirect));
                        }
                    }
                    _ => {}
                }
            }

            if let Some((obj, index, indirect)) = found {
                log::trace!("lookup `{}` found {} at depth {}", name, ctx.describe(obj), depth);
                return LookupResult::Found { obj, index, indirect };
            }

            current = consolidate_multiples(next);
            depth += 1;
        }

        LookupResult::NotFound
    }

    /// Like [`lookup_field_or_method`](Self::lookup_field_or_method) but reports
    /// failures as diagnostics.
    pub fn select(&self, ty: TypeId, pkg: PackageId, name: &str) -> Result<Selection, LookupError> {
        match self.lookup_field_or_method(ty, pkg, name) {
            LookupResult::Found { obj, index, indirect } => Ok(Selection { obj, index, indirect }),
            LookupResult::Ambiguous { index } => Err(LookupError::Ambiguous {
                name: name.to_string(),
                ty: self.ctx.display(ty).to_string(),
                index: index.to_vec(),
            }),
            LookupResult::NotFound => Err(LookupError::NotFound {
                name: name.to_string(),
                ty: self.ctx.display(ty).to_string(),
            }),
        }
    }

    fn collision(&self, ty: TypeId, name: &str, index: IndexPath) -> LookupResult {
        log::debug!("ambiguous selector `{}` in {} at index {:?}", name, self.ctx.display(ty), index.as_slice());
        LookupResult::Ambiguous { index }
    }
}

/// Merges entries for the same named type into one entry marked as
/// reachable along multiple paths.
fn consolidate_multiples(list: Vec<EmbeddedType>) -> Vec<EmbeddedType> {
    if list.len() <= 1 {
        return list;
    }

    let mut unique: Vec<EmbeddedType> = Vec::with_capacity(list.len());
    let mut prev: FxHashMap<Option<TypeId>, usize> = FxHashMap::default();
    for e in list {
        match prev.get(&e.named) {
            Some(&i) => unique[i].multiples = true,
            None => {
                prev.insert(e.named, unique.len());
                unique.push(e);
            }
        }
    }
    unique
}

fn concat(list: &[usize], i: usize) -> IndexPath {
    let mut path = IndexPath::with_capacity(list.len() + 1);
    path.extend_from_slice(list);
    path.push(i);
    path
}
