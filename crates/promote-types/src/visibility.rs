//! Name matching under package visibility.
//!
//! Two identifiers are the same if they are spelled the same and either
//! are exported or were declared in packages with the same path.

use crate::context::TypeContext;
use crate::types::{is_exported, FieldId, FuncId, PackageId, BLANK};

impl TypeContext {
    /// Reports whether `(pkg_a, name_a)` and `(pkg_b, name_b)` denote the same identifier.
    pub fn same_id(&self, pkg_a: PackageId, name_a: &str, pkg_b: PackageId, name_b: &str) -> bool {
        if name_a != name_b {
            return false;
        }
        is_exported(name_a) || pkg_a == pkg_b || self.package(pkg_a).path == self.package(pkg_b).path
    }

    /// Index of the field matching `(pkg, name)`.
    pub fn field_index(&self, fields: &[FieldId], pkg: PackageId, name: &str) -> Option<usize> {
        if name == BLANK {
            return None;
        }
        fields.iter().position(|&f| {
            let field = self.field(f);
            self.same_id(field.pkg, &field.name, pkg, name)
        })
    }

    /// Index and handle of the method matching `(pkg, name)`.
    pub fn lookup_method(&self, methods: &[FuncId], pkg: PackageId, name: &str) -> Option<(usize, FuncId)> {
        debug_assert!(name != BLANK, "blank method names are never looked up");
        methods.iter().copied().enumerate().find(|&(_, m)| {
            let func = self.func(m);
            self.same_id(func.pkg, &func.name, pkg, name)
        })
    }
}
