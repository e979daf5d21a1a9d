// src/managed_escape.rs

//! Resolution of the base object behind a foreign-tagged pointer.

use crate::boundary::BoundaryValue;
use egress_runtime::{Handle, TypedForeignObject, downcast_ref};
use std::sync::Arc;

/// Strips interpreter wrappers from a managed handle before export.
///
/// Each wrapped kind gets one case in [`ManagedEscape::execute`]. Every other
/// kind, including ones added after this was written, falls through to
/// [`ManagedEscape::do_other`] and is returned unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManagedEscape;

impl ManagedEscape {
    pub fn create() -> Self {
        ManagedEscape
    }

    pub fn execute(&self, object: &Handle) -> BoundaryValue {
        if let Some(typed) = downcast_ref::<TypedForeignObject>(object) {
            return self.do_foreign(typed);
        }
        self.do_other(object)
    }

    fn do_foreign(&self, object: &TypedForeignObject) -> BoundaryValue {
        tracing::debug!(
            foreign = object.foreign().type_name(),
            ty = ?object.ty(),
            "unwrapping typed foreign object"
        );
        BoundaryValue::Managed(Arc::clone(object.foreign()))
    }

    fn do_other(&self, object: &Handle) -> BoundaryValue {
        BoundaryValue::Managed(Arc::clone(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egress_runtime::{HostObject, ManagedObject, Type};
    use std::any::Any;

    #[derive(Debug)]
    struct Opaque;

    impl ManagedObject for Opaque {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn type_name(&self) -> &'static str {
            "opaque"
        }
    }

    #[test]
    fn typed_foreign_is_unwrapped() {
        let host = HostObject::handle("socket", 9);
        let typed = TypedForeignObject::wrap(Arc::clone(&host), Some(Type::Integer(64)));
        let out = ManagedEscape::create().execute(&typed);
        assert!(Arc::ptr_eq(out.as_managed().unwrap(), &host));
    }

    #[test]
    fn other_kinds_pass_through() {
        let host = HostObject::handle("socket", 9);
        let out = ManagedEscape::create().execute(&host);
        assert!(Arc::ptr_eq(out.as_managed().unwrap(), &host));

        let opaque: Handle = Arc::new(Opaque);
        let out = ManagedEscape::create().execute(&opaque);
        assert!(Arc::ptr_eq(out.as_managed().unwrap(), &opaque));
    }

    #[test]
    fn unwraps_one_level_only() {
        let host = HostObject::handle("inner", 1);
        let inner = TypedForeignObject::wrap(host, None);
        let outer = TypedForeignObject::wrap(Arc::clone(&inner), None);
        let out = ManagedEscape::create().execute(&outer);
        assert!(Arc::ptr_eq(out.as_managed().unwrap(), &inner));
    }
}
