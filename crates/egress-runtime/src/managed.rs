// src/managed.rs

//! Managed handles: references to host-environment objects held inside the
//! interpreter, and pointers into them.
//!
//! The set of handle kinds is open. Any `ManagedObject` implementor can sit
//! behind a [`Handle`]; the boundary only needs to recognize the kinds it
//! unwraps and passes every other kind through.

use crate::types::Type;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An object owned outside the interpreter's native memory.
pub trait ManagedObject: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Short name of the concrete kind, for diagnostics.
    fn type_name(&self) -> &'static str;
}

/// Shared reference to a managed object.
pub type Handle = Arc<dyn ManagedObject>;

/// Downcast a handle to a concrete managed kind.
pub fn downcast_ref<T: ManagedObject>(handle: &Handle) -> Option<&T> {
    handle.as_any().downcast_ref::<T>()
}

/// A host-native object the interpreter never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostObject {
    pub name: String,
    pub id: u64,
}

impl HostObject {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn handle(name: impl Into<String>, id: u64) -> Handle {
        Arc::new(Self::new(name, id))
    }
}

impl ManagedObject for HostObject {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "host"
    }
}

/// A foreign object the interpreter wrapped to attach a static type to it.
///
/// The wrapper is an interpreter artifact: it exists so loads and stores
/// through the object know the layout. The host must only ever see the
/// inner `foreign` handle.
#[derive(Debug, Clone)]
pub struct TypedForeignObject {
    foreign: Handle,
    ty: Option<Type>,
}

impl TypedForeignObject {
    pub fn new(foreign: Handle, ty: Option<Type>) -> Self {
        Self { foreign, ty }
    }

    pub fn wrap(foreign: Handle, ty: Option<Type>) -> Handle {
        Arc::new(Self::new(foreign, ty))
    }

    pub fn foreign(&self) -> &Handle {
        &self.foreign
    }

    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }
}

impl ManagedObject for TypedForeignObject {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "typed-foreign"
    }
}

/// An address-like value that points into a managed object.
///
/// `offset` is the byte distance from the start of `object`. Pointer
/// arithmetic changes only the offset; the base object never moves.
#[derive(Debug, Clone)]
pub struct ForeignPointer {
    object: Handle,
    offset: i64,
    pointee: Option<Type>,
}

impl ForeignPointer {
    pub fn new(object: Handle) -> Self {
        Self {
            object,
            offset: 0,
            pointee: None,
        }
    }

    pub fn with_pointee(object: Handle, pointee: Type) -> Self {
        Self {
            object,
            offset: 0,
            pointee: Some(pointee),
        }
    }

    pub fn object(&self) -> &Handle {
        &self.object
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn pointee(&self) -> Option<&Type> {
        self.pointee.as_ref()
    }

    #[must_use]
    pub fn increment(&self, delta: i64) -> Self {
        Self {
            object: Arc::clone(&self.object),
            offset: self.offset.wrapping_add(delta),
            pointee: self.pointee.clone(),
        }
    }
}

impl PartialEq for ForeignPointer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
            && self.offset == other.offset
            && self.pointee == other.pointee
    }
}
