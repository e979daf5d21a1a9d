// src/boundary.rs

use egress_runtime::{
    ExportedAddress, ExportedAllocation, FunctionHandle, Handle, Primitive, SharedGlobal,
};
use std::sync::Arc;

/// A value shaped for consumption by the host.
#[derive(Debug, Clone)]
pub enum BoundaryValue {
    Primitive(Primitive),
    String(Arc<str>),
    /// Native address plus the type to read it as
    Address(ExportedAddress),
    Function(FunctionHandle),
    /// Private copy of a virtual allocation
    Allocation(ExportedAllocation),
    /// Live reference to a global variable
    Global(SharedGlobal),
    /// A managed object, already stripped of interpreter wrappers
    Managed(Handle),
}

impl BoundaryValue {
    /// The canonical null: address zero exported as an untyped pointer.
    pub fn null() -> Self {
        BoundaryValue::Address(ExportedAddress::null())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BoundaryValue::Address(a) if *a == ExportedAddress::null())
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            BoundaryValue::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&ExportedAddress> {
        match self {
            BoundaryValue::Address(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_managed(&self) -> Option<&Handle> {
        match self {
            BoundaryValue::Managed(h) => Some(h),
            _ => None,
        }
    }
}

impl PartialEq for BoundaryValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BoundaryValue::Primitive(a), BoundaryValue::Primitive(b)) => a == b,
            (BoundaryValue::String(a), BoundaryValue::String(b)) => a == b,
            (BoundaryValue::Address(a), BoundaryValue::Address(b)) => a == b,
            (BoundaryValue::Function(a), BoundaryValue::Function(b)) => a == b,
            (BoundaryValue::Allocation(a), BoundaryValue::Allocation(b)) => a == b,
            (BoundaryValue::Global(a), BoundaryValue::Global(b)) => a == b,
            // Managed objects have identity only.
            (BoundaryValue::Managed(a), BoundaryValue::Managed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
