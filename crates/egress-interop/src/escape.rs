// src/escape.rs

//! The escape dispatcher.
//!
//! Values that leave the interpreter must be primitives, strings, or objects
//! the host can hold on to. [`EscapeNode`] is the per-call-site converter that
//! guarantees that. It is an exhaustive match over [`Value`], so adding a
//! value kind is a compile error here until it gets a rule.
//!
//! The failure branches sit in `#[cold]` out-of-line functions. They are rare
//! and must stay out of the common path's code layout.

use crate::boundary::BoundaryValue;
use crate::errors::{EscapeError, EscapeResult};
use crate::managed_escape::ManagedEscape;
use egress_runtime::{
    Address, ExportedAddress, ExportedAllocation, ForeignPointer, Primitive, SharedGlobal, Type,
    Value, VarBit, Vector, VirtualAllocation,
};
use std::sync::{Arc, OnceLock};

/// Converts values escaping at one call site.
///
/// `export_type` is the static type raw addresses from this site are read as.
/// The managed resolver is created on the first foreign-pointer export; a
/// `OnceLock` makes concurrent first use create it exactly once.
#[derive(Debug, Default)]
pub struct EscapeNode {
    export_type: Option<Type>,
    managed: OnceLock<ManagedEscape>,
}

impl EscapeNode {
    pub fn new(export_type: Option<Type>) -> Self {
        Self {
            export_type,
            managed: OnceLock::new(),
        }
    }

    pub fn export_type(&self) -> Option<&Type> {
        self.export_type.as_ref()
    }

    /// True once a foreign pointer has gone through this node.
    pub fn has_managed_escape(&self) -> bool {
        self.managed.get().is_some()
    }

    fn managed(&self) -> &ManagedEscape {
        self.managed.get_or_init(|| {
            tracing::debug!("creating managed escape resolver");
            ManagedEscape::create()
        })
    }

    pub fn execute(&self, value: &Value) -> EscapeResult<BoundaryValue> {
        tracing::trace!(
            kind = value.kind_name(),
            export_type = ?self.export_type,
            "escape"
        );
        match value {
            Value::Null => Ok(BoundaryValue::null()),
            Value::Bool(v) => Ok(BoundaryValue::Primitive(Primitive::Bool(*v))),
            Value::I8(v) => Ok(BoundaryValue::Primitive(Primitive::I8(*v))),
            Value::I16(v) => Ok(BoundaryValue::Primitive(Primitive::I16(*v))),
            Value::Char(v) => Ok(BoundaryValue::Primitive(Primitive::Char(*v))),
            Value::I32(v) => Ok(BoundaryValue::Primitive(Primitive::I32(*v))),
            Value::I64(v) => Ok(BoundaryValue::Primitive(Primitive::I64(*v))),
            Value::F32(v) => Ok(BoundaryValue::Primitive(Primitive::F32(*v))),
            Value::F64(v) => Ok(BoundaryValue::Primitive(Primitive::F64(*v))),
            Value::String(s) => Ok(BoundaryValue::String(Arc::clone(s))),
            Value::Boxed(boxed) => Ok(BoundaryValue::Primitive(boxed.value())),
            Value::Address(address) => export_address(*address, self.export_type.as_ref()),
            Value::Function(function) => Ok(BoundaryValue::Function(function.clone())),
            Value::Vector(vector) => Err(vector_not_supported(vector)),
            Value::VarBit(varbit) => Err(varbit_not_supported(varbit)),
            Value::Exported(address) => Ok(BoundaryValue::Address(address.clone())),
            Value::Foreign(pointer) => {
                if pointer.offset() == 0 {
                    Ok(self.managed().execute(pointer.object()))
                } else {
                    Err(pointer_arithmetic(pointer))
                }
            }
            Value::Allocation(allocation) => Ok(export_allocation(allocation)),
            Value::Global(global) => Ok(BoundaryValue::Global(SharedGlobal::new(global.clone()))),
        }
    }
}

/// Escape a single value with a throwaway node.
pub fn escape(value: &Value, export_type: Option<&Type>) -> EscapeResult<BoundaryValue> {
    EscapeNode::new(export_type.cloned()).execute(value)
}

pub(crate) fn export_address(
    address: Address,
    export_type: Option<&Type>,
) -> EscapeResult<BoundaryValue> {
    if address.is_null() {
        return Ok(BoundaryValue::null());
    }
    match export_type {
        Some(ty) => Ok(BoundaryValue::Address(ExportedAddress::new(
            address,
            ty.clone(),
        ))),
        None => Err(missing_export_type()),
    }
}

pub(crate) fn export_allocation(allocation: &VirtualAllocation) -> BoundaryValue {
    BoundaryValue::Allocation(ExportedAllocation::new(allocation.copy()))
}

#[cold]
#[inline(never)]
pub(crate) fn vector_not_supported(vector: &Vector) -> EscapeError {
    tracing::warn!(vector = %vector, "vector export rejected");
    EscapeError::unsupported_with_detail("vectors", vector.to_string())
}

#[cold]
#[inline(never)]
pub(crate) fn varbit_not_supported(varbit: &VarBit) -> EscapeError {
    tracing::warn!(bits = varbit.bit_width(), "varbit export rejected");
    EscapeError::unsupported_with_detail("varbit", format!("i{}", varbit.bit_width()))
}

#[cold]
#[inline(never)]
pub(crate) fn pointer_arithmetic(pointer: &ForeignPointer) -> EscapeError {
    tracing::warn!(
        offset = pointer.offset(),
        object = pointer.object().type_name(),
        "foreign pointer export rejected"
    );
    EscapeError::pointer_arithmetic(pointer.offset())
}

#[cold]
#[inline(never)]
pub(crate) fn missing_export_type() -> EscapeError {
    tracing::warn!("address escaped without an export type");
    EscapeError::precondition("non-null address escaped without an export type", "address")
}
