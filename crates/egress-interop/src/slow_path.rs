// src/slow_path.rs

//! Uncached escape for call sites without a node of their own.
//!
//! Reflective and generic callers hand over a value they know nothing
//! about, with `None` standing for a null reference. The mapping is the same
//! one [`EscapeNode`](crate::escape::EscapeNode) applies; only the shape
//! differs, an ordered cascade that ends with the kinds that cross unchanged.

use std::sync::Arc;

use crate::boundary::BoundaryValue;
use crate::errors::EscapeResult;
use crate::escape::{
    export_address, export_allocation, pointer_arithmetic, varbit_not_supported,
    vector_not_supported,
};
use crate::managed_escape::ManagedEscape;
use egress_runtime::{Primitive, SharedGlobal, Type, Value};

/// Escape `value` without a per-site node.
///
/// A non-null address with no `export_type` is rejected with a
/// precondition error, as is a foreign pointer with a nonzero offset.
#[cold]
#[inline(never)]
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(kind = value.map_or("null", |v| v.kind_name()))
)]
pub fn escape_slow(
    value: Option<&Value>,
    export_type: Option<&Type>,
) -> EscapeResult<BoundaryValue> {
    let Some(value) = value else {
        return Ok(BoundaryValue::null());
    };
    match value {
        Value::Boxed(boxed) => Ok(BoundaryValue::Primitive(boxed.value())),
        Value::Address(address) => export_address(*address, export_type),
        Value::Foreign(pointer) if pointer.offset() == 0 => {
            Ok(ManagedEscape::create().execute(pointer.object()))
        }
        Value::Foreign(pointer) => Err(pointer_arithmetic(pointer)),
        Value::Allocation(allocation) => Ok(export_allocation(allocation)),
        Value::Global(global) => Ok(BoundaryValue::Global(SharedGlobal::new(global.clone()))),
        Value::Null => Ok(BoundaryValue::null()),
        Value::Vector(vector) => Err(vector_not_supported(vector)),
        Value::VarBit(varbit) => Err(varbit_not_supported(varbit)),
        // Everything below crosses unchanged.
        Value::Bool(v) => Ok(BoundaryValue::Primitive(Primitive::Bool(*v))),
        Value::I8(v) => Ok(BoundaryValue::Primitive(Primitive::I8(*v))),
        Value::I16(v) => Ok(BoundaryValue::Primitive(Primitive::I16(*v))),
        Value::Char(v) => Ok(BoundaryValue::Primitive(Primitive::Char(*v))),
        Value::I32(v) => Ok(BoundaryValue::Primitive(Primitive::I32(*v))),
        Value::I64(v) => Ok(BoundaryValue::Primitive(Primitive::I64(*v))),
        Value::F32(v) => Ok(BoundaryValue::Primitive(Primitive::F32(*v))),
        Value::F64(v) => Ok(BoundaryValue::Primitive(Primitive::F64(*v))),
        Value::String(text) => Ok(BoundaryValue::String(Arc::clone(text))),
        Value::Function(function) => Ok(BoundaryValue::Function(function.clone())),
        Value::Exported(exported) => Ok(BoundaryValue::Address(exported.clone())),
    }
}
