// src/value.rs

use crate::address::{Address, VirtualAllocation};
use crate::exported::ExportedAddress;
use crate::function::FunctionHandle;
use crate::global::Global;
use crate::managed::ForeignPointer;
use crate::primitive::{BoxedPrimitive, Primitive};
use crate::varbit::VarBit;
use crate::vector::Vector;
use std::sync::Arc;

/// Every kind of value the execution engine can try to hand to the host.
///
/// The set is closed: the engine normalizes anything else before it reaches
/// the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value (a null managed reference)
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    Char(u16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Boxed(BoxedPrimitive),
    Address(Address),
    Function(FunctionHandle),
    VarBit(VarBit),
    Vector(Vector),
    /// An address that already went through the boundary once
    Exported(ExportedAddress),
    Foreign(ForeignPointer),
    Allocation(VirtualAllocation),
    Global(Global),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::Char(_) => "char",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F32(_) => "float",
            Value::F64(_) => "double",
            Value::String(_) => "string",
            Value::Boxed(_) => "boxed",
            Value::Address(_) => "address",
            Value::Function(_) => "function",
            Value::VarBit(_) => "varbit",
            Value::Vector(_) => "vector",
            Value::Exported(_) => "exported-address",
            Value::Foreign(_) => "foreign-pointer",
            Value::Allocation(_) => "virtual-allocation",
            Value::Global(_) => "global",
        }
    }

    /// The scalar payload, if this is one of the primitive kinds.
    pub fn as_primitive(&self) -> Option<Primitive> {
        match *self {
            Value::Bool(v) => Some(Primitive::Bool(v)),
            Value::I8(v) => Some(Primitive::I8(v)),
            Value::I16(v) => Some(Primitive::I16(v)),
            Value::Char(v) => Some(Primitive::Char(v)),
            Value::I32(v) => Some(Primitive::I32(v)),
            Value::I64(v) => Some(Primitive::I64(v)),
            Value::F32(v) => Some(Primitive::F32(v)),
            Value::F64(v) => Some(Primitive::F64(v)),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Bool(v) => Value::Bool(v),
            Primitive::I8(v) => Value::I8(v),
            Primitive::I16(v) => Value::I16(v),
            Primitive::Char(v) => Value::Char(v),
            Primitive::I32(v) => Value::I32(v),
            Primitive::I64(v) => Value::I64(v),
            Primitive::F32(v) => Value::F32(v),
            Primitive::F64(v) => Value::F64(v),
        }
    }
}
