// src/primitive.rs

use std::fmt;

/// A scalar that is already safe to hand to the host unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Bool(bool),
    I8(i8),
    I16(i16),
    /// 16-bit unsigned code unit
    Char(u16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Primitive {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Bool(_) => "bool",
            Primitive::I8(_) => "i8",
            Primitive::I16(_) => "i16",
            Primitive::Char(_) => "char",
            Primitive::I32(_) => "i32",
            Primitive::I64(_) => "i64",
            Primitive::F32(_) => "float",
            Primitive::F64(_) => "double",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(v) => write!(f, "{}", v),
            Primitive::I8(v) => write!(f, "{}", v),
            Primitive::I16(v) => write!(f, "{}", v),
            Primitive::Char(v) => write!(f, "u+{:04x}", v),
            Primitive::I32(v) => write!(f, "{}", v),
            Primitive::I64(v) => write!(f, "{}", v),
            Primitive::F32(v) => write!(f, "{}", v),
            Primitive::F64(v) => write!(f, "{}", v),
        }
    }
}

/// A primitive that the engine boxed so it could flow through a pointer slot.
///
/// Only one level deep: the payload is always a plain [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxedPrimitive(Primitive);

impl BoxedPrimitive {
    pub fn new(value: Primitive) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Primitive {
        self.0
    }
}
