// src/vector.rs

use crate::address::Address;
use std::fmt;

/// Lane kind of a homogeneous vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    I1,
    I8,
    I16,
    I32,
    I64,
    Float,
    Double,
    Address,
}

impl LaneKind {
    pub const ALL: [LaneKind; 8] = [
        LaneKind::I1,
        LaneKind::I8,
        LaneKind::I16,
        LaneKind::I32,
        LaneKind::I64,
        LaneKind::Float,
        LaneKind::Double,
        LaneKind::Address,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LaneKind::I1 => "i1",
            LaneKind::I8 => "i8",
            LaneKind::I16 => "i16",
            LaneKind::I32 => "i32",
            LaneKind::I64 => "i64",
            LaneKind::Float => "float",
            LaneKind::Double => "double",
            LaneKind::Address => "ptr",
        }
    }
}

/// A fixed-length SIMD-style vector value.
#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    I1(Vec<bool>),
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Address(Vec<Address>),
}

impl Vector {
    pub fn lane_kind(&self) -> LaneKind {
        match self {
            Vector::I1(_) => LaneKind::I1,
            Vector::I8(_) => LaneKind::I8,
            Vector::I16(_) => LaneKind::I16,
            Vector::I32(_) => LaneKind::I32,
            Vector::I64(_) => LaneKind::I64,
            Vector::Float(_) => LaneKind::Float,
            Vector::Double(_) => LaneKind::Double,
            Vector::Address(_) => LaneKind::Address,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Vector::I1(v) => v.len(),
            Vector::I8(v) => v.len(),
            Vector::I16(v) => v.len(),
            Vector::I32(v) => v.len(),
            Vector::I64(v) => v.len(),
            Vector::Float(v) => v.len(),
            Vector::Double(v) => v.len(),
            Vector::Address(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A zero-filled vector of the given lane kind, for tests and builders.
    pub fn zeroed(kind: LaneKind, len: usize) -> Self {
        match kind {
            LaneKind::I1 => Vector::I1(vec![false; len]),
            LaneKind::I8 => Vector::I8(vec![0; len]),
            LaneKind::I16 => Vector::I16(vec![0; len]),
            LaneKind::I32 => Vector::I32(vec![0; len]),
            LaneKind::I64 => Vector::I64(vec![0; len]),
            LaneKind::Float => Vector::Float(vec![0.0; len]),
            LaneKind::Double => Vector::Double(vec![0.0; len]),
            LaneKind::Address => Vector::Address(vec![Address::NULL; len]),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} x {}>", self.len(), self.lane_kind().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_matches_kind() {
        for kind in LaneKind::ALL {
            let v = Vector::zeroed(kind, 4);
            assert_eq!(v.lane_kind(), kind);
            assert_eq!(v.len(), 4);
        }
    }

    #[test]
    fn display_type_spelling() {
        assert_eq!(Vector::I32(vec![1, 2, 3, 4]).to_string(), "<4 x i32>");
        assert_eq!(Vector::Double(vec![]).to_string(), "<0 x double>");
        assert!(Vector::Double(vec![]).is_empty());
    }
}
