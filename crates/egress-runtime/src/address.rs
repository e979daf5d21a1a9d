// src/address.rs

//! Raw addresses and byte-addressable virtual allocations.

use std::fmt;

/// A raw address into the interpreter's flat native memory.
///
/// Carries no type of its own; the boundary pairs it with an export type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(u64);

impl Address {
    /// The distinguished null-address sentinel.
    pub const NULL: Address = Address(0);

    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Pointer arithmetic. Wraps like the native address space does.
    #[inline]
    pub const fn increment(self, delta: i64) -> Self {
        Self(self.0.wrapping_add_signed(delta))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

/// A byte buffer owned by the interpreter plus a cursor into it.
///
/// Virtual allocations back stack slots and small objects that the engine
/// keeps in managed memory instead of native memory. The cursor moves with
/// pointer arithmetic, and the bytes are written in place, so both are
/// mutable engine state that must not be shared with the host.
#[derive(Debug, PartialEq, Eq)]
pub struct VirtualAllocation {
    bytes: Vec<u8>,
    offset: usize,
}

impl VirtualAllocation {
    /// Allocate `size` zeroed bytes with the cursor at the start.
    pub fn zeroed(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
            offset: 0,
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            offset: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Move the cursor. Returns `false` and leaves the cursor untouched if the
    /// result would fall outside `0..=size`.
    pub fn increment(&mut self, delta: isize) -> bool {
        match self.offset.checked_add_signed(delta) {
            Some(next) if next <= self.bytes.len() => {
                self.offset = next;
                true
            }
            _ => false,
        }
    }

    /// Read the byte at `cursor + index`.
    pub fn read_u8(&self, index: usize) -> Option<u8> {
        self.bytes.get(self.offset.checked_add(index)?).copied()
    }

    /// Write the byte at `cursor + index`. Returns `false` when out of bounds.
    pub fn write_u8(&mut self, index: usize, value: u8) -> bool {
        let Some(at) = self.offset.checked_add(index) else {
            return false;
        };
        match self.bytes.get_mut(at) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Deep copy: the result shares neither bytes nor cursor with `self`.
    pub fn copy(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            offset: self.offset,
        }
    }
}

impl Clone for VirtualAllocation {
    fn clone(&self) -> Self {
        self.copy()
    }
}
