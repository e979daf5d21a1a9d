// src/exported.rs
//
// Wrapper objects produced when an address-like value leaves the interpreter.

use crate::address::{Address, VirtualAllocation};
use crate::types::Type;
use std::fmt;

/// A native address paired with the type its memory is read as.
///
/// This is what the host sees for raw pointers. It is also a legal input to
/// the boundary: exporting an already exported address is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportedAddress {
    address: Address,
    export_type: Type,
}

impl ExportedAddress {
    pub fn new(address: Address, export_type: Type) -> Self {
        Self {
            address,
            export_type,
        }
    }

    /// The canonical exported null: address zero, untyped pointer.
    pub fn null() -> Self {
        Self::new(Address::NULL, Type::untyped_pointer())
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn export_type(&self) -> &Type {
        &self.export_type
    }

    pub fn is_null(&self) -> bool {
        self.address.is_null()
    }
}

impl fmt::Display for ExportedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.export_type, self.address)
    }
}

/// Host-facing view of a virtual allocation.
///
/// Owns its own copy of the allocation, so later engine writes or cursor
/// moves on the original do not show through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedAllocation(VirtualAllocation);

impl ExportedAllocation {
    /// Takes ownership of an allocation that is already a private copy.
    pub fn new(copy: VirtualAllocation) -> Self {
        Self(copy)
    }

    pub fn allocation(&self) -> &VirtualAllocation {
        &self.0
    }

    pub fn into_allocation(self) -> VirtualAllocation {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_null() {
        let null = ExportedAddress::null();
        assert!(null.is_null());
        assert_eq!(null.export_type(), &Type::untyped_pointer());
        assert_eq!(null.to_string(), "void* 0x0000000000000000");
    }

    #[test]
    fn exported_allocation_owns_bytes() {
        let exported = ExportedAllocation::new(VirtualAllocation::from_bytes([5, 6]));
        assert_eq!(exported.allocation().bytes(), &[5, 6]);
        assert_eq!(exported.into_allocation().size(), 2);
    }
}
