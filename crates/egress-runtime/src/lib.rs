//! Egress runtime: the interpreter-side values that may leave the interpreter.
//!
//! This crate models what the execution engine hands to the boundary layer:
//! scalars, raw addresses, function handles, vectors, varbit integers,
//! globals, and pointers into foreign-owned objects. It also defines the
//! wrapper objects the boundary produces for address-like values
//! ([`ExportedAddress`], [`ExportedAllocation`], [`SharedGlobal`]).
//!
//! Values are immutable once handed to the boundary. Mutable state lives behind
//! shared slots ([`Global`]) or in owned buffers the engine keeps
//! ([`VirtualAllocation`]).
pub mod address;
pub mod exported;
pub mod function;
pub mod global;
pub mod managed;
pub mod primitive;
pub mod types;
pub mod value;
pub mod varbit;
pub mod vector;

pub use address::{Address, VirtualAllocation};
pub use exported::{ExportedAddress, ExportedAllocation};
pub use function::FunctionHandle;
pub use global::{Global, SharedGlobal};
pub use managed::{
    ForeignPointer, Handle, HostObject, ManagedObject, TypedForeignObject, downcast_ref,
};
pub use primitive::{BoxedPrimitive, Primitive};
pub use types::Type;
pub use value::Value;
pub use varbit::VarBit;
pub use vector::{LaneKind, Vector};
