//! Egress interop: the boundary where interpreter values leave for the host.
//!
//! Every value that crosses outward goes through [`EscapeNode::execute`] (or
//! [`escape_slow`] when the caller has no node). The result is a
//! [`BoundaryValue`]: a primitive, a string, or a wrapper object the host can
//! keep. Value kinds the boundary cannot represent fail with an
//! [`EscapeError`] instead of being coerced.
pub mod boundary;
pub mod errors;
pub mod escape;
#[cfg(test)]
mod escape_parity;
pub mod managed_escape;
pub mod slow_path;

pub use boundary::BoundaryValue;
pub use errors::{EscapeError, EscapeErrorKind, EscapeResult};
pub use escape::{EscapeNode, escape};
pub use managed_escape::ManagedEscape;
pub use slow_path::escape_slow;
