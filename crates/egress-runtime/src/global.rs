// src/global.rs

use crate::value::Value;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Handle to a global variable's storage slot.
///
/// Clones share the slot, so a write through any clone is visible to all.
/// A poisoned lock still holds a whole `Value` (writes replace it in one
/// assignment), so readers recover the guard instead of failing.
#[derive(Clone)]
pub struct Global {
    name: Arc<str>,
    slot: Arc<RwLock<Value>>,
}

impl Global {
    pub fn new(name: impl Into<Arc<str>>, initial: Value) -> Self {
        Self {
            name: name.into(),
            slot: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value currently stored in the global.
    pub fn get(&self) -> Value {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, value: Value) {
        tracing::trace!(global = %self.name, kind = value.kind_name(), "global store");
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = value;
    }

    /// True if both handles refer to the same storage slot.
    pub fn same_slot(&self, other: &Global) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl PartialEq for Global {
    fn eq(&self, other: &Self) -> bool {
        self.same_slot(other)
    }
}

impl fmt::Debug for Global {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Global(@{})", self.name)
    }
}

/// Host-facing reference to a global.
///
/// One level of indirection over the slot: every [`SharedGlobal::read`]
/// observes the value stored at that moment, never a copy taken at export.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedGlobal(Global);

impl SharedGlobal {
    pub fn new(global: Global) -> Self {
        Self(global)
    }

    pub fn global(&self) -> &Global {
        &self.0
    }

    pub fn read(&self) -> Value {
        self.0.get()
    }

    pub fn write(&self, value: Value) {
        self.0.set(value);
    }
}
