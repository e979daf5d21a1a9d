// src/function.rs

use std::fmt;
use std::sync::Arc;

/// Handle to a function known to the interpreter.
///
/// Function handles are already host-visible objects, so the boundary passes
/// them through untouched. Clones share the same descriptor.
#[derive(Debug, Clone)]
pub struct FunctionHandle(Arc<FunctionDescriptor>);

#[derive(Debug)]
struct FunctionDescriptor {
    name: Box<str>,
    index: u32,
}

impl FunctionHandle {
    pub fn new(name: impl Into<Box<str>>, index: u32) -> Self {
        Self(Arc::new(FunctionDescriptor {
            name: name.into(),
            index,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Index of the function in the engine's function table.
    pub fn index(&self) -> u32 {
        self.0.index
    }

    /// True if both handles refer to the same descriptor.
    pub fn same_descriptor(&self, other: &FunctionHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for FunctionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_descriptor(other)
            || (self.0.index == other.0.index && self.0.name == other.0.name)
    }
}

impl fmt::Display for FunctionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0.name)
    }
}
