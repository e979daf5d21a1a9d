// src/types.rs
//
// Static types used to interpret an exported region of memory.

use std::fmt;

/// The statically known type an address-like value is exported as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    /// Integer with the given bit width (i1, i8, ..., i128, arbitrary)
    Integer(u32),
    Float,
    Double,
    /// Pointer to the pointee; `None` is the untyped pointer
    Pointer(Option<Box<Type>>),
    Array(Box<Type>, u64),
    Vector(Box<Type>, u32),
    Struct(Vec<Type>),
}

impl Type {
    /// Pointer with no pointee type, used for the canonical exported null.
    pub const fn untyped_pointer() -> Self {
        Type::Pointer(None)
    }

    pub fn pointer_to(pointee: Type) -> Self {
        Type::Pointer(Some(Box::new(pointee)))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    pub fn pointee(&self) -> Option<&Type> {
        match self {
            Type::Pointer(Some(pointee)) => Some(pointee),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Integer(bits) => write!(f, "i{}", bits),
            Type::Float => write!(f, "float"),
            Type::Double => write!(f, "double"),
            Type::Pointer(None) => write!(f, "void*"),
            Type::Pointer(Some(pointee)) => write!(f, "{}*", pointee),
            Type::Array(elem, len) => write!(f, "[{} x {}]", len, elem),
            Type::Vector(elem, len) => write!(f, "<{} x {}>", len, elem),
            Type::Struct(fields) => {
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, " }}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_spellings() {
        assert_eq!(Type::untyped_pointer().to_string(), "void*");
        assert_eq!(Type::pointer_to(Type::Integer(32)).to_string(), "i32*");
        assert_eq!(
            Type::Array(Box::new(Type::Integer(8)), 4).to_string(),
            "[4 x i8]"
        );
        assert_eq!(
            Type::Vector(Box::new(Type::Float), 2).to_string(),
            "<2 x float>"
        );
        assert_eq!(
            Type::Struct(vec![Type::Integer(32), Type::Double]).to_string(),
            "{ i32, double }"
        );
        assert_eq!(Type::Struct(vec![]).to_string(), "{}");
    }

    #[test]
    fn pointee_access() {
        let ptr = Type::pointer_to(Type::Double);
        assert!(ptr.is_pointer());
        assert_eq!(ptr.pointee(), Some(&Type::Double));
        assert_eq!(Type::untyped_pointer().pointee(), None);
        assert!(!Type::Void.is_pointer());
    }
}
