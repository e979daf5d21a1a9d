// src/errors/mod.rs
//! Escape errors.
//!
//! Every error here means the producer broke the boundary contract or asked
//! for a feature that does not exist yet. None are retried or recovered at
//! this layer; they end the single escape call that raised them.
//!
//! Error code range: E4xxx.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// The kind of escape error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeErrorKind {
    /// Value kind that cannot cross the boundary yet
    UnsupportedExport {
        what: &'static str,
        detail: Option<String>,
    },

    /// Foreign-tagged pointer whose offset from its base object is not zero
    InvalidPointerArithmetic { offset: i64 },

    /// Caller-side precondition broken (e.g. address with no export type)
    PreconditionViolation {
        message: &'static str,
        value_kind: &'static str,
    },
}

/// Error raised while escaping one value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EscapeError {
    pub kind: EscapeErrorKind,
}

impl EscapeError {
    /// Create an unsupported export error
    pub fn unsupported(what: &'static str) -> Self {
        EscapeErrorKind::UnsupportedExport { what, detail: None }.into()
    }

    /// Create an unsupported export error naming the offending value
    pub fn unsupported_with_detail(what: &'static str, detail: impl Into<String>) -> Self {
        EscapeErrorKind::UnsupportedExport {
            what,
            detail: Some(detail.into()),
        }
        .into()
    }

    pub fn pointer_arithmetic(offset: i64) -> Self {
        EscapeErrorKind::InvalidPointerArithmetic { offset }.into()
    }

    pub fn precondition(message: &'static str, value_kind: &'static str) -> Self {
        EscapeErrorKind::PreconditionViolation {
            message,
            value_kind,
        }
        .into()
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, EscapeErrorKind::UnsupportedExport { .. })
    }

    pub fn is_pointer_arithmetic(&self) -> bool {
        matches!(self.kind, EscapeErrorKind::InvalidPointerArithmetic { .. })
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self.kind, EscapeErrorKind::PreconditionViolation { .. })
    }
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        EscapeError { kind }
    }
}

impl Diagnostic for EscapeError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: &'static str = match &self.kind {
            EscapeErrorKind::UnsupportedExport { .. } => "E4001",
            EscapeErrorKind::InvalidPointerArithmetic { .. } => "E4002",
            EscapeErrorKind::PreconditionViolation { .. } => "E4003",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &'static str = match &self.kind {
            EscapeErrorKind::UnsupportedExport { .. } => {
                "copy the value into memory and export a pointer to it instead"
            }
            EscapeErrorKind::InvalidPointerArithmetic { .. } => {
                "only export the base pointer of a foreign object"
            }
            EscapeErrorKind::PreconditionViolation { .. } => {
                "this is a bug in the code producing the value, not in the host"
            }
        };
        Some(Box::new(help))
    }
}

impl fmt::Display for EscapeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeErrorKind::UnsupportedExport { what, detail } => {
                write!(f, "exporting {} is not yet supported", what)?;
                if let Some(detail) = detail {
                    write!(f, " ({})", detail)?;
                }
                Ok(())
            }
            EscapeErrorKind::InvalidPointerArithmetic { offset } => {
                write!(
                    f,
                    "foreign object after pointer arithmetic must not leave the interpreter (offset {})",
                    offset
                )
            }
            EscapeErrorKind::PreconditionViolation {
                message,
                value_kind,
            } => {
                write!(f, "precondition violated for {}: {}", value_kind, message)
            }
        }
    }
}

/// Result type alias for escape operations.
pub type EscapeResult<T> = Result<T, EscapeError>;

impl From<EscapeError> for String {
    fn from(err: EscapeError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported() {
        let err = EscapeError::unsupported("varbit");
        assert_eq!(err.to_string(), "exporting varbit is not yet supported");
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_unsupported_with_detail() {
        let err = EscapeError::unsupported_with_detail("vectors", "<4 x i32>");
        assert_eq!(
            err.to_string(),
            "exporting vectors is not yet supported (<4 x i32>)"
        );
    }

    #[test]
    fn test_pointer_arithmetic() {
        let err = EscapeError::pointer_arithmetic(-8);
        assert_eq!(
            err.to_string(),
            "foreign object after pointer arithmetic must not leave the interpreter (offset -8)"
        );
        assert!(err.is_pointer_arithmetic());
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_precondition() {
        let err = EscapeError::precondition("missing export type", "address");
        assert_eq!(
            err.to_string(),
            "precondition violated for address: missing export type"
        );
        assert!(err.is_precondition());
    }

    #[test]
    fn test_into_string() {
        let s: String = EscapeError::unsupported("vectors").into();
        assert_eq!(s, "exporting vectors is not yet supported");
    }

    #[test]
    fn test_error_codes() {
        let cases: Vec<(EscapeError, &str)> = vec![
            (EscapeError::unsupported("x"), "E4001"),
            (EscapeError::pointer_arithmetic(1), "E4002"),
            (EscapeError::precondition("m", "k"), "E4003"),
        ];
        for (err, expected_code) in cases {
            let code = err.code().expect("should have error code");
            assert_eq!(code.to_string(), expected_code);
            assert!(err.help().is_some());
        }
    }
}
