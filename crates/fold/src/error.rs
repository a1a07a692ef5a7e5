//! Error types for constant evaluation.
//!
//! Both variants mean the caller handed the evaluator something earlier stages should never produce,
//! so compilation is expected to abort when either is returned. Division or modulo by zero is not
//! an error: it evaluates to zero like it does on the machine.

use ctk_data::Opcode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FoldError {
    /// Operand count does not match the opcode's arity.
    #[error("`{opcode}` takes {expected} operand(s), got {found}")]
    Arity { opcode: Opcode, expected: usize, found: usize },

    /// An operand (or literal) lies outside the numeric domain it must be in.
    #[error("{context}: {reason}")]
    Domain { context: DomainContext, reason: &'static str },
}

/// Where a domain violation was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainContext {
    Opcode(Opcode),
    Literal,
}

impl std::fmt::Display for DomainContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainContext::Opcode(op) => write!(f, "`{op}`"),
            DomainContext::Literal => write!(f, "literal"),
        }
    }
}

/// Result type for constant evaluation.
pub type Result<T> = std::result::Result<T, FoldError>;
