use std::{fmt, str::FromStr};

/// Arithmetic and logic opcodes whose results can be computed at compile time once all operands are
/// known literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    SDiv,
    Mod,
    SMod,
    Exp,
    SignExtend,

    // Comparison
    Eq,
    Lt,
    Gt,
    SLt,
    SGt,
    IsZero,

    // Bitwise
    Or,
    And,
    Xor,
    Not,
    Shr,
    Shl,
    Sar,
}

impl Opcode {
    pub const ALL: [Opcode; 22] = [
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::SDiv,
        Opcode::Mod,
        Opcode::SMod,
        Opcode::Exp,
        Opcode::SignExtend,
        Opcode::Eq,
        Opcode::Lt,
        Opcode::Gt,
        Opcode::SLt,
        Opcode::SGt,
        Opcode::IsZero,
        Opcode::Or,
        Opcode::And,
        Opcode::Xor,
        Opcode::Not,
        Opcode::Shr,
        Opcode::Shl,
        Opcode::Sar,
    ];

    pub fn mnemonic(self) -> &'static str {
        use Opcode as O;
        match self {
            O::Add => "add",
            O::Sub => "sub",
            O::Mul => "mul",
            O::Div => "div",
            O::SDiv => "sdiv",
            O::Mod => "mod",
            O::SMod => "smod",
            O::Exp => "exp",
            O::SignExtend => "signextend",
            O::Eq => "eq",
            O::Lt => "lt",
            O::Gt => "gt",
            O::SLt => "slt",
            O::SGt => "sgt",
            O::IsZero => "iszero",
            O::Or => "or",
            O::And => "and",
            O::Xor => "xor",
            O::Not => "not",
            O::Shr => "shr",
            O::Shl => "shl",
            O::Sar => "sar",
        }
    }

    /// Number of stack operands consumed.
    pub fn arity(self) -> usize {
        match self {
            Opcode::Not | Opcode::IsZero => 1,
            _ => 2,
        }
    }

    /// Whether operands are read through the two's-complement interpretation.
    pub fn is_signed(self) -> bool {
        matches!(self, Opcode::SDiv | Opcode::SMod | Opcode::SLt | Opcode::SGt | Opcode::Sar)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown opcode {0:?}")]
pub struct ParseOpcodeError(pub String);

impl FromStr for Opcode {
    type Err = ParseOpcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| ParseOpcodeError(s.to_owned()))
    }
}
