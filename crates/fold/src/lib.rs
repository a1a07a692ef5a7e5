//! Constant evaluation of stack machine arithmetic.
//!
//! The constant propagation pass calls [`eval`] whenever it has proven every operand of an
//! arithmetic operation to be a literal. Results must match what the 256-bit stack machine computes
//! at runtime, bit for bit:
//!
//! - arithmetic wraps modulo `2^256`
//! - comparisons yield exactly `0` or `1`
//! - division and modulo by zero yield `0`
//! - signed opcodes read their operands as two's complement
//! - shifts by 256 or more push every bit out (`sar` fills with the sign)

mod error;
mod eval;
pub mod word;


pub use error::{DomainContext, FoldError, Result};
pub use eval::eval;
pub use word::Word;
