//! Opcode arithmetic table.
//!
//! Operands are passed in the order the stack holds them: `operands[0]` is the top of the stack,
//! `operands[1]` the element below it. Binary opcodes therefore compute `operands[1] OP
//! operands[0]`, e.g. `div` yields `operands[1] / operands[0]`.

use crate::{
    error::{DomainContext, FoldError, Result},
    word::{Word, from_bool, to_signed, to_unsigned},
};
use alloy_primitives::{I256, U256};
use ctk_data::Opcode;

const WORD_BITS: usize = 256;

/// Evaluates `opcode` over literal `operands`.
pub fn eval(opcode: Opcode, operands: &[Word]) -> Result<Word> {
    let expected = opcode.arity();
    if operands.len() != expected {
        return Err(FoldError::Arity { opcode, expected, found: operands.len() });
    }

    let result = match *operands {
        [value] => eval_unary(opcode, value),
        [top, second] if opcode.is_signed() => {
            eval_signed(opcode, to_signed(second), to_signed(top))?
        }
        [top, second] => eval_unsigned(opcode, second, top),
        _ => unreachable!("arity is either 1 or 2"),
    };

    tracing::trace!(%opcode, ?operands, %result, "folded");
    Ok(result)
}

fn eval_unary(opcode: Opcode, value: Word) -> Word {
    use Opcode as O;
    match opcode {
        O::Not => !value,
        O::IsZero => from_bool(value.is_zero()),
        O::Add
        | O::Sub
        | O::Mul
        | O::Div
        | O::SDiv
        | O::Mod
        | O::SMod
        | O::Exp
        | O::Eq
        | O::Lt
        | O::Gt
        | O::SLt
        | O::SGt
        | O::Or
        | O::And
        | O::Xor
        | O::SignExtend
        | O::Shr
        | O::Shl
        | O::Sar => unreachable!("`{opcode}` is not unary"),
    }
}

fn eval_unsigned(opcode: Opcode, a: Word, b: Word) -> Word {
    use Opcode as O;
    match opcode {
        O::Add => a.wrapping_add(b),
        O::Sub => a.wrapping_sub(b),
        O::Mul => a.wrapping_mul(b),
        O::Div => a.checked_div(b).unwrap_or(U256::ZERO),
        O::Mod => a.checked_rem(b).unwrap_or(U256::ZERO),
        O::Exp => a.pow(b),
        O::SignExtend => sign_extend(a, b),
        O::Eq => from_bool(a == b),
        O::Lt => from_bool(a < b),
        O::Gt => from_bool(a > b),
        O::Or => a | b,
        O::And => a & b,
        O::Xor => a ^ b,
        O::Shr => match shift_amount(a) {
            Some(shift) => b >> shift,
            None => U256::ZERO,
        },
        O::Shl => match shift_amount(a) {
            Some(shift) => b << shift,
            None => U256::ZERO,
        },
        O::SDiv | O::SMod | O::SLt | O::SGt | O::Sar | O::Not | O::IsZero => {
            unreachable!("`{opcode}` is not an unsigned binary opcode")
        }
    }
}

fn eval_signed(opcode: Opcode, a: I256, b: I256) -> Result<Word> {
    use Opcode as O;
    let result = match opcode {
        O::SDiv => signed_div(a, b),
        O::SMod => signed_rem(a, b),
        O::SLt => from_bool(a < b),
        O::SGt => from_bool(a > b),
        O::Sar => {
            if a.is_negative() {
                return Err(FoldError::Domain {
                    context: DomainContext::Opcode(opcode),
                    reason: "shift amount must be non-negative",
                });
            }
            let shifted = match shift_amount(to_unsigned(a)) {
                Some(shift) => b.asr(shift),
                None if b.is_negative() => I256::MINUS_ONE,
                None => I256::ZERO,
            };
            to_unsigned(shifted)
        }
        O::Add
        | O::Sub
        | O::Mul
        | O::Div
        | O::Mod
        | O::Exp
        | O::Eq
        | O::Lt
        | O::Gt
        | O::Or
        | O::And
        | O::Xor
        | O::Not
        | O::SignExtend
        | O::IsZero
        | O::Shr
        | O::Shl => unreachable!("`{opcode}` is not a signed binary opcode"),
    };
    Ok(result)
}

/// `None` when the shift pushes every bit out of the word.
fn shift_amount(shift: Word) -> Option<usize> {
    let shift = shift.saturating_to::<usize>();
    (shift < WORD_BITS).then_some(shift)
}

/// Extends the sign bit of the `nbytes + 1` low-order bytes of `value` to the full word.
fn sign_extend(nbytes: Word, value: Word) -> Word {
    if nbytes > U256::from(31) {
        return value;
    }
    let sign_bit_pos = nbytes.to::<usize>() * 8 + 7;
    let low_mask = (U256::ONE << sign_bit_pos) - U256::ONE;
    if value.bit(sign_bit_pos) { value | !low_mask } else { value & low_mask }
}

/// Quotient truncated toward zero; `MIN / -1` wraps back to `MIN`.
fn signed_div(a: I256, b: I256) -> Word {
    if b.is_zero() {
        return U256::ZERO;
    }
    let quotient = a.unsigned_abs() / b.unsigned_abs();
    if a.is_negative() != b.is_negative() { quotient.wrapping_neg() } else { quotient }
}

/// Remainder carrying the sign of the dividend.
fn signed_rem(a: I256, b: I256) -> Word {
    if b.is_zero() {
        return U256::ZERO;
    }
    let rem = a.unsigned_abs() % b.unsigned_abs();
    if a.is_negative() { rem.wrapping_neg() } else { rem }
}
