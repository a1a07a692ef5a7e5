use crate::tests::helpers::{eval_binary, signed};
use alloy_primitives::U256;
use ctk_data::Opcode;

fn u(value: u64) -> U256 {
    U256::from(value)
}

// `eval_binary(op, left, right)` puts `right` on top of the stack, so for shifts and
// `signextend` the first argument is the shift / byte count.

#[test]
fn test_shl() {
    assert_eq!(eval_binary(Opcode::Shl, u(0), u(1)), u(1));
    assert_eq!(eval_binary(Opcode::Shl, u(8), u(0xff)), u(0xff00));
    assert_eq!(eval_binary(Opcode::Shl, u(255), u(1)), U256::ONE << 255);
    assert_eq!(eval_binary(Opcode::Shl, u(1), U256::MAX), U256::MAX - u(1));
    assert_eq!(eval_binary(Opcode::Shl, u(4), U256::ONE << 254), U256::ZERO);
}

#[test]
fn test_shl_past_word() {
    assert_eq!(eval_binary(Opcode::Shl, u(256), u(1)), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Shl, u(257), U256::MAX), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Shl, U256::MAX, U256::MAX), U256::ZERO);
}

#[test]
fn test_shr() {
    assert_eq!(eval_binary(Opcode::Shr, u(0), u(1)), u(1));
    assert_eq!(eval_binary(Opcode::Shr, u(8), u(0xff00)), u(0xff));
    assert_eq!(eval_binary(Opcode::Shr, u(255), U256::MAX), u(1));
    assert_eq!(eval_binary(Opcode::Shr, u(256), U256::MAX), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Shr, U256::MAX, U256::MAX), U256::ZERO);
}

#[test]
fn test_sar() {
    assert_eq!(eval_binary(Opcode::Sar, u(1), signed(-8)), signed(-4));
    assert_eq!(eval_binary(Opcode::Sar, u(1), signed(-1)), signed(-1));
    assert_eq!(eval_binary(Opcode::Sar, u(2), u(16)), u(4));
    assert_eq!(eval_binary(Opcode::Sar, u(255), U256::ONE << 255), U256::MAX);
    assert_eq!(eval_binary(Opcode::Sar, u(254), U256::ONE << 254), u(1));
}

#[test]
fn test_sar_past_word_fills_with_sign() {
    assert_eq!(eval_binary(Opcode::Sar, u(256), signed(-5)), U256::MAX);
    assert_eq!(eval_binary(Opcode::Sar, u(256), u(5)), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Sar, u(1000), U256::ONE << 255), U256::MAX);
    let largest_shift = (U256::ONE << 255) - u(1);
    assert_eq!(eval_binary(Opcode::Sar, largest_shift, u(5)), U256::ZERO);
}

#[test]
fn test_sar_rejects_negative_shift() {
    let err = crate::eval(Opcode::Sar, &[u(5), U256::ONE << 255]).unwrap_err();
    assert!(matches!(err, crate::FoldError::Domain { .. }), "{err:?}");
}

#[test]
fn test_signextend_byte_zero() {
    assert_eq!(eval_binary(Opcode::SignExtend, u(0), u(0xff)), U256::MAX);
    assert_eq!(eval_binary(Opcode::SignExtend, u(0), u(0x7f)), u(0x7f));
    // Bits above the extended byte are replaced, not kept.
    assert_eq!(eval_binary(Opcode::SignExtend, u(0), u(0x1234_ff)), U256::MAX);
    assert_eq!(eval_binary(Opcode::SignExtend, u(0), u(0x1234_7f)), u(0x7f));
}

#[test]
fn test_signextend_wider() {
    assert_eq!(eval_binary(Opcode::SignExtend, u(1), u(0x8000)), signed(-0x8000));
    assert_eq!(eval_binary(Opcode::SignExtend, u(1), u(0x7fff)), u(0x7fff));
    let bit_247 = U256::ONE << 247;
    assert_eq!(eval_binary(Opcode::SignExtend, u(30), bit_247), bit_247.wrapping_neg());
}

#[test]
fn test_signextend_identity_at_and_past_full_width() {
    let value = U256::ONE << 255 | u(0x1234);
    assert_eq!(eval_binary(Opcode::SignExtend, u(31), value), value);
    assert_eq!(eval_binary(Opcode::SignExtend, u(32), value), value);
    assert_eq!(eval_binary(Opcode::SignExtend, U256::MAX, value), value);
}
