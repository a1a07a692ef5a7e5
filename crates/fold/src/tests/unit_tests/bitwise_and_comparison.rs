use crate::{
    define_binary_op_test, define_signed_op_test, define_unary_op_test, eval,
    tests::helpers::{eval_binary, signed},
};
use alloy_primitives::{I256, U256};
use ctk_data::Opcode;

fn flag(value: bool) -> U256 {
    U256::from(value as u8)
}

// ============= Comparison Operations =============

define_binary_op_test!(test_eq, Opcode::Eq, |left: U256, right: U256| flag(left == right));

define_binary_op_test!(test_lt, Opcode::Lt, |left: U256, right: U256| flag(left < right));

define_binary_op_test!(test_gt, Opcode::Gt, |left: U256, right: U256| flag(left > right));

define_signed_op_test!(test_slt, Opcode::SLt, |left: I256, right: I256| flag(left < right));

define_signed_op_test!(test_sgt, Opcode::SGt, |left: I256, right: I256| flag(left > right));

define_unary_op_test!(test_iszero, Opcode::IsZero, |value: U256| flag(value.is_zero()));

// ============= Bitwise Operations =============

define_binary_op_test!(test_and, Opcode::And, |left: U256, right: U256| left & right);

define_binary_op_test!(test_or, Opcode::Or, |left: U256, right: U256| left | right);

define_binary_op_test!(test_xor, Opcode::Xor, |left: U256, right: U256| left ^ right);

define_unary_op_test!(test_not, Opcode::Not, |value: U256| U256::MAX - value);

// ============= Edge Cases =============

#[test]
fn test_iszero_exact() {
    assert_eq!(eval(Opcode::IsZero, &[U256::ZERO]), Ok(U256::from(1)));
    assert_eq!(eval(Opcode::IsZero, &[U256::from(1)]), Ok(U256::ZERO));
    assert_eq!(eval(Opcode::IsZero, &[U256::MAX]), Ok(U256::ZERO));
    assert_eq!(eval(Opcode::IsZero, &[U256::ONE << 255]), Ok(U256::ZERO));
}

#[test]
fn test_signed_and_unsigned_comparison_disagree_on_negative() {
    let minus_one = U256::MAX;
    let one = U256::from(1);
    assert_eq!(eval_binary(Opcode::Lt, minus_one, one), U256::ZERO);
    assert_eq!(eval_binary(Opcode::SLt, minus_one, one), U256::from(1));
    assert_eq!(eval_binary(Opcode::Gt, minus_one, one), U256::from(1));
    assert_eq!(eval_binary(Opcode::SGt, minus_one, one), U256::ZERO);
}

#[test]
fn test_signed_comparison_extremes() {
    let min = U256::ONE << 255;
    let max = min - U256::from(1);
    assert_eq!(eval_binary(Opcode::SLt, min, max), U256::from(1));
    assert_eq!(eval_binary(Opcode::SGt, max, min), U256::from(1));
    assert_eq!(eval_binary(Opcode::SLt, signed(-2), signed(-1)), U256::from(1));
    assert_eq!(eval_binary(Opcode::SLt, signed(-1), signed(-1)), U256::ZERO);
}

#[test]
fn test_not_full_width() {
    assert_eq!(eval(Opcode::Not, &[U256::ZERO]), Ok(U256::MAX));
    assert_eq!(eval(Opcode::Not, &[U256::MAX]), Ok(U256::ZERO));
}
