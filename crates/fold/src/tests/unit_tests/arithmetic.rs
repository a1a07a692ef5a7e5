use crate::{
    define_binary_op_test, define_signed_op_test,
    tests::helpers::{eval_binary, signed},
};
use alloy_primitives::{I256, U256};
use ctk_data::Opcode;

// ============= Unsigned Arithmetic =============

define_binary_op_test!(test_add, Opcode::Add, |left: U256, right: U256| left.wrapping_add(right));

define_binary_op_test!(test_sub, Opcode::Sub, |left: U256, right: U256| left.wrapping_sub(right));

define_binary_op_test!(test_mul, Opcode::Mul, |left: U256, right: U256| left.wrapping_mul(right));

define_binary_op_test!(test_div, Opcode::Div, |dividend: U256, divisor: U256| {
    if divisor == U256::ZERO { U256::ZERO } else { dividend / divisor }
});

define_binary_op_test!(test_mod, Opcode::Mod, |dividend: U256, modulus: U256| {
    if modulus == U256::ZERO { U256::ZERO } else { dividend % modulus }
});

define_binary_op_test!(test_exp, Opcode::Exp, |base: U256, exponent: U256| {
    base.pow(exponent)
});

// ============= Signed Arithmetic =============

define_signed_op_test!(test_sdiv, Opcode::SDiv, |dividend: I256, divisor: I256| {
    if divisor.is_zero() { U256::ZERO } else { (dividend / divisor).into_raw() }
});

define_signed_op_test!(test_smod, Opcode::SMod, |dividend: I256, modulus: I256| {
    if modulus.is_zero() { U256::ZERO } else { (dividend % modulus).into_raw() }
});

// ============= Edge Cases =============

#[test]
fn test_div_by_zero_top_of_stack() {
    // Top of stack is the divisor.
    assert_eq!(crate::eval(Opcode::Div, &[U256::ZERO, U256::from(5)]), Ok(U256::ZERO));
    assert_eq!(crate::eval(Opcode::Mod, &[U256::ZERO, U256::from(5)]), Ok(U256::ZERO));
    assert_eq!(crate::eval(Opcode::SDiv, &[U256::ZERO, U256::MAX]), Ok(U256::ZERO));
    assert_eq!(crate::eval(Opcode::SMod, &[U256::ZERO, U256::MAX]), Ok(U256::ZERO));
}

#[test]
fn test_add_wraps() {
    assert_eq!(eval_binary(Opcode::Add, U256::MAX, U256::from(1)), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Add, U256::MAX, U256::MAX), U256::MAX - U256::from(1));
}

#[test]
fn test_sub_wraps() {
    assert_eq!(eval_binary(Opcode::Sub, U256::ZERO, U256::from(1)), U256::MAX);
}

#[test]
fn test_mul_wraps() {
    let half = U256::ONE << 128;
    assert_eq!(eval_binary(Opcode::Mul, half, half), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Mul, U256::MAX, U256::from(2)), U256::MAX - U256::from(1));
}

#[test]
fn test_exp_wraps() {
    let two = U256::from(2);
    assert_eq!(eval_binary(Opcode::Exp, two, U256::from(255)), U256::ONE << 255);
    assert_eq!(eval_binary(Opcode::Exp, two, U256::from(256)), U256::ZERO);
    assert_eq!(eval_binary(Opcode::Exp, U256::ZERO, U256::ZERO), U256::ONE);
    assert_eq!(eval_binary(Opcode::Exp, U256::from(3), U256::from(3)), U256::from(27));
}

#[test]
fn test_sdiv_truncates_toward_zero() {
    assert_eq!(eval_binary(Opcode::SDiv, signed(-7), signed(2)), signed(-3));
    assert_eq!(eval_binary(Opcode::SDiv, signed(7), signed(-2)), signed(-3));
    assert_eq!(eval_binary(Opcode::SDiv, signed(-7), signed(-2)), signed(3));
}

#[test]
fn test_sdiv_min_by_minus_one_overflows_to_min() {
    let min = U256::ONE << 255;
    assert_eq!(eval_binary(Opcode::SDiv, min, U256::MAX), min);
}

#[test]
fn test_smod_takes_dividend_sign() {
    assert_eq!(eval_binary(Opcode::SMod, signed(-7), signed(2)), signed(-1));
    assert_eq!(eval_binary(Opcode::SMod, signed(7), signed(-2)), signed(1));
    assert_eq!(eval_binary(Opcode::SMod, signed(-8), signed(-3)), signed(-2));
    let min = U256::ONE << 255;
    assert_eq!(eval_binary(Opcode::SMod, min, U256::MAX), U256::ZERO);
}
