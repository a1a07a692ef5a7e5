//! Property tests for arithmetic opcodes

use crate::{eval, tests::helpers::eval_binary};
use alloy_primitives::{I256, U256};
use ctk_data::Opcode;
use proptest::prelude::*;
use test_utils::arb_word;

proptest! {
    #[test]
    fn test_every_opcode_stays_in_domain(
        op_index in 0..Opcode::ALL.len(),
        top in arb_word(),
        second in arb_word(),
    ) {
        let opcode = Opcode::ALL[op_index];
        let operands = if opcode.arity() == 1 { vec![top] } else { vec![top, second] };
        // The only rejectable input is a negative `sar` shift; every other pair folds.
        match eval(opcode, &operands) {
            Ok(result) => {
                let predicate = matches!(
                    opcode,
                    Opcode::Eq | Opcode::Lt | Opcode::Gt | Opcode::SLt | Opcode::SGt | Opcode::IsZero
                );
                if predicate {
                    prop_assert!(result <= U256::ONE, "{} produced {}", opcode, result);
                }
            }
            Err(err) => {
                prop_assert_eq!(opcode, Opcode::Sar, "unexpected error {}", err);
                prop_assert!(I256::from_raw(second).is_negative());
            }
        }
    }

    #[test]
    fn test_add_commutative(a in arb_word(), b in arb_word()) {
        let forward = eval_binary(Opcode::Add, a, b);
        prop_assert_eq!(forward, eval_binary(Opcode::Add, b, a), "addition should be commutative");
        prop_assert_eq!(forward, a.wrapping_add(b));
    }

    #[test]
    fn test_sub_inverts_add(a in arb_word(), b in arb_word()) {
        let sum = eval_binary(Opcode::Add, a, b);
        prop_assert_eq!(eval_binary(Opcode::Sub, sum, b), a);
    }

    #[test]
    fn test_mul_commutative(a in arb_word(), b in arb_word()) {
        prop_assert_eq!(eval_binary(Opcode::Mul, a, b), eval_binary(Opcode::Mul, b, a));
    }

    #[test]
    fn test_division_by_zero_returns_zero(dividend in arb_word()) {
        for opcode in [Opcode::Div, Opcode::Mod, Opcode::SDiv, Opcode::SMod] {
            prop_assert_eq!(eval_binary(opcode, dividend, U256::ZERO), U256::ZERO, "{}", opcode);
        }
    }

    #[test]
    fn test_div_mod_identity(dividend in arb_word(), divisor in arb_word()) {
        prop_assume!(!divisor.is_zero());
        let quotient = eval_binary(Opcode::Div, dividend, divisor);
        let rem = eval_binary(Opcode::Mod, dividend, divisor);
        prop_assert!(rem < divisor);
        prop_assert_eq!(quotient * divisor + rem, dividend);
    }

    #[test]
    fn test_sdiv_smod_identity(dividend in arb_word(), divisor in arb_word()) {
        prop_assume!(!divisor.is_zero());
        let quotient = eval_binary(Opcode::SDiv, dividend, divisor);
        let rem = eval_binary(Opcode::SMod, dividend, divisor);
        // q * d + r == n holds modulo 2^256, including MIN / -1
        prop_assert_eq!(quotient.wrapping_mul(divisor).wrapping_add(rem), dividend);
        if !rem.is_zero() {
            prop_assert_eq!(
                I256::from_raw(rem).is_negative(),
                I256::from_raw(dividend).is_negative(),
                "remainder takes the dividend's sign"
            );
        }
    }

    #[test]
    fn test_exp_matches_repeated_mul(base in arb_word(), exponent in 0u64..16) {
        let expected = (0..exponent).fold(U256::ONE, |acc, _| acc.wrapping_mul(base));
        prop_assert_eq!(eval_binary(Opcode::Exp, base, U256::from(exponent)), expected);
    }
}
