use alloy_primitives::U256;
use proptest::prelude::*;

/// Asserts that two strings are equal, showing a line diff if they differ.
///
/// Leading and trailing whitespace is ignored so expected values can be written as indented raw
/// string literals.
///
/// # Arguments
/// * `actual` - The actual string value
/// * `expected` - The expected string value
/// * `context_name` - Name to use in the panic message (e.g., "compressed map", "fold output")
/// * `additional_context` - Optional labelled input that produced `actual`
pub fn assert_strings_with_diff(
    actual: &str,
    expected: &str,
    context_name: &str,
    additional_context: Option<(&str, &str)>,
) {
    let actual = actual.trim();
    let expected = expected.trim();
    if actual == expected {
        return;
    }

    if let Some((context_label, context_value)) = additional_context {
        eprintln!("=== {} ===\n{}\n", context_label, context_value.trim());
    }
    eprintln!("=== Expected ===\n{}\n", expected);
    eprintln!("=== Actual ===\n{}\n", actual);
    eprintln!("=== Diff ===");

    let expected_lines: Vec<_> = expected.lines().collect();
    let actual_lines: Vec<_> = actual.lines().collect();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(e), Some(a)) if e == a => {}
            (e, a) => {
                if let Some(e) = e {
                    eprintln!("Line {}: - {}", i + 1, e);
                }
                if let Some(a) = a {
                    eprintln!("Line {}: + {}", i + 1, a);
                }
            }
        }
    }

    panic!("{} mismatch", context_name);
}

/// 256-bit words biased toward the values arithmetic tends to break on.
pub fn arb_word() -> impl Strategy<Value = U256> {
    prop_oneof![
        // Explicit edge cases
        Just(U256::ZERO),
        Just(U256::ONE),
        Just(U256::MAX),
        // Signed boundaries: MIN, MAX and -1
        Just(U256::ONE << 255),
        Just((U256::ONE << 255) - U256::ONE),
        // Single bits and their neighbours
        any::<u8>().prop_map(|x| U256::ONE << x),
        any::<u8>().prop_map(|x| (U256::ONE << x).wrapping_sub(U256::ONE)),
        // Small values
        any::<u64>().prop_map(U256::from),
        any::<U256>(),
    ]
}

/// Shift amounts straddling the word width.
pub fn arb_shift() -> impl Strategy<Value = U256> {
    prop_oneof![
        4 => (0u64..=300).prop_map(U256::from),
        1 => any::<U256>(),
    ]
}
