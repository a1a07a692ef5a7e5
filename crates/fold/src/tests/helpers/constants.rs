/// `(left, right)` pairs for binary opcodes, evaluated as `left OP right`.
pub const BINARY_OP_TEST_CASES: [(u64, u64); 8] = [
    (0, 0),
    (1, 0),
    (0, 1),
    (10, 3),
    (3, 10),
    (u64::MAX, 1),
    (u64::MAX, u64::MAX),
    (1337, 42),
];

pub const UNARY_OP_TEST_CASES: [u64; 5] = [0, 1, 42, 0xFF, u64::MAX];

/// Signed pairs covering every sign combination plus zero divisors.
pub const SIGNED_OP_TEST_CASES: [(i64, i64); 9] = [
    (7, 2),
    (-7, 2),
    (7, -2),
    (-7, -2),
    (0, -1),
    (-1, 0),
    (5, 0),
    (i64::MIN, -1),
    (i64::MAX, i64::MIN),
];
