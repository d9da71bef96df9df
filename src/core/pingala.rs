// File: src/core/pingala.rs
use num_bigint::BigUint;
use serde::Serializer;

/// Number of distinct laghu/guru sequences whose matras sum to `n`.
///
/// `C(1) = 1`, `C(2) = 2`, `C(n) = C(n - 1) + C(n - 2)`, and 0 for `n <= 0`.
/// Runs in O(n) additions with two rolling accumulators; the result is exact
/// for any length.
pub fn pingala_count(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::from(0u32);
    }
    if n == 1 {
        return BigUint::from(1u32);
    }
    let mut a = BigUint::from(1u32);
    let mut b = BigUint::from(2u32);
    for _ in 3..=n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

/// `[C(1), C(2), ..., C(n)]`, carrying values forward instead of
/// recomputing each point. Empty for `n == 0`.
pub fn pingala_curve(n: usize) -> Vec<BigUint> {
    let mut curve = Vec::with_capacity(n);
    let mut a = BigUint::from(1u32);
    let mut b = BigUint::from(2u32);
    for _ in 0..n {
        let next = &a + &b;
        curve.push(std::mem::replace(&mut a, std::mem::replace(&mut b, next)));
    }
    curve
}

/// Serializes a count as a decimal string so JSON readers never lose digits.
pub(crate) fn serialize_decimal<S: Serializer>(value: &BigUint, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

pub(crate) fn serialize_decimal_seq<S: Serializer>(
    values: &[BigUint],
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_seq(values.iter().map(|v| v.to_string()))
}
