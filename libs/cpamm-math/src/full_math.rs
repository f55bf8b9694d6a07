use core::cmp::Ordering;

use cpamm_types::PoolError;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, PoolError> {
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    u128_from_u256(&result)
}

/// Compare a * b against c * d without overflowing
pub fn cmp_products(env: &Env, a: u128, b: u128, c: u128, d: u128) -> Ordering {
    let left = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let right = U256::from_u128(env, c).mul(&U256::from_u128(env, d));

    if left == right {
        Ordering::Equal
    } else if left.gt(&right) {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Convert U256 to u128
pub(crate) fn u128_from_u256(value: &U256) -> Result<u128, PoolError> {
    value.to_u128().ok_or(PoolError::ArithmeticOverflow)
}
