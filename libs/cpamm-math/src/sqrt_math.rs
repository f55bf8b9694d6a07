use crate::full_math::u128_from_u256;
use cpamm_types::PoolError;
use soroban_sdk::{Env, U256};

/// Integer square root, rounded down (Newton's method)
pub fn sqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // 2^ceil(bits/2) is always >= sqrt(n), so the iteration decreases monotonically
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// floor(sqrt(a * b)) for any a, b
///
/// Uses native math when the product fits in u128, otherwise runs the same
/// iteration on U256 starting from max(a, b) >= sqrt(a * b).
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Result<u128, PoolError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    if let Some(product) = a.checked_mul(b) {
        return Ok(sqrt(product));
    }

    let n = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let mut x = U256::from_u128(env, a.max(b));
    loop {
        let y = x.add(&n.div(&x)).shr(1);
        if !y.lt(&x) {
            return u128_from_u256(&x);
        }
        x = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_sqrt_small_values() {
        assert_eq!(sqrt(0), 0);
        assert_eq!(sqrt(1), 1);
        assert_eq!(sqrt(2), 1);
        assert_eq!(sqrt(3), 1);
        assert_eq!(sqrt(4), 2);
        assert_eq!(sqrt(8), 2);
        assert_eq!(sqrt(9), 3);
    }

    #[test]
    fn test_sqrt_rounds_down() {
        // sqrt(500_000) = 707.1...
        assert_eq!(sqrt(500_000), 707);
        assert_eq!(sqrt(999_999), 999);
        assert_eq!(sqrt(1_000_000), 1000);
    }

    #[test]
    fn test_sqrt_bracketing() {
        for n in [10u128, 99, 12_345, 1 << 40, (1 << 64) + 7, u128::MAX / 3] {
            let r = sqrt(n);
            assert!(r * r <= n);
            assert!((r + 1).checked_mul(r + 1).map_or(true, |sq| sq > n));
        }
    }

    #[test]
    fn test_sqrt_max() {
        assert_eq!(sqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_sqrt_product_zero() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 0, 1000), Ok(0));
        assert_eq!(sqrt_product(&env, 1000, 0), Ok(0));
    }

    #[test]
    fn test_sqrt_product_native() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 1000, 500), Ok(707));
        assert_eq!(sqrt_product(&env, 1, 1), Ok(1));
        assert_eq!(sqrt_product(&env, 4, 9), Ok(6));
    }

    #[test]
    fn test_sqrt_product_wide() {
        let env = Env::default();
        // product is 2^200, root is 2^100
        let a = 1u128 << 100;
        assert_eq!(sqrt_product(&env, a, a), Ok(a));

        let max = u128::MAX;
        assert_eq!(sqrt_product(&env, max, max), Ok(max));

        // 2^127 * 2 = 2^128, root is 2^64
        assert_eq!(sqrt_product(&env, 1u128 << 127, 2), Ok(1u128 << 64));
    }

    #[test]
    fn test_sqrt_product_wide_rounds_down() {
        let env = Env::default();
        // (2^100 + 1) * (2^100) lies strictly between (2^100)^2 and (2^100 + 1)^2
        let a = 1u128 << 100;
        assert_eq!(sqrt_product(&env, a + 1, a), Ok(a));
    }
}
