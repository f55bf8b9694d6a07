use crate::full_math::mul_div;
use cpamm_types::{PoolError, SwapQuote};
use soroban_sdk::Env;

/// Output of an exact-input swap under x * y = k with no fee
///
/// amount_out = reserve_out * amount_in / (reserve_in + amount_in), rounded down.
/// Rounding down keeps the pool's product from decreasing.
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, PoolError> {
    if amount_in == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    let denominator = reserve_in
        .checked_add(amount_in)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let amount_out = mul_div(env, reserve_out, amount_in, denominator)?;

    // Dust input: the trader would pay something for nothing
    if amount_out == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }

    Ok(amount_out)
}

/// Price a swap and compute the resulting reserves
pub fn compute_swap(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<SwapQuote, PoolError> {
    let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out)?;

    let reserve_in_after = reserve_in
        .checked_add(amount_in)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let reserve_out_after = reserve_out
        .checked_sub(amount_out)
        .ok_or(PoolError::InvariantViolation)?;

    Ok(SwapQuote {
        amount_out,
        reserve_in_after,
        reserve_out_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::full_math::cmp_products;
    use core::cmp::Ordering;
    use soroban_sdk::Env;

    #[test]
    fn test_get_amount_out_reference_swap() {
        let env = Env::default();
        // 500 * 100 / (1000 + 100) = 45.45 -> 45
        assert_eq!(get_amount_out(&env, 100, 1000, 500), Ok(45));
    }

    #[test]
    fn test_get_amount_out_reverse_direction() {
        let env = Env::default();
        // 1000 * 100 / (500 + 100) = 166.67 -> 166
        assert_eq!(get_amount_out(&env, 100, 500, 1000), Ok(166));
    }

    #[test]
    fn test_get_amount_out_zero_input() {
        let env = Env::default();
        assert_eq!(
            get_amount_out(&env, 0, 1000, 500),
            Err(PoolError::InsufficientInputAmount)
        );
    }

    #[test]
    fn test_get_amount_out_dust_input() {
        let env = Env::default();
        // 500 * 1 / 1001 = 0.49 -> 0
        assert_eq!(
            get_amount_out(&env, 1, 1000, 500),
            Err(PoolError::InsufficientInputAmount)
        );
        // 500 * 2 / 1002 = 0.998 -> 0
        assert_eq!(
            get_amount_out(&env, 2, 1000, 500),
            Err(PoolError::InsufficientInputAmount)
        );
        // 500 * 3 / 1003 = 1.49 -> 1
        assert_eq!(get_amount_out(&env, 3, 1000, 500), Ok(1));
    }

    #[test]
    fn test_get_amount_out_empty_reserves() {
        let env = Env::default();
        assert_eq!(
            get_amount_out(&env, 100, 0, 0),
            Err(PoolError::InsufficientLiquidity)
        );
        assert_eq!(
            get_amount_out(&env, 100, 1000, 0),
            Err(PoolError::InsufficientLiquidity)
        );
    }

    #[test]
    fn test_get_amount_out_never_drains() {
        let env = Env::default();
        // Huge input still leaves at least one unit behind
        let out = get_amount_out(&env, u128::MAX - 1000, 1000, 500).unwrap();
        assert!(out < 500);
    }

    #[test]
    fn test_get_amount_out_input_overflow() {
        let env = Env::default();
        assert_eq!(
            get_amount_out(&env, u128::MAX, 1000, 500),
            Err(PoolError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_compute_swap_reserves() {
        let env = Env::default();
        let quote = compute_swap(&env, 100, 1000, 500).unwrap();
        assert_eq!(quote.amount_out, 45);
        assert_eq!(quote.reserve_in_after, 1100);
        assert_eq!(quote.reserve_out_after, 455);
    }

    #[test]
    fn test_compute_swap_product_never_decreases() {
        let env = Env::default();
        let cases: [(u128, u128, u128); 6] = [
            (100, 1000, 500),
            (3, 1000, 500),
            (999, 7, 123_456),
            (1, 10, 1_000_000),
            (1 << 90, 1 << 100, 1 << 110),
            (123_456_789, 987_654_321, 555_555),
        ];
        for (amount_in, reserve_in, reserve_out) in cases {
            let quote = compute_swap(&env, amount_in, reserve_in, reserve_out).unwrap();
            assert_ne!(
                cmp_products(
                    &env,
                    quote.reserve_in_after,
                    quote.reserve_out_after,
                    reserve_in,
                    reserve_out
                ),
                Ordering::Less
            );
        }
    }
}
