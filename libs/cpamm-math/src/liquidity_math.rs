use core::cmp::Ordering;

use crate::full_math::{cmp_products, mul_div};
use crate::sqrt_math::sqrt_product;
use cpamm_types::PoolError;
use soroban_sdk::Env;

/// Shares minted by the first deposit into an empty pool: floor(sqrt(amount0 * amount1))
///
/// The deposit ratio becomes the pool's initial price.
pub fn shares_for_initial_deposit(
    env: &Env,
    amount0: u128,
    amount1: u128,
) -> Result<u128, PoolError> {
    let shares = sqrt_product(env, amount0, amount1)?;
    if shares == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }
    Ok(shares)
}

/// Shares minted by a deposit into a funded pool
///
/// min(amount0 * total / reserve0, amount1 * total / reserve1), each rounded down.
pub fn shares_for_deposit(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_shares: u128,
) -> Result<u128, PoolError> {
    if reserve0 == 0 || reserve1 == 0 || total_shares == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    let shares0 = mul_div(env, amount0, total_shares, reserve0)?;
    let shares1 = mul_div(env, amount1, total_shares, reserve1)?;
    let shares = shares0.min(shares1);

    if shares == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }
    Ok(shares)
}

/// True when amount0 : amount1 equals reserve0 : reserve1 exactly
pub fn is_balanced_deposit(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
) -> bool {
    cmp_products(env, reserve0, amount1, reserve1, amount0) == Ordering::Equal
}

/// Amounts redeemed by burning `shares`: reserve * shares / total, each rounded down
pub fn amounts_for_shares(
    env: &Env,
    shares: u128,
    reserve0: u128,
    reserve1: u128,
    total_shares: u128,
) -> Result<(u128, u128), PoolError> {
    if total_shares == 0 || shares > total_shares {
        return Err(PoolError::InsufficientLiquidity);
    }

    let amount0 = mul_div(env, reserve0, shares, total_shares)?;
    let amount1 = mul_div(env, reserve1, shares, total_shares)?;

    Ok((amount0, amount1))
}
