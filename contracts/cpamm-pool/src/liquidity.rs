use crate::invariants::share_balance_within_supply;
use crate::ledger::AssetLedger;
use crate::storage::{get_config, get_share_balance, get_state, set_share_balance, set_state};
use cpamm_math::{
    amounts_for_shares, is_balanced_deposit, shares_for_deposit, shares_for_initial_deposit,
};
use cpamm_types::PoolError;
use soroban_sdk::{Address, Env};

/// Deposit both assets and mint liquidity shares to `provider`
///
/// The first deposit mints sqrt(amount0 * amount1) and fixes the initial price.
/// Later deposits must match the reserve ratio exactly.
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    amount0: u128,
    amount1: u128,
) -> Result<u128, PoolError> {
    if amount0 == 0 || amount1 == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }

    let config = get_config(env)?;
    let mut state = get_state(env);

    let minted = if state.is_empty() {
        shares_for_initial_deposit(env, amount0, amount1)?
    } else {
        if !is_balanced_deposit(env, amount0, amount1, state.reserve0, state.reserve1) {
            return Err(PoolError::UnbalancedDeposit);
        }
        shares_for_deposit(
            env,
            amount0,
            amount1,
            state.reserve0,
            state.reserve1,
            state.total_shares,
        )?
    };

    state.reserve0 = checked_add(state.reserve0, amount0)?;
    state.reserve1 = checked_add(state.reserve1, amount1)?;
    state.total_shares = checked_add(state.total_shares, minted)?;
    let balance = checked_add(get_share_balance(env, provider), minted)?;

    // State first, then pull the funds in
    set_state(env, &state);
    set_share_balance(env, provider, balance);

    AssetLedger::new(env, &config.token0).transfer_in(provider, amount0)?;
    AssetLedger::new(env, &config.token1).transfer_in(provider, amount1)?;

    Ok(minted)
}

/// Burn `shares` held by `provider` and pay out the proportional reserves
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    shares: u128,
) -> Result<(u128, u128), PoolError> {
    if shares == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }

    let config = get_config(env)?;
    let mut state = get_state(env);

    let balance = get_share_balance(env, provider);
    if shares > balance || !share_balance_within_supply(balance, state.total_shares) {
        return Err(PoolError::InsufficientLiquidity);
    }

    let (amount0, amount1) = amounts_for_shares(
        env,
        shares,
        state.reserve0,
        state.reserve1,
        state.total_shares,
    )?;
    if amount0 == 0 || amount1 == 0 {
        return Err(PoolError::InsufficientOutputAmount);
    }

    state.reserve0 = checked_sub(state.reserve0, amount0)?;
    state.reserve1 = checked_sub(state.reserve1, amount1)?;
    state.total_shares = checked_sub(state.total_shares, shares)?;

    // Burn before paying out
    set_state(env, &state);
    set_share_balance(env, provider, balance - shares);

    AssetLedger::new(env, &config.token0).transfer_out(provider, amount0)?;
    AssetLedger::new(env, &config.token1).transfer_out(provider, amount1)?;

    Ok((amount0, amount1))
}

fn checked_add(a: u128, b: u128) -> Result<u128, PoolError> {
    a.checked_add(b).ok_or(PoolError::ArithmeticOverflow)
}

fn checked_sub(a: u128, b: u128) -> Result<u128, PoolError> {
    a.checked_sub(b).ok_or(PoolError::InvariantViolation)
}
