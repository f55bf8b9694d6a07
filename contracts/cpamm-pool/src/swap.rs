use crate::invariants::{output_within_reserve, product_not_decreased};
use crate::ledger::AssetLedger;
use crate::storage::{get_config, get_state, set_state};
use cpamm_math::compute_swap;
use cpamm_types::{PoolConfig, PoolError, PoolState, SwapQuote};
use soroban_sdk::{Address, Env};

/// Price a swap of `amount_in` of `token_in` against the current reserves
///
/// Pure with respect to storage: used by both `swap` and `quote_swap`.
pub fn price_swap(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    token_in: &Address,
    amount_in: u128,
) -> Result<(bool, SwapQuote), PoolError> {
    if amount_in == 0 {
        return Err(PoolError::InsufficientInputAmount);
    }
    let zero_for_one = config
        .direction_for(token_in)
        .ok_or(PoolError::InvalidAsset)?;

    let (reserve_in, reserve_out) = state.reserves_for(zero_for_one);
    let quote = compute_swap(env, amount_in, reserve_in, reserve_out)?;

    // Both hold for any quote the formula produces
    if !output_within_reserve(quote.amount_out, reserve_out) {
        return Err(PoolError::InvariantViolation);
    }
    if !product_not_decreased(
        env,
        (reserve_in, reserve_out),
        (quote.reserve_in_after, quote.reserve_out_after),
    ) {
        return Err(PoolError::InvariantViolation);
    }

    Ok((zero_for_one, quote))
}

/// Execute an exact-input swap: `trader` pays `amount_in` of `token_in` and
/// receives the other asset
pub fn execute_swap(
    env: &Env,
    trader: &Address,
    token_in: &Address,
    amount_in: u128,
) -> Result<u128, PoolError> {
    let config = get_config(env)?;
    let mut state = get_state(env);

    let (zero_for_one, quote) = price_swap(env, &config, &state, token_in, amount_in)?;

    if zero_for_one {
        state.reserve0 = quote.reserve_in_after;
        state.reserve1 = quote.reserve_out_after;
    } else {
        state.reserve1 = quote.reserve_in_after;
        state.reserve0 = quote.reserve_out_after;
    }

    // Update state before touching either ledger
    set_state(env, &state);

    let (asset_in, asset_out) = config.assets_for(zero_for_one);
    AssetLedger::new(env, asset_in).transfer_in(trader, amount_in)?;
    AssetLedger::new(env, asset_out).transfer_out(trader, quote.amount_out)?;

    Ok(quote.amount_out)
}
