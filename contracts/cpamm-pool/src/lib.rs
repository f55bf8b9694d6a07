#![no_std]

mod invariants;
mod ledger;
mod liquidity;
mod storage;
mod swap;

use cpamm_types::{PoolConfig, PoolError, PoolState, SwapQuote};
use ledger::AssetLedger;
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{get_config, get_share_balance, get_state, has_config, set_config, set_state};

#[contract]
pub struct ConstantProductPool;

#[contractimpl]
impl ConstantProductPool {
    /// Bind the pool to its asset pair
    ///
    /// The pair is immutable afterwards and the pool starts with zero reserves
    /// and zero shares.
    pub fn initialize(env: Env, token0: Address, token1: Address) -> Result<(), PoolError> {
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token0 == token1 {
            return Err(PoolError::IdenticalAssets);
        }

        log!(&env, "initialize", token0, token1);

        set_config(&env, &PoolConfig { token0, token1 });
        set_state(&env, &PoolState::new());
        Ok(())
    }

    /// Deposit `amount0` of token0 and `amount1` of token1
    ///
    /// The pool pulls both amounts through the allowances `provider` granted it.
    ///
    /// # Returns
    /// Liquidity shares minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount0: u128,
        amount1: u128,
    ) -> Result<u128, PoolError> {
        provider.require_auth();
        let minted = liquidity::add_liquidity(&env, &provider, amount0, amount1)?;
        log!(&env, "add_liquidity", provider, amount0, amount1, minted);
        Ok(minted)
    }

    /// Burn `shares` and withdraw the proportional slice of both reserves
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts paid to `provider`
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: u128,
    ) -> Result<(u128, u128), PoolError> {
        provider.require_auth();
        let (amount0, amount1) = liquidity::remove_liquidity(&env, &provider, shares)?;
        log!(&env, "remove_liquidity", provider, shares, amount0, amount1);
        Ok((amount0, amount1))
    }

    /// Swap exactly `amount_in` of `token_in` for the other asset
    ///
    /// # Returns
    /// Amount of the other asset paid to `trader`
    pub fn swap(
        env: Env,
        trader: Address,
        token_in: Address,
        amount_in: u128,
    ) -> Result<u128, PoolError> {
        trader.require_auth();
        let amount_out = swap::execute_swap(&env, &trader, &token_in, amount_in)?;
        log!(&env, "swap", trader, token_in, amount_in, amount_out);
        Ok(amount_out)
    }

    // === View Functions ===

    /// Price a swap without executing it
    pub fn quote_swap(env: Env, token_in: Address, amount_in: u128) -> Result<SwapQuote, PoolError> {
        let config = get_config(&env)?;
        let state = get_state(&env);
        let (_, quote) = swap::price_swap(&env, &config, &state, &token_in, amount_in)?;
        Ok(quote)
    }

    /// Get current pool state
    pub fn get_state(env: Env) -> PoolState {
        get_state(&env)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        get_config(&env)
    }

    pub fn reserve0(env: Env) -> u128 {
        get_state(&env).reserve0
    }

    pub fn reserve1(env: Env) -> u128 {
        get_state(&env).reserve1
    }

    /// Get (reserve0, reserve1)
    pub fn get_reserves(env: Env) -> (u128, u128) {
        let state = get_state(&env);
        (state.reserve0, state.reserve1)
    }

    pub fn total_shares(env: Env) -> u128 {
        get_state(&env).total_shares
    }

    /// Liquidity shares held by `owner`
    pub fn share_balance(env: Env, owner: Address) -> u128 {
        get_share_balance(&env, &owner)
    }

    pub fn token0(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token0)
    }

    pub fn token1(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token1)
    }

    /// Check that tracked state is consistent and backed by ledger balances
    pub fn is_solvent(env: Env) -> Result<bool, PoolError> {
        let config = get_config(&env)?;
        let state = get_state(&env);
        let pool = env.current_contract_address();

        let balance0 = AssetLedger::new(&env, &config.token0).balance_of(&pool);
        let balance1 = AssetLedger::new(&env, &config.token1).balance_of(&pool);

        Ok(invariants::empty_reserves_iff_no_shares(&state)
            && invariants::reserves_backed_by_balances(&state, balance0, balance1))
    }
}
