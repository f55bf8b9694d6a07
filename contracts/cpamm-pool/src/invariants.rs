// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates expressing the properties that keep the pool solvent. The swap
// path checks them at runtime; the tests check them after every operation.
//
// INVARIANT CATEGORIES:
//
// 1. PRODUCT INVARIANTS
//    - A swap never decreases reserve0 * reserve1
//    - A swap never pays out the whole output reserve
//
// 2. SHARE INVARIANTS
//    - Reserves are empty exactly when no shares exist
//    - No balance exceeds the total supply
//
// 3. CUSTODY INVARIANTS
//    - Tracked reserves are backed by actual ledger balances
//
// ============================================================================

use core::cmp::Ordering;

use cpamm_math::cmp_products;
use cpamm_types::PoolState;
use soroban_sdk::Env;

// ============================================================================
// PRODUCT INVARIANTS
// ============================================================================

/// Invariant: the constant product does not decrease
///
/// Property:
///   reserve_in_after * reserve_out_after >= reserve_in_before * reserve_out_before
pub fn product_not_decreased(env: &Env, before: (u128, u128), after: (u128, u128)) -> bool {
    cmp_products(env, after.0, after.1, before.0, before.1) != Ordering::Less
}

/// Invariant: a swap leaves part of the output reserve behind
///
/// Property:
///   amount_out < reserve_out
pub fn output_within_reserve(amount_out: u128, reserve_out: u128) -> bool {
    amount_out < reserve_out
}

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: reserves are (0, 0) iff total_shares == 0, and never one-sided
pub fn empty_reserves_iff_no_shares(state: &PoolState) -> bool {
    let reserves_empty = state.reserve0 == 0 && state.reserve1 == 0;
    let reserves_funded = state.reserve0 > 0 && state.reserve1 > 0;
    if state.total_shares == 0 {
        reserves_empty
    } else {
        reserves_funded
    }
}

/// Invariant: a share balance never exceeds the supply
pub fn share_balance_within_supply(balance: u128, total_shares: u128) -> bool {
    balance <= total_shares
}

// ============================================================================
// CUSTODY INVARIANTS
// ============================================================================

/// Invariant: the pool holds at least what it tracks
///
/// Property:
///   balance0 >= reserve0 && balance1 >= reserve1
///
/// Balances may exceed reserves when someone transfers assets to the pool
/// directly; those donations are never credited to the reserves.
pub fn reserves_backed_by_balances(state: &PoolState, balance0: i128, balance1: i128) -> bool {
    let covers = |balance: i128, reserve: u128| balance >= 0 && balance as u128 >= reserve;
    covers(balance0, state.reserve0) && covers(balance1, state.reserve1)
}

// ============================================================================
// TESTS
// ============================================================================
