use soroban_sdk::{contracttype, Address};

/// Current pool state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Tracked balance of token0
    pub reserve0: u128,
    /// Tracked balance of token1
    pub reserve1: u128,
    /// Sum of all liquidity share balances
    pub total_shares: u128,
}

impl PoolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves ordered as (input side, output side)
    pub fn reserves_for(&self, zero_for_one: bool) -> (u128, u128) {
        if zero_for_one {
            (self.reserve0, self.reserve1)
        } else {
            (self.reserve1, self.reserve0)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }
}

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// First asset of the pair
    pub token0: Address,
    /// Second asset of the pair
    pub token1: Address,
}

impl PoolConfig {
    /// Direction of a swap paying in `token_in`: `Some(true)` for token0 in,
    /// `Some(false)` for token1 in, `None` if the asset is foreign to the pool.
    pub fn direction_for(&self, token_in: &Address) -> Option<bool> {
        if *token_in == self.token0 {
            Some(true)
        } else if *token_in == self.token1 {
            Some(false)
        } else {
            None
        }
    }

    /// (input asset, output asset) for a swap direction
    pub fn assets_for(&self, zero_for_one: bool) -> (&Address, &Address) {
        if zero_for_one {
            (&self.token0, &self.token1)
        } else {
            (&self.token1, &self.token0)
        }
    }
}

// ============================================================================
// SWAP COMPUTATION TYPES
// These types separate pure computation from side effects
// ============================================================================

/// Result of pricing a swap against the current reserves
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    /// Amount of the output asset paid to the trader
    pub amount_out: u128,
    /// Input-side reserve after the swap
    pub reserve_in_after: u128,
    /// Output-side reserve after the swap
    pub reserve_out_after: u128,
}
