use cpamm_types::{to_token_amount, PoolError};
use soroban_sdk::{token, Address, Env};

/// Narrow view of one asset's token contract, as seen by the pool
///
/// Ledger failures come back as `TransferFailed` rather than trapping, so the
/// pool can report them as a typed error. The host still rolls back the whole
/// invocation once that error is returned.
pub struct AssetLedger<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> AssetLedger<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        Self {
            env,
            client: token::Client::new(env, asset),
        }
    }

    /// Pull `amount` from `from` into pool custody using the allowance `from`
    /// granted to the pool
    pub fn transfer_in(&self, from: &Address, amount: u128) -> Result<(), PoolError> {
        let amount = to_token_amount(amount)?;
        let pool = self.env.current_contract_address();

        match self.client.try_transfer_from(&pool, from, &pool, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(PoolError::TransferFailed),
        }
    }

    /// Push `amount` from pool custody to `to`
    pub fn transfer_out(&self, to: &Address, amount: u128) -> Result<(), PoolError> {
        let amount = to_token_amount(amount)?;
        let pool = self.env.current_contract_address();

        match self.client.try_transfer(&pool, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(PoolError::TransferFailed),
        }
    }

    pub fn balance_of(&self, owner: &Address) -> i128 {
        self.client.balance(owner)
    }
}
