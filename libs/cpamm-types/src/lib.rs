#![no_std]

mod error;
mod pool;

pub use error::*;
pub use pool::*;

/// Largest amount a SEP-41 token call accepts (token amounts are `i128`)
pub const MAX_TOKEN_AMOUNT: u128 = i128::MAX as u128;

/// Convert a pool amount into a token-interface amount
pub fn to_token_amount(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::ArithmeticOverflow)
}
