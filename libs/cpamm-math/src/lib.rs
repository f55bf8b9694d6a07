#![no_std]

//! Integer math for the constant-product pool.
//!
//! All divisions truncate toward zero. Truncation always favors the pool: swap
//! outputs and redemptions round down, minted shares round down. That rounding is
//! the pool's only built-in surplus.

pub mod full_math;
pub mod liquidity_math;
pub mod sqrt_math;
pub mod swap_math;

pub use full_math::*;
pub use liquidity_math::*;
pub use sqrt_math::*;
pub use swap_math::*;
