use soroban_sdk::contracterror;

/// Failures surfaced by the pool and its math helpers.
///
/// Every failure rolls back the whole invocation; no partial update persists.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// `initialize` was already called
    AlreadyInitialized = 1,
    /// Pool has no configuration yet
    NotInitialized = 2,
    /// Both sides of the pair are the same asset
    IdenticalAssets = 3,
    /// Zero amount, dust swap, or a deposit that mints no shares
    InsufficientInputAmount = 4,
    /// Not enough shares held, or nothing in the pool to price against
    InsufficientLiquidity = 5,
    /// Redemption would pay out nothing on one side
    InsufficientOutputAmount = 6,
    /// Swap input is not one of the pool's assets
    InvalidAsset = 7,
    /// Deposit ratio does not match the reserve ratio
    UnbalancedDeposit = 8,
    /// Asset ledger rejected a pull-in or push-out
    TransferFailed = 9,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 10,
    /// Zero denominator
    DivisionByZero = 11,
    /// A runtime invariant check failed
    InvariantViolation = 12,
}
