//! Unified error type for the pool library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every variant carries a human-readable reason; every error is
//! detected synchronously and aborts the whole operation with no observable
//! state change.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum for all pool and asset-ledger operations.
///
/// The variants group into four classes:
///
/// - **invalid-argument** — [`InvalidAccount`](Self::InvalidAccount),
///   [`InvalidAsset`](Self::InvalidAsset),
///   [`InvalidQuantity`](Self::InvalidQuantity),
///   [`InvalidPath`](Self::InvalidPath)
/// - **slippage-violation** — [`SlippageExceeded`](Self::SlippageExceeded)
/// - **insufficient-balance** —
///   [`InsufficientShares`](Self::InsufficientShares),
///   [`InsufficientBalance`](Self::InsufficientBalance),
///   [`InsufficientAllowance`](Self::InsufficientAllowance)
/// - **invalid-state** — [`ZeroReserve`](Self::ZeroReserve),
///   [`InsufficientLiquidity`](Self::InsufficientLiquidity)
///
/// plus arithmetic failures ([`Overflow`](Self::Overflow),
/// [`DivisionByZero`](Self::DivisionByZero)) and the issuance gate
/// ([`Unauthorized`](Self::Unauthorized)).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A null or otherwise unusable account identity was supplied.
    #[error("invalid account: {0}")]
    InvalidAccount(&'static str),

    /// An asset identifier does not satisfy the pool's configuration rules.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A quantity argument is out of range for the operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// The supplied swap path is not the pool's single supported path.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// A computed amount fell outside a caller-supplied slippage bound.
    #[error("slippage bound violated: {0}")]
    SlippageExceeded(&'static str),

    /// The caller holds fewer shares than the operation requires.
    #[error("insufficient shares for withdrawal")]
    InsufficientShares,

    /// An asset ledger balance cannot cover a transfer.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),

    /// The spender's allowance cannot cover a `transfer_from`.
    #[error("insufficient allowance for transfer")]
    InsufficientAllowance,

    /// Reserves cannot support the requested trade or mint.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// An operation that requires a funded pool hit a zero reserve.
    #[error("operation requires non-zero reserves")]
    ZeroReserve,

    /// The caller is not permitted to perform the operation.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Arithmetic overflow or underflow during a calculation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero during a calculation.
    #[error("division by zero")]
    DivisionByZero,
}
