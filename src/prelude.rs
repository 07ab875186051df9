//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositOutcome, Price, Shares, SwapOutcome, SwapPath,
    WithdrawOutcome,
};

// Re-export the ledger seam and its bundled implementation
pub use crate::assets::{AssetLedger, MintableAsset};

// Re-export the pool and its event log
pub use crate::pool::{Pool, PoolEvent};

// Re-export error types
pub use crate::error::{PoolError, Result};
