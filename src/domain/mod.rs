//! Fundamental domain value types used throughout the pool library.
//!
//! This module contains the core value types that model the pool domain:
//! accounts, asset identifiers, amounts, shares, prices, and swap paths.
//! All types use newtypes with validated constructors to enforce invariants.

mod account;
mod amount;
mod asset_id;
mod asset_pair;
mod outcomes;
mod price;
mod shares;
mod swap_path;

pub use account::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use outcomes::{DepositOutcome, SwapOutcome, WithdrawOutcome};
pub use price::Price;
pub use shares::Shares;
pub use swap_path::SwapPath;
