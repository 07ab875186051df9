//! The asset-ledger collaborator seam.
//!
//! The pool never owns asset balances directly; it moves value through two
//! external ledgers implementing [`AssetLedger`]. The trait is the minimal
//! value-transfer capability the pool consumes — balances, direct
//! transfers, and allowance-gated pulls. [`MintableAsset`] is the bundled
//! in-memory implementation.
//!
//! Any `Err` from a ledger method is treated by the pool identically to a
//! rejected transfer: the whole pool operation aborts with no state change.

mod mintable;

pub use mintable::MintableAsset;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;

/// Minimal fungible-asset ledger consumed by the pool.
///
/// There is no ambient "caller" in this execution model, so the custody
/// account a transfer debits is always an explicit argument.
pub trait AssetLedger {
    /// Returns the identifier of the asset this ledger tracks.
    fn asset_id(&self) -> AssetId;

    /// Returns the balance held by `account`. Unknown accounts hold zero.
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Moves `amount` from `from`'s custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientBalance`](crate::error::PoolError::InsufficientBalance)
    /// if `from` cannot cover the amount.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> Result<()>;

    /// Moves `amount` from `from`'s custody to `to` on behalf of
    /// `spender`, consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`PoolError::InsufficientAllowance`](crate::error::PoolError::InsufficientAllowance)
    /// if the allowance cannot cover the amount, or
    /// [`PoolError::InsufficientBalance`](crate::error::PoolError::InsufficientBalance)
    /// if the balance cannot.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<()>;
}
