//! In-memory mint-on-demand asset ledger.

use std::collections::HashMap;

use super::AssetLedger;
use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{PoolError, Result};

/// A fungible asset with mint-on-demand balances and owner-gated issuance.
///
/// Balances and allowances live in plain maps; absent entries read as
/// zero. Only the owner fixed at construction may mint. Ownership
/// administration (transferring the owner role, burning, freezing) is out
/// of scope.
///
/// # Examples
///
/// ```
/// use pairpool::assets::{AssetLedger, MintableAsset};
/// use pairpool::domain::{AccountId, Amount, AssetId};
///
/// let owner = AccountId::from_bytes([9u8; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let mut gold = MintableAsset::new(AssetId::from_bytes([10u8; 32]), owner);
///
/// gold.mint(&owner, &alice, Amount::new(1_000)).expect("owner mints");
/// assert_eq!(gold.balance_of(&alice), Amount::new(1_000));
/// ```
#[derive(Debug, Clone)]
pub struct MintableAsset {
    id: AssetId,
    owner: AccountId,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
}

impl MintableAsset {
    /// Creates an empty ledger for `id` with issuance gated on `owner`.
    #[must_use]
    pub fn new(id: AssetId, owner: AccountId) -> Self {
        Self {
            id,
            owner,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Returns the account allowed to mint.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Issues `amount` new units to `to`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` is not the owner.
    /// - [`PoolError::Overflow`] if `to`'s balance would overflow.
    pub fn mint(&mut self, caller: &AccountId, to: &AccountId, amount: Amount) -> Result<()> {
        if *caller != self.owner {
            return Err(PoolError::Unauthorized("only the owner may mint"));
        }
        let balance = self.balances.entry(*to).or_insert(Amount::ZERO);
        *balance = balance
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("mint balance overflow"))?;
        Ok(())
    }

    /// Grants `spender` the right to move up to `amount` out of `owner`'s
    /// custody. Replaces any previous allowance.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        self.allowances.insert((*owner, *spender), amount);
    }

    /// Returns the remaining allowance from `owner` to `spender`.
    #[must_use]
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Validates both sides of a balance move, then commits. Nothing is
    /// written unless both the debit and the credit are representable.
    fn move_balance(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> Result<()> {
        let from_new = self.balance_of(from).checked_sub(&amount).ok_or(
            PoolError::InsufficientBalance("transfer exceeds sender balance"),
        )?;
        if from == to {
            return Ok(());
        }
        let to_new = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("transfer balance overflow"))?;
        self.balances.insert(*from, from_new);
        self.balances.insert(*to, to_new);
        Ok(())
    }
}

impl AssetLedger for MintableAsset {
    fn asset_id(&self) -> AssetId {
        self.id
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(&mut self, from: &AccountId, to: &AccountId, amount: Amount) -> Result<()> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<()> {
        let key = (*from, *spender);
        let allowance = self
            .allowances
            .get(&key)
            .copied()
            .unwrap_or(Amount::ZERO);
        let remaining = allowance
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientAllowance)?;
        // Allowance is consumed only if the balance move succeeds.
        self.move_balance(from, to, amount)?;
        self.allowances.insert(key, remaining);
        Ok(())
    }
}
