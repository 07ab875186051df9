//! The two-asset liquidity pool state machine.
//!
//! A [`Pool`] is a single ledger holding two reserve balances and a set of
//! proportional ownership claims (liquidity shares). It exposes four
//! operations — deposit, withdraw, swap, and the pure [`Pool::quote`] —
//! plus the read-only [`Pool::price`] and accessors.
//!
//! # Pricing
//!
//! Swaps follow the fee-less constant-product formula:
//!
//! ```text
//! amount_out = amount_in × reserve_out / (reserve_in + amount_in)   (floor)
//! ```
//!
//! After every swap `reserve_x × reserve_y` is non-decreasing; equality
//! would require a zero-amount trade, which is rejected.
//!
//! # State machine
//!
//! The pool is **empty** while `total_shares == 0` and **funded**
//! otherwise. Deposit is the only empty→funded transition; withdrawing the
//! final outstanding share is the only funded→empty one. Swap and price
//! queries require the funded state.
//!
//! # Atomicity & concurrency
//!
//! Every state-changing operation either fully completes or fully aborts:
//! all quantities are computed and validated before anything moves, inbound
//! transfers happen before reserve updates, reserve updates happen before
//! outbound transfers, and a failed second transfer leg is unwound with a
//! compensating transfer. Operations take `&mut self` together with `&mut`
//! ledgers, so Rust's exclusive borrows serialize callers; share a pool
//! across threads by wrapping it and its ledgers in a `Mutex`.

mod events;
#[cfg(test)]
mod proptest_properties;

pub use events::PoolEvent;

use std::collections::HashMap;

use tracing::debug;

use crate::assets::AssetLedger;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositOutcome, Price, Shares, SwapOutcome, SwapPath,
    WithdrawOutcome,
};
use crate::error::{PoolError, Result};

/// A minimal two-asset liquidity pool with proportional share accounting.
///
/// # Examples
///
/// ```
/// use pairpool::assets::{AssetLedger, MintableAsset};
/// use pairpool::domain::{AccountId, Amount, AssetId, AssetPair, SwapPath};
/// use pairpool::pool::Pool;
///
/// let issuer = AccountId::from_bytes([9u8; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let pool_acct = AccountId::from_bytes([8u8; 32]);
///
/// let gold_id = AssetId::from_bytes([10u8; 32]);
/// let silver_id = AssetId::from_bytes([11u8; 32]);
/// let mut gold = MintableAsset::new(gold_id, issuer);
/// let mut silver = MintableAsset::new(silver_id, issuer);
/// gold.mint(&issuer, &alice, Amount::new(10_000)).expect("mint");
/// silver.mint(&issuer, &alice, Amount::new(10_000)).expect("mint");
/// gold.approve(&alice, &pool_acct, Amount::new(10_000));
/// silver.approve(&alice, &pool_acct, Amount::new(10_000));
///
/// let pair = AssetPair::new(gold_id, silver_id).expect("distinct assets");
/// let mut pool = Pool::new(pair, pool_acct).expect("valid custody account");
///
/// let outcome = pool
///     .deposit(
///         &mut gold,
///         &mut silver,
///         &alice,
///         Amount::new(1_000),
///         Amount::new(2_000),
///         Amount::ZERO,
///         Amount::ZERO,
///         &alice,
///     )
///     .expect("bootstrap deposit");
/// assert_eq!(outcome.shares_issued().get(), 1_000);
///
/// let swap = pool
///     .swap(
///         &mut gold,
///         &mut silver,
///         &alice,
///         Amount::new(100),
///         Amount::ZERO,
///         SwapPath::XToY,
///         &alice,
///     )
///     .expect("swap");
/// assert!(swap.amount_out().get() > 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pair: AssetPair,
    account: AccountId,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
    share_ledger: HashMap<AccountId, Shares>,
    events: Vec<PoolEvent>,
}

impl Pool {
    /// Creates an empty pool for `pair` with `account` as its custody
    /// identity on both asset ledgers.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAccount`] if `account` is null. (The
    /// pair's own invariants are enforced at [`AssetPair`] construction.)
    pub fn new(pair: AssetPair, account: AccountId) -> Result<Self> {
        if account.is_null() {
            return Err(PoolError::InvalidAccount(
                "pool custody account must not be null",
            ));
        }
        Ok(Self {
            pair,
            account,
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            total_shares: Shares::ZERO,
            share_ledger: HashMap::new(),
            events: Vec::new(),
        })
    }

    // -- read-only surface ----------------------------------------------------

    /// Returns the pool's asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the pool's custody account identity.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the current reserve of asset X.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the current reserve of asset Y.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the total outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the shares held by `account`. Unknown and fully withdrawn
    /// depositors both read as zero.
    #[must_use]
    pub fn shares_of(&self, account: &AccountId) -> Shares {
        self.share_ledger
            .get(account)
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// Returns `true` while no shares are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns the events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains and returns the event log.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns the spot price of asset X in asset Y.
    ///
    /// The supplied pair must match the pool's configured pair exactly and
    /// in order; the price is `reserve_y * SCALE / reserve_x` with 18
    /// fixed-point decimals.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if `(asset_a, asset_b)` is not exactly
    ///   `(asset_x, asset_y)`.
    /// - [`PoolError::ZeroReserve`] if the pool is not funded.
    pub fn price(&self, asset_a: &AssetId, asset_b: &AssetId) -> Result<Price> {
        if !self.pair.matches(asset_a, asset_b) {
            return Err(PoolError::InvalidAsset(
                "price pair must match the pool pair in order",
            ));
        }
        Price::from_reserves(self.reserve_y, self.reserve_x)
    }

    /// Computes the constant-product output for `amount_in` against the
    /// given reserves. Pure; reads and writes no pool state.
    ///
    /// Formula: `amount_out = amount_in × reserve_out / (reserve_in +
    /// amount_in)`, floored.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`PoolError::ZeroReserve`] if either reserve is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the output floors to
    ///   zero — a vanishingly small input against deep reserves is
    ///   rejected, never accepted as a free trade.
    /// - [`PoolError::Overflow`] if intermediate arithmetic overflows.
    pub fn quote(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidQuantity("amount_in must be positive"));
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::ZeroReserve);
        }
        let denominator = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("quote denominator overflow"))?;
        let amount_out = amount_in
            .mul_div_floor(&reserve_out, &denominator)
            .ok_or(PoolError::Overflow("quote numerator overflow"))?;
        if amount_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        Ok(amount_out)
    }

    // -- state-changing operations --------------------------------------------

    /// Deposits up to `desired_x`/`desired_y` of the two assets and issues
    /// shares to `recipient`.
    ///
    /// On the first deposit both desired amounts are taken in full and
    /// `shares_issued == used_x` (the bootstrap defines the initial
    /// share-to-asset-X ratio as 1:1). On a funded pool the contribution is
    /// ratio-matched to the current reserves so a depositor cannot move the
    /// price, and shares are minted proportionally:
    /// `shares = used_x × total_shares / reserve_x` (floor).
    ///
    /// `min_x`/`min_y` bound the ratio-adjustment: if the matched amount on
    /// either side falls below its minimum the deposit aborts.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if a ledger does not match the pool
    ///   pair.
    /// - [`PoolError::InvalidAccount`] if `caller` or `recipient` is null.
    /// - [`PoolError::InvalidQuantity`] for zero desired amounts on the
    ///   first deposit, desired amounts below their own minimums, or a
    ///   contribution too small to mint a share.
    /// - [`PoolError::SlippageExceeded`] if ratio-matching violates
    ///   `min_x`/`min_y`.
    /// - Any ledger error from the inbound transfers; the first leg is
    ///   refunded if the second fails.
    #[allow(clippy::too_many_arguments)]
    pub fn deposit<X, Y>(
        &mut self,
        asset_x: &mut X,
        asset_y: &mut Y,
        caller: &AccountId,
        desired_x: Amount,
        desired_y: Amount,
        min_x: Amount,
        min_y: Amount,
        recipient: &AccountId,
    ) -> Result<DepositOutcome>
    where
        X: AssetLedger,
        Y: AssetLedger,
    {
        self.check_ledgers(asset_x, asset_y)?;
        check_identity(caller, "caller must not be null")?;
        check_identity(recipient, "recipient must not be null")?;
        if desired_x < min_x || desired_y < min_y {
            return Err(PoolError::InvalidQuantity(
                "desired amount below its own minimum",
            ));
        }

        let (used_x, used_y) = if self.is_empty() {
            if desired_x.is_zero() || desired_y.is_zero() {
                return Err(PoolError::InvalidQuantity(
                    "first deposit requires both assets",
                ));
            }
            (desired_x, desired_y)
        } else {
            // Match the caller's contribution to the current reserve ratio.
            let optimal_y = desired_x
                .mul_div_floor(&self.reserve_y, &self.reserve_x)
                .ok_or(PoolError::Overflow("optimal Y numerator overflow"))?;
            if optimal_y <= desired_y {
                if optimal_y < min_y {
                    return Err(PoolError::SlippageExceeded(
                        "ratio-matched asset Y amount below minimum",
                    ));
                }
                (desired_x, optimal_y)
            } else {
                let optimal_x = desired_y
                    .mul_div_floor(&self.reserve_x, &self.reserve_y)
                    .ok_or(PoolError::Overflow("optimal X numerator overflow"))?;
                if optimal_x < min_x {
                    return Err(PoolError::SlippageExceeded(
                        "ratio-matched asset X amount below minimum",
                    ));
                }
                (optimal_x, desired_y)
            }
        };

        let shares_issued = if self.is_empty() {
            Shares::new(used_x.get())
        } else {
            let minted = used_x
                .mul_div_floor(&Amount::new(self.total_shares.get()), &self.reserve_x)
                .ok_or(PoolError::Overflow("share mint numerator overflow"))?;
            Shares::new(minted.get())
        };

        let outcome = DepositOutcome::new(used_x, used_y, shares_issued)?;

        // All post-transfer state is computed up front so the commit below
        // cannot fail after custody has moved.
        let new_reserve_x = self
            .reserve_x
            .checked_add(&used_x)
            .ok_or(PoolError::Overflow("reserve X overflow on deposit"))?;
        let new_reserve_y = self
            .reserve_y
            .checked_add(&used_y)
            .ok_or(PoolError::Overflow("reserve Y overflow on deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(&shares_issued)
            .ok_or(PoolError::Overflow("total shares overflow on deposit"))?;
        let new_recipient_shares = self
            .shares_of(recipient)
            .checked_add(&shares_issued)
            .ok_or(PoolError::Overflow("recipient shares overflow"))?;

        asset_x.transfer_from(&self.account, caller, &self.account, used_x)?;
        if let Err(e) = asset_y.transfer_from(&self.account, caller, &self.account, used_y) {
            // Unwind the X leg so the caller never loses custody on abort.
            asset_x.transfer(&self.account, caller, used_x)?;
            return Err(e);
        }

        self.reserve_x = new_reserve_x;
        self.reserve_y = new_reserve_y;
        self.total_shares = new_total;
        self.share_ledger.insert(*recipient, new_recipient_shares);
        self.events.push(PoolEvent::Deposited {
            recipient: *recipient,
            used_x,
            used_y,
            shares_issued,
        });
        debug!(
            %recipient,
            used_x = used_x.get(),
            used_y = used_y.get(),
            shares_issued = shares_issued.get(),
            "deposit accepted"
        );
        Ok(outcome)
    }

    /// Redeems `shares` of the caller's holdings for a proportional payout
    /// of both reserves, paid to `recipient`.
    ///
    /// Payouts floor: `out_x = shares × reserve_x / total_shares` and
    /// likewise for Y — rounding always favours the pool. Withdrawing the
    /// final outstanding share returns the pool to the empty state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if a ledger does not match the pool
    ///   pair.
    /// - [`PoolError::InvalidAccount`] if `caller` or `recipient` is null.
    /// - [`PoolError::InvalidQuantity`] if `shares` is zero.
    /// - [`PoolError::InsufficientShares`] if the caller holds fewer shares
    ///   than requested.
    /// - [`PoolError::SlippageExceeded`] if a payout falls below its
    ///   minimum.
    /// - Any ledger error from the outbound transfers; state is rolled back
    ///   and a paid first leg pulled back if the second fails.
    #[allow(clippy::too_many_arguments)]
    pub fn withdraw<X, Y>(
        &mut self,
        asset_x: &mut X,
        asset_y: &mut Y,
        caller: &AccountId,
        shares: Shares,
        min_x: Amount,
        min_y: Amount,
        recipient: &AccountId,
    ) -> Result<WithdrawOutcome>
    where
        X: AssetLedger,
        Y: AssetLedger,
    {
        self.check_ledgers(asset_x, asset_y)?;
        check_identity(caller, "caller must not be null")?;
        check_identity(recipient, "recipient must not be null")?;
        if shares.is_zero() {
            return Err(PoolError::InvalidQuantity(
                "must redeem a positive number of shares",
            ));
        }
        let held = self.shares_of(caller);
        if shares > held {
            return Err(PoolError::InsufficientShares);
        }

        let total = Amount::new(self.total_shares.get());
        let share_amount = Amount::new(shares.get());
        let out_x = share_amount
            .mul_div_floor(&self.reserve_x, &total)
            .ok_or(PoolError::Overflow("payout X numerator overflow"))?;
        let out_y = share_amount
            .mul_div_floor(&self.reserve_y, &total)
            .ok_or(PoolError::Overflow("payout Y numerator overflow"))?;
        if out_x < min_x {
            return Err(PoolError::SlippageExceeded("asset X payout below minimum"));
        }
        if out_y < min_y {
            return Err(PoolError::SlippageExceeded("asset Y payout below minimum"));
        }

        // shares ≤ total guarantees out ≤ reserve, so these cannot fail.
        let new_reserve_x = self
            .reserve_x
            .checked_sub(&out_x)
            .ok_or(PoolError::Overflow("reserve X underflow on withdraw"))?;
        let new_reserve_y = self
            .reserve_y
            .checked_sub(&out_y)
            .ok_or(PoolError::Overflow("reserve Y underflow on withdraw"))?;
        let new_total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("total shares underflow on withdraw"))?;
        let new_held = held
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("caller shares underflow"))?;

        // Effects before external calls: debit the ledger state, then pay.
        let snapshot = (self.reserve_x, self.reserve_y, self.total_shares, held);
        self.reserve_x = new_reserve_x;
        self.reserve_y = new_reserve_y;
        self.total_shares = new_total;
        self.share_ledger.insert(*caller, new_held);

        if let Err(e) = asset_x.transfer(&self.account, recipient, out_x) {
            self.restore(snapshot, caller);
            return Err(e);
        }
        if let Err(e) = asset_y.transfer(&self.account, recipient, out_y) {
            asset_x.transfer(recipient, &self.account, out_x)?;
            self.restore(snapshot, caller);
            return Err(e);
        }

        self.events.push(PoolEvent::Withdrawn {
            recipient: *recipient,
            out_x,
            out_y,
        });
        debug!(
            %recipient,
            out_x = out_x.get(),
            out_y = out_y.get(),
            shares = shares.get(),
            "withdrawal accepted"
        );
        Ok(WithdrawOutcome::new(out_x, out_y))
    }

    /// Trades `amount_in` of asset X for asset Y along `path`, paying the
    /// output to `recipient`.
    ///
    /// The output is priced by [`Pool::quote`] against the current
    /// reserves; the full constant-product amount is credited, with no fee
    /// retained. `min_amount_out` is the caller's slippage bound.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if a ledger does not match the pool
    ///   pair.
    /// - [`PoolError::InvalidAccount`] if `caller` or `recipient` is null.
    /// - Any [`Pool::quote`] error (zero input, unfunded pool, zero
    ///   output).
    /// - [`PoolError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - Any ledger error; a pulled input is refunded if the payout fails.
    #[allow(clippy::too_many_arguments)]
    pub fn swap<X, Y>(
        &mut self,
        asset_x: &mut X,
        asset_y: &mut Y,
        caller: &AccountId,
        amount_in: Amount,
        min_amount_out: Amount,
        path: SwapPath,
        recipient: &AccountId,
    ) -> Result<SwapOutcome>
    where
        X: AssetLedger,
        Y: AssetLedger,
    {
        self.check_ledgers(asset_x, asset_y)?;
        check_identity(caller, "caller must not be null")?;
        check_identity(recipient, "recipient must not be null")?;
        // The single supported direction is a type-level guarantee.
        let SwapPath::XToY = path;

        let amount_out = Self::quote(amount_in, self.reserve_x, self.reserve_y)?;
        if amount_out < min_amount_out {
            return Err(PoolError::SlippageExceeded("swap output below minimum"));
        }
        let outcome = SwapOutcome::new(amount_in, amount_out)?;

        let new_reserve_x = self
            .reserve_x
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("reserve X overflow on swap"))?;
        // quote flooring guarantees amount_out < reserve_y.
        let new_reserve_y = self
            .reserve_y
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve Y underflow on swap"))?;

        asset_x.transfer_from(&self.account, caller, &self.account, amount_in)?;

        let snapshot = (self.reserve_x, self.reserve_y);
        self.reserve_x = new_reserve_x;
        self.reserve_y = new_reserve_y;

        if let Err(e) = asset_y.transfer(&self.account, recipient, amount_out) {
            self.reserve_x = snapshot.0;
            self.reserve_y = snapshot.1;
            asset_x.transfer(&self.account, caller, amount_in)?;
            return Err(e);
        }

        self.events.push(PoolEvent::Swapped {
            caller: *caller,
            amount_in,
            amount_out,
        });
        debug!(
            %caller,
            amount_in = amount_in.get(),
            amount_out = amount_out.get(),
            "swap executed"
        );
        Ok(outcome)
    }

    // -- internals ------------------------------------------------------------

    fn check_ledgers<X, Y>(&self, asset_x: &X, asset_y: &Y) -> Result<()>
    where
        X: AssetLedger,
        Y: AssetLedger,
    {
        if asset_x.asset_id() != self.pair.asset_x() {
            return Err(PoolError::InvalidAsset(
                "asset X ledger does not match the pool pair",
            ));
        }
        if asset_y.asset_id() != self.pair.asset_y() {
            return Err(PoolError::InvalidAsset(
                "asset Y ledger does not match the pool pair",
            ));
        }
        Ok(())
    }

    fn restore(&mut self, snapshot: (Amount, Amount, Shares, Shares), caller: &AccountId) {
        self.reserve_x = snapshot.0;
        self.reserve_y = snapshot.1;
        self.total_shares = snapshot.2;
        self.share_ledger.insert(*caller, snapshot.3);
    }
}

fn check_identity(account: &AccountId, reason: &'static str) -> Result<()> {
    if account.is_null() {
        return Err(PoolError::InvalidAccount(reason));
    }
    Ok(())
}
