//! Result records returned by the pool's state-changing operations.

use super::{Amount, Shares};
use crate::error::PoolError;

/// Outcome of a successful deposit: the amounts actually taken after
/// ratio-matching, and the shares issued for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositOutcome {
    used_x: Amount,
    used_y: Amount,
    shares_issued: Shares,
}

impl DepositOutcome {
    /// Creates a new `DepositOutcome`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidQuantity`] if any component is zero —
    /// a successful deposit always moves both assets and mints shares.
    pub const fn new(
        used_x: Amount,
        used_y: Amount,
        shares_issued: Shares,
    ) -> crate::error::Result<Self> {
        if used_x.is_zero() || used_y.is_zero() {
            return Err(PoolError::InvalidQuantity(
                "deposit must take a positive amount of both assets",
            ));
        }
        if shares_issued.is_zero() {
            return Err(PoolError::InvalidQuantity(
                "deposit too small to mint shares",
            ));
        }
        Ok(Self {
            used_x,
            used_y,
            shares_issued,
        })
    }

    /// Amount of asset X taken from the depositor.
    #[must_use]
    pub const fn used_x(&self) -> Amount {
        self.used_x
    }

    /// Amount of asset Y taken from the depositor.
    #[must_use]
    pub const fn used_y(&self) -> Amount {
        self.used_y
    }

    /// Shares credited to the recipient.
    #[must_use]
    pub const fn shares_issued(&self) -> Shares {
        self.shares_issued
    }
}

/// Outcome of a successful withdrawal: the proportional payout of both
/// reserves. Either side may floor to zero for dust-sized share counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawOutcome {
    out_x: Amount,
    out_y: Amount,
}

impl WithdrawOutcome {
    /// Creates a new `WithdrawOutcome`.
    #[must_use]
    pub const fn new(out_x: Amount, out_y: Amount) -> Self {
        Self { out_x, out_y }
    }

    /// Amount of asset X paid out.
    #[must_use]
    pub const fn out_x(&self) -> Amount {
        self.out_x
    }

    /// Amount of asset Y paid out.
    #[must_use]
    pub const fn out_y(&self) -> Amount {
        self.out_y
    }
}

/// Outcome of a successful swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidQuantity`] if either amount is zero —
    /// the pool rejects no-op trades outright.
    pub const fn new(amount_in: Amount, amount_out: Amount) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidQuantity("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(PoolError::InvalidQuantity("amount_out must be positive"));
        }
        Ok(Self {
            amount_in,
            amount_out,
        })
    }

    /// Amount of asset X taken from the trader.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount of asset Y paid to the recipient.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}
