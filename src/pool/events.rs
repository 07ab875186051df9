//! Observable side effects of successful pool operations.

use crate::domain::{AccountId, Amount, Shares};

/// A record appended to the pool's event log, exactly once per successful
/// state-changing operation and never on an aborted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// Liquidity was contributed and shares issued.
    Deposited {
        /// Identity credited with the shares.
        recipient: AccountId,
        /// Asset X actually taken after ratio-matching.
        used_x: Amount,
        /// Asset Y actually taken after ratio-matching.
        used_y: Amount,
        /// Shares minted to `recipient`.
        shares_issued: Shares,
    },
    /// Shares were redeemed for a proportional payout.
    Withdrawn {
        /// Identity the assets were paid to.
        recipient: AccountId,
        /// Asset X paid out.
        out_x: Amount,
        /// Asset Y paid out.
        out_y: Amount,
    },
    /// Asset X was traded for asset Y.
    Swapped {
        /// Identity that supplied the input.
        caller: AccountId,
        /// Asset X taken in.
        amount_in: Amount,
        /// Asset Y paid out.
        amount_out: Amount,
    },
}
