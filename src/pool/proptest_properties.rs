//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers five properties:
//!
//! 1. **Constant product** — `reserve_x × reserve_y` never decreases
//!    across a successful swap.
//! 2. **Quote bounds** — a quote is always strictly less than the output
//!    reserve.
//! 3. **Quote monotonicity** — a larger input never yields a smaller
//!    output.
//! 4. **Share value** — minting shares never dilutes existing holders:
//!    reserves-per-share is non-decreasing across a deposit.
//! 5. **Redemption bound** — a withdrawal never pays out more than the
//!    proportional claim of the redeemed shares.

use proptest::prelude::*;

use super::Pool;
use crate::assets::{AssetLedger, MintableAsset};
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Shares, SwapPath};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn issuer() -> AccountId {
    AccountId::from_bytes([9u8; 32])
}

fn depositor() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([2u8; 32])
}

fn pool_acct() -> AccountId {
    AccountId::from_bytes([8u8; 32])
}

fn asset_x_id() -> AssetId {
    AssetId::from_bytes([10u8; 32])
}

fn asset_y_id() -> AssetId {
    AssetId::from_bytes([11u8; 32])
}

/// Pool bootstrapped at (rx, ry) with generously funded accounts.
#[allow(clippy::panic)]
fn funded_pool(rx: u128, ry: u128) -> (Pool, MintableAsset, MintableAsset) {
    let Ok(pair) = AssetPair::new(asset_x_id(), asset_y_id()) else {
        panic!("valid pair");
    };
    let Ok(mut pool) = Pool::new(pair, pool_acct()) else {
        panic!("valid pool");
    };
    let mut x = MintableAsset::new(asset_x_id(), issuer());
    let mut y = MintableAsset::new(asset_y_id(), issuer());
    let funds = Amount::new(u128::MAX / 4);
    for account in [depositor(), trader()] {
        let Ok(()) = x.mint(&issuer(), &account, funds) else {
            panic!("mint X");
        };
        let Ok(()) = y.mint(&issuer(), &account, funds) else {
            panic!("mint Y");
        };
        x.approve(&account, &pool_acct(), funds);
        y.approve(&account, &pool_acct(), funds);
    }
    let Ok(_) = pool.deposit(
        &mut x,
        &mut y,
        &depositor(),
        Amount::new(rx),
        Amount::new(ry),
        Amount::ZERO,
        Amount::ZERO,
        &depositor(),
    ) else {
        panic!("bootstrap deposit");
    };
    (pool, x, y)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Trade sizes up to a reserve's order of magnitude.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=100_000u128
}

// ---------------------------------------------------------------------------
// Property 1: constant product never decreases across a swap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_constant_product_non_decreasing(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in trade_strategy(),
    ) {
        let (mut pool, mut x, mut y) = funded_pool(rx, ry);
        let k_before = rx * ry;

        if pool
            .swap(
                &mut x,
                &mut y,
                &trader(),
                Amount::new(amount_in),
                Amount::ZERO,
                SwapPath::XToY,
                &trader(),
            )
            .is_err()
        {
            return Ok(());
        }

        let k_after = pool.reserve_x().get() * pool.reserve_y().get();
        prop_assert!(
            k_after >= k_before,
            "constant product shrank: {k_after} < {k_before}"
        );
    }

    // -----------------------------------------------------------------------
    // Property 2: a quote never drains the output reserve
    // -----------------------------------------------------------------------

    #[test]
    fn prop_quote_below_output_reserve(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in trade_strategy(),
    ) {
        let Ok(out) = Pool::quote(
            Amount::new(amount_in),
            Amount::new(rx),
            Amount::new(ry),
        ) else {
            return Ok(());
        };
        prop_assert!(out.get() < ry, "quote {out} >= reserve_out {ry}");
    }

    // -----------------------------------------------------------------------
    // Property 3: quote is monotone in the input amount
    // -----------------------------------------------------------------------

    #[test]
    fn prop_quote_monotone_in_input(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        amount_in in trade_strategy(),
        extra in 1u128..=10_000u128,
    ) {
        let small = Pool::quote(Amount::new(amount_in), Amount::new(rx), Amount::new(ry));
        let large = Pool::quote(
            Amount::new(amount_in + extra),
            Amount::new(rx),
            Amount::new(ry),
        );
        let (Ok(small), Ok(large)) = (small, large) else {
            return Ok(());
        };
        prop_assert!(large >= small, "larger input quoted less: {large} < {small}");
    }

    // -----------------------------------------------------------------------
    // Property 4: deposits never dilute existing holders
    // -----------------------------------------------------------------------

    #[test]
    fn prop_deposit_never_dilutes(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        dx in trade_strategy(),
        dy in trade_strategy(),
    ) {
        let (mut pool, mut x, mut y) = funded_pool(rx, ry);
        let reserve_before = pool.reserve_x().get();
        let total_before = pool.total_shares().get();

        if pool
            .deposit(
                &mut x,
                &mut y,
                &trader(),
                Amount::new(dx),
                Amount::new(dy),
                Amount::ZERO,
                Amount::ZERO,
                &trader(),
            )
            .is_err()
        {
            return Ok(());
        }

        // reserves-per-share must not fall:
        // reserve_after / total_after >= reserve_before / total_before
        let lhs = pool.reserve_x().get() * total_before;
        let rhs = reserve_before * pool.total_shares().get();
        prop_assert!(lhs >= rhs, "per-share reserve fell after deposit");
    }

    // -----------------------------------------------------------------------
    // Property 5: redemption is bounded by the proportional claim
    // -----------------------------------------------------------------------

    #[test]
    fn prop_withdraw_bounded_by_claim(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fraction in 1u128..=100u128,
    ) {
        let (mut pool, mut x, mut y) = funded_pool(rx, ry);
        let held = pool.shares_of(&depositor()).get();
        let redeem = (held * fraction / 100).max(1);

        let reserve_x_before = pool.reserve_x().get();
        let reserve_y_before = pool.reserve_y().get();
        let total_before = pool.total_shares().get();
        let x_before = x.balance_of(&depositor()).get();
        let y_before = y.balance_of(&depositor()).get();

        let Ok(outcome) = pool.withdraw(
            &mut x,
            &mut y,
            &depositor(),
            Shares::new(redeem),
            Amount::ZERO,
            Amount::ZERO,
            &depositor(),
        ) else {
            return Ok(());
        };

        prop_assert!(outcome.out_x().get() * total_before <= redeem * reserve_x_before);
        prop_assert!(outcome.out_y().get() * total_before <= redeem * reserve_y_before);
        // The ledgers received exactly what the outcome reports.
        prop_assert_eq!(
            x.balance_of(&depositor()).get(),
            x_before + outcome.out_x().get()
        );
        prop_assert_eq!(
            y.balance_of(&depositor()).get(),
            y_before + outcome.out_y().get()
        );
    }
}
