//! # pairpool
//!
//! Minimal two-asset constant-product liquidity pool with proportional
//! share accounting.
//!
//! A [`Pool`](pool::Pool) custodies reserves of two distinct assets and
//! issues liquidity shares against them. Depositors contribute both assets
//! at the current reserve ratio and receive shares; traders swap asset X
//! for asset Y at the fee-less constant-product price; share holders redeem
//! for a proportional slice of both reserves. Asset balances themselves
//! live outside the pool, behind the [`AssetLedger`](assets::AssetLedger)
//! trait.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pairpool = "0.1"
//! ```
//!
//! ## Fund a pool, trade against it, exit
//!
//! ```rust
//! use pairpool::assets::{AssetLedger, MintableAsset};
//! use pairpool::domain::{AccountId, Amount, AssetId, AssetPair, Shares, SwapPath};
//! use pairpool::pool::Pool;
//!
//! // 1. Identities: an asset issuer, a liquidity provider, a trader, and
//! //    the pool's own custody account.
//! let issuer = AccountId::from_bytes([9u8; 32]);
//! let alice = AccountId::from_bytes([1u8; 32]);
//! let bob = AccountId::from_bytes([2u8; 32]);
//! let pool_acct = AccountId::from_bytes([8u8; 32]);
//!
//! // 2. Two asset ledgers with mint-on-demand issuance.
//! let gold_id = AssetId::from_bytes([10u8; 32]);
//! let silver_id = AssetId::from_bytes([11u8; 32]);
//! let mut gold = MintableAsset::new(gold_id, issuer);
//! let mut silver = MintableAsset::new(silver_id, issuer);
//! gold.mint(&issuer, &alice, Amount::new(10_000)).expect("mint");
//! silver.mint(&issuer, &alice, Amount::new(10_000)).expect("mint");
//! gold.mint(&issuer, &bob, Amount::new(1_000)).expect("mint");
//!
//! // 3. Everyone authorizes the pool to pull deposits.
//! gold.approve(&alice, &pool_acct, Amount::new(10_000));
//! silver.approve(&alice, &pool_acct, Amount::new(10_000));
//! gold.approve(&bob, &pool_acct, Amount::new(1_000));
//!
//! // 4. Bootstrap the pool.
//! let pair = AssetPair::new(gold_id, silver_id).expect("distinct assets");
//! let mut pool = Pool::new(pair, pool_acct).expect("valid custody account");
//! let deposit = pool
//!     .deposit(
//!         &mut gold,
//!         &mut silver,
//!         &alice,
//!         Amount::new(1_000),
//!         Amount::new(1_000),
//!         Amount::ZERO,
//!         Amount::ZERO,
//!         &alice,
//!     )
//!     .expect("bootstrap");
//! assert_eq!(deposit.shares_issued(), Shares::new(1_000));
//!
//! // 5. Bob trades 100 gold for silver with a slippage bound.
//! let swap = pool
//!     .swap(
//!         &mut gold,
//!         &mut silver,
//!         &bob,
//!         Amount::new(100),
//!         Amount::new(90),
//!         SwapPath::XToY,
//!         &bob,
//!     )
//!     .expect("swap within bound");
//! assert_eq!(swap.amount_out(), Amount::new(90));
//!
//! // 6. Alice exits completely; the pool is empty again.
//! pool.withdraw(
//!     &mut gold,
//!     &mut silver,
//!     &alice,
//!     Shares::new(1_000),
//!     Amount::ZERO,
//!     Amount::ZERO,
//!     &alice,
//! )
//! .expect("full exit");
//! assert!(pool.is_empty());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  holds the Pool and both ledgers
//! └──────┬──────┘
//!        │ deposit / withdraw / swap / quote / price
//!        ▼
//! ┌─────────────┐
//! │     Pool     │  reserves, share ledger, event log, atomicity
//! └──────┬──────┘
//!        │ transfer / transfer_from
//!        ▼
//! ┌─────────────┐
//! │ AssetLedger  │  external balances, allowances (MintableAsset)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Amount, Shares, AccountId, AssetPair, Price, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`Price`](domain::Price), etc. |
//! | [`assets`] | The [`AssetLedger`](assets::AssetLedger) seam and the bundled [`MintableAsset`](assets::MintableAsset) |
//! | [`pool`] | The [`Pool`](pool::Pool) state machine and its [`PoolEvent`](pool::PoolEvent) log |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod assets;
pub mod domain;
pub mod error;
pub mod pool;
pub mod prelude;
