//! The pool's fixed, ordered pair of asset types.

use super::AssetId;
use crate::error::PoolError;

/// An ordered pair of distinct asset identifiers.
///
/// Unlike a canonically sorted pair, the X/Y ordering here is semantic and
/// fixed at construction: X is the input side of the pool's single trading
/// direction and the denominator of its spot price. The pair is immutable
/// for the life of the pool.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(x, y).expect("distinct assets");
/// assert_eq!(pair.asset_x(), x);
/// assert_eq!(pair.asset_y(), y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_x: AssetId,
    asset_y: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair` with the given X and Y roles.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if either identifier is null or
    /// if both identifiers are equal. Either condition is a fatal
    /// configuration error for the pool being constructed.
    pub fn new(asset_x: AssetId, asset_y: AssetId) -> Result<Self, PoolError> {
        if asset_x.is_null() || asset_y.is_null() {
            return Err(PoolError::InvalidAsset(
                "asset identifiers must be non-null",
            ));
        }
        if asset_x == asset_y {
            return Err(PoolError::InvalidAsset(
                "pool requires two distinct asset types",
            ));
        }
        Ok(Self { asset_x, asset_y })
    }

    /// Returns the X-side asset identifier.
    #[must_use]
    pub const fn asset_x(&self) -> AssetId {
        self.asset_x
    }

    /// Returns the Y-side asset identifier.
    #[must_use]
    pub const fn asset_y(&self) -> AssetId {
        self.asset_y
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_x == *asset || self.asset_y == *asset
    }

    /// Returns `true` if `(first, second)` matches this pair exactly,
    /// in order.
    #[must_use]
    pub fn matches(&self, first: &AssetId, second: &AssetId) -> bool {
        self.asset_x == *first && self.asset_y == *second
    }
}
