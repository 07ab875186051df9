//! The pool's single supported trading direction.

use super::{AssetId, AssetPair};
use crate::error::PoolError;

/// A validated swap path through the pool.
///
/// The pool supports exactly one trading direction: asset X in, asset Y
/// out. Expressing the path as a tagged enumeration makes "only this exact
/// path is valid" a type-level guarantee rather than a runtime length
/// check on a list of identifiers. A symmetric Y→X counterpart would be an
/// additional variant; it is deliberately not provided.
///
/// Callers holding raw asset identifiers go through
/// [`SwapPath::from_assets`], which is where malformed paths are rejected.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair, SwapPath};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(x, y).expect("distinct assets");
///
/// assert!(SwapPath::from_assets(&pair, &x, &y).is_ok());
/// assert!(SwapPath::from_assets(&pair, &y, &x).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapPath {
    /// Sell asset X, receive asset Y.
    XToY,
}

impl SwapPath {
    /// Validates a `(from, to)` identifier pair against the pool's
    /// configured pair and returns the corresponding path.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPath`] unless `(from, to)` is exactly
    /// `(asset_x, asset_y)`.
    pub fn from_assets(
        pair: &AssetPair,
        from: &AssetId,
        to: &AssetId,
    ) -> Result<Self, PoolError> {
        if pair.matches(from, to) {
            Ok(Self::XToY)
        } else {
            Err(PoolError::InvalidPath(
                "only the exact path [asset_x, asset_y] is supported",
            ))
        }
    }
}
