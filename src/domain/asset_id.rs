//! Asset-type identifier.

use core::fmt;

/// Identifies one fungible asset type.
///
/// Wraps a fixed-size `[u8; 32]` byte array. The all-zero value is the null
/// identifier and is rejected at [`AssetPair`](super::AssetPair)
/// construction.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AssetId;
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// assert!(!gold.is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero null identifier.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null identifier.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [7u8; 32];
        assert_eq!(AssetId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn zero_is_null() {
        assert!(AssetId::zero().is_null());
    }

    #[test]
    fn nonzero_is_not_null() {
        assert!(!AssetId::from_bytes([1u8; 32]).is_null());
    }

    #[test]
    fn equality() {
        assert_eq!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([1u8; 32]));
        assert_ne!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
    }

    #[test]
    fn copy_semantics() {
        let a = AssetId::from_bytes([5u8; 32]);
        let b = a;
        assert_eq!(a, b);
    }
}
