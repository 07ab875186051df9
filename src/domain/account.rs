//! Ledger-agnostic account identity.

use core::fmt;

/// A generic identity for a depositor, trader, or custody account.
///
/// Wraps a fixed-size `[u8; 32]` byte array. The all-zero value is the null
/// sentinel: it is constructible (so callers can express "no account") but
/// rejected wherever an operation requires a real identity.
///
/// # Examples
///
/// ```
/// use pairpool::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert!(!alice.is_null());
/// assert!(AccountId::zero().is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero null identity.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null identity.
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

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}
