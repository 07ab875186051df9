//! Fixed-point spot price.

use core::fmt;

use super::Amount;
use crate::error::PoolError;

/// Spot price of asset X denominated in asset Y, as an 18-decimal
/// fixed-point integer.
///
/// A `Price` of [`Price::SCALE`] means a 1:1 exchange rate. All arithmetic
/// is integer-only; the fractional part is carried in the scaling factor.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, Price};
///
/// // reserve_y = 2000, reserve_x = 1000 → price 2.0
/// let p = Price::from_reserves(Amount::new(2_000), Amount::new(1_000)).expect("positive");
/// assert_eq!(p.get(), 2 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u128);

impl Price {
    /// Fixed-point scaling factor: 18 decimal digits of fractional
    /// precision.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Price ratio of 1:1.
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `Price` from a raw scaled value.
    #[must_use]
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes the price `reserve_y * SCALE / reserve_x` (floor).
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroReserve`] if either reserve is zero.
    /// - [`PoolError::Overflow`] if the scaled numerator overflows `u128`.
    pub fn from_reserves(reserve_y: Amount, reserve_x: Amount) -> crate::error::Result<Self> {
        if reserve_x.is_zero() || reserve_y.is_zero() {
            return Err(PoolError::ZeroReserve);
        }
        let scaled = reserve_y
            .mul_div_floor(&Amount::new(Self::SCALE), &reserve_x)
            .ok_or(PoolError::Overflow("price numerator overflow"))?;
        Ok(Self(scaled.get()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:018}")
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- from_reserves ------------------------------------------------------

    #[test]
    fn even_ratio() {
        let Ok(p) = Price::from_reserves(Amount::new(2_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), 2 * Price::SCALE);
    }

    #[test]
    fn fractional_ratio_floors() {
        // 1000 / 3000 = 0.333… → floor at 18 decimals
        let Ok(p) = Price::from_reserves(Amount::new(1_000), Amount::new(3_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), Price::SCALE / 3);
    }

    #[test]
    fn one_to_one() {
        let Ok(p) = Price::from_reserves(Amount::new(500), Amount::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(p, Price::ONE);
    }

    #[test]
    fn zero_reserve_x_rejected() {
        let r = Price::from_reserves(Amount::new(1_000), Amount::ZERO);
        assert_eq!(r, Err(PoolError::ZeroReserve));
    }

    #[test]
    fn zero_reserve_y_rejected() {
        let r = Price::from_reserves(Amount::ZERO, Amount::new(1_000));
        assert_eq!(r, Err(PoolError::ZeroReserve));
    }

    #[test]
    fn overflow_rejected() {
        let r = Price::from_reserves(Amount::MAX, Amount::new(1));
        assert_eq!(r, Err(PoolError::Overflow("price numerator overflow")));
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_whole_and_fraction() {
        let p = Price::from_scaled(Price::SCALE + Price::SCALE / 2);
        assert_eq!(format!("{p}"), "1.500000000000000000");
    }

    #[test]
    fn ordering() {
        assert!(Price::from_scaled(1) < Price::ONE);
    }

    #[test]
    fn copy_semantics() {
        let a = Price::ONE;
        let b = a;
        assert_eq!(a, b);
    }
}
