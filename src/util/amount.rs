// SPDX-License-Identifier: CC0-1.0

//! Amounts
//!
//! This module introduces the [Amount] type, a signed count of satoshis
//! as carried by consensus money limits and staking thresholds.
//!

use std::fmt;
use std::ops;

/// An amount of money in satoshis.
///
/// Arithmetic through the operator traits panics on overflow; use the
/// checked methods when the operands are not trusted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);
    /// Exactly one satoshi.
    pub const ONE_SAT: Amount = Amount(1);
    /// Exactly one cent.
    pub const CENT: Amount = Amount(1_000_000);
    /// Exactly one coin.
    pub const COIN: Amount = Amount(100_000_000);

    /// Create an [Amount] from a number of satoshis.
    pub const fn from_sat(satoshi: i64) -> Amount {
        Amount(satoshi)
    }

    /// Create an [Amount] from a whole number of coins.
    pub const fn from_coins(coins: i64) -> Amount {
        Amount(coins * Amount::COIN.0)
    }

    /// Get the number of satoshis in this [Amount].
    pub fn as_sat(self) -> i64 {
        self.0
    }

    /// Whether this amount is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition.
    /// Returns [None] if overflow occurred.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked subtraction.
    /// Returns [None] if overflow occurred.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Checked multiplication.
    /// Returns [None] if overflow occurred.
    pub fn checked_mul(self, rhs: i64) -> Option<Amount> {
        self.0.checked_mul(rhs).map(Amount)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Amount({} satoshi)", self.as_sat())
    }
}

// Coin denominated, eight decimals.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let coin = Amount::COIN.0 as u64;
        write!(f, "{}{}.{:08}", sign, abs / coin, abs % coin)
    }
}

impl ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        self.checked_add(rhs).expect("Amount addition error")
    }
}

impl ops::Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        self.checked_sub(rhs).expect("Amount subtraction error")
    }
}

impl ops::Mul<i64> for Amount {
    type Output = Amount;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).expect("Amount multiplication error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_mul() {
        let sat = Amount::from_sat;

        assert_eq!(sat(15) + sat(15), sat(30));
        assert_eq!(sat(15) - sat(15), sat(0));
        assert_eq!(sat(14) * 3, sat(42));
        assert_eq!(sat(10) - sat(15), sat(-5));
        assert_eq!(Amount::from_coins(50), Amount::COIN * 50);
        assert_eq!(Amount::CENT * 100, Amount::COIN);
    }

    #[test]
    #[should_panic]
    fn add_overflow() {
        let _ = Amount::from_sat(i64::max_value()) + Amount::ONE_SAT;
    }

    #[test]
    fn checked_arithmetic() {
        let sat = Amount::from_sat;

        assert_eq!(sat(42).checked_add(sat(1)), Some(sat(43)));
        assert_eq!(sat(i64::max_value()).checked_add(sat(1)), None);
        assert_eq!(sat(i64::min_value()).checked_sub(sat(1)), None);
        assert_eq!(sat(i64::max_value()).checked_mul(2), None);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::COIN.to_string(), "1.00000000");
        assert_eq!(Amount::from_sat(-150_000_000).to_string(), "-1.50000000");
        assert_eq!(Amount::from_coins(21_000_000).to_string(), "21000000.00000000");
        assert_eq!(Amount::ZERO.to_string(), "0.00000000");
        assert_eq!(format!("{:?}", Amount::CENT), "Amount(1000000 satoshi)");
    }
}
