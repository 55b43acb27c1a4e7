//! Fixed-point bitcoin amount with denomination conversions.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Number of satoshis in one bitcoin.
pub const SATOSHIS_PER_BITCOIN: i64 = 100_000_000;
/// Number of bits (microbitcoin) in one bitcoin.
pub const BITS_PER_BITCOIN: i64 = 1_000_000;
/// Number of millibits in one bitcoin.
pub const MILLIBITS_PER_BITCOIN: i64 = 1_000;

/// A bitcoin amount, stored as a whole number of satoshis.
///
/// The server reports every monetary quantity as an integer satoshi count,
/// so the type is `#[serde(transparent)]` over that integer and all other
/// denominations (bits, millibits, whole coins) are derived views.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BitcoinValue {
    satoshis: i64,
}

impl BitcoinValue {
    /// The zero amount.
    pub const ZERO: BitcoinValue = BitcoinValue { satoshis: 0 };

    /// Create a value from a satoshi count.
    pub const fn from_satoshis(satoshis: i64) -> Self {
        BitcoinValue { satoshis }
    }

    /// Create a value from a whole-coin amount, rounding to the nearest
    /// satoshi.
    pub fn from_btc(btc: f64) -> Self {
        BitcoinValue {
            satoshis: (btc * SATOSHIS_PER_BITCOIN as f64).round() as i64,
        }
    }

    /// Create a value from a bits (microbitcoin) amount.
    pub fn from_bits(bits: f64) -> Self {
        BitcoinValue {
            satoshis: (bits * (SATOSHIS_PER_BITCOIN / BITS_PER_BITCOIN) as f64).round() as i64,
        }
    }

    /// Create a value from a millibit amount.
    pub fn from_millibits(millibits: f64) -> Self {
        BitcoinValue {
            satoshis: (millibits * (SATOSHIS_PER_BITCOIN / MILLIBITS_PER_BITCOIN) as f64).round()
                as i64,
        }
    }

    /// The amount in satoshis.
    pub const fn satoshis(&self) -> i64 {
        self.satoshis
    }

    /// The amount in whole coins.
    pub fn to_btc(&self) -> f64 {
        self.satoshis as f64 / SATOSHIS_PER_BITCOIN as f64
    }

    /// The amount in bits (microbitcoin).
    pub fn to_bits(&self) -> f64 {
        self.satoshis as f64 / (SATOSHIS_PER_BITCOIN / BITS_PER_BITCOIN) as f64
    }

    /// The amount in millibits.
    pub fn to_millibits(&self) -> f64 {
        self.satoshis as f64 / (SATOSHIS_PER_BITCOIN / MILLIBITS_PER_BITCOIN) as f64
    }

    /// Checked addition, `None` on overflow.
    pub fn checked_add(self, other: BitcoinValue) -> Option<BitcoinValue> {
        self.satoshis
            .checked_add(other.satoshis)
            .map(BitcoinValue::from_satoshis)
    }

    /// Checked subtraction, `None` on overflow.
    pub fn checked_sub(self, other: BitcoinValue) -> Option<BitcoinValue> {
        self.satoshis
            .checked_sub(other.satoshis)
            .map(BitcoinValue::from_satoshis)
    }
}

impl Add for BitcoinValue {
    type Output = BitcoinValue;

    fn add(self, other: BitcoinValue) -> BitcoinValue {
        BitcoinValue {
            satoshis: self.satoshis + other.satoshis,
        }
    }
}

impl Sub for BitcoinValue {
    type Output = BitcoinValue;

    fn sub(self, other: BitcoinValue) -> BitcoinValue {
        BitcoinValue {
            satoshis: self.satoshis - other.satoshis,
        }
    }
}

impl fmt::Display for BitcoinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BTC", self.to_btc())
    }
}
