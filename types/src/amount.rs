//! PASCURRENCY amounts.
//!
//! Amounts are fixed-point decimals with four fractional digits, stored as a
//! signed count of the smallest unit (one molina = 0.0001 PASC) to avoid
//! floating-point drift. The sign follows the node's convention: negative
//! means coins leave the account, positive means they enter it.
//!
//! On the wire the node sends plain JSON numbers (`1500`, `-20.0000`,
//! `0.1`). Some endpoints add a `*_s` display string next to the number;
//! that string is never parsed.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::TypesError;

/// Number of molinas in one PASC.
pub const MOLINAS_PER_PASC: i64 = 10_000;

/// Fractional digits carried by every amount.
pub const DECIMALS: usize = 4;

/// A signed PASCURRENCY amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pasc(i64);

impl Pasc {
    pub const ZERO: Self = Self(0);

    pub const fn from_molinas(molinas: i64) -> Self {
        Self(molinas)
    }

    /// Whole coins, e.g. `Pasc::from_pasc(20)` is `20.0000`.
    pub const fn from_pasc(coins: i64) -> Self {
        Self(coins * MOLINAS_PER_PASC)
    }

    pub fn molinas(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Magnitude of the amount, dropping the direction sign.
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Convert a JSON float, rounding to the nearest molina.
    pub fn from_f64(value: f64) -> Result<Self, TypesError> {
        if !value.is_finite() {
            return Err(TypesError::InvalidAmount(value.to_string()));
        }
        let scaled = (value * MOLINAS_PER_PASC as f64).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(TypesError::InvalidAmount(value.to_string()));
        }
        Ok(Self(scaled as i64))
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / MOLINAS_PER_PASC as f64
    }
}

impl Add for Pasc {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Pasc {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Pasc {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Pasc {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Pasc> for Pasc {
    fn sum<I: Iterator<Item = &'a Pasc>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Pasc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per = MOLINAS_PER_PASC as u64;
        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / per,
            magnitude % per,
            width = DECIMALS
        )
    }
}

impl FromStr for Pasc {
    type Err = TypesError;

    /// Exact decimal parse, no float round trip. Accepts at most four
    /// fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypesError::InvalidAmount(s.to_string());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > DECIMALS
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut frac_value: i64 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| invalid())?
        };
        for _ in frac.len()..DECIMALS {
            frac_value *= 10;
        }
        let molinas = whole
            .checked_mul(MOLINAS_PER_PASC)
            .and_then(|m| m.checked_add(frac_value))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -molinas } else { molinas }))
    }
}

impl Serialize for Pasc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % MOLINAS_PER_PASC == 0 {
            serializer.serialize_i64(self.0 / MOLINAS_PER_PASC)
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Pasc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PascVisitor;

        impl<'de> Visitor<'de> for PascVisitor {
            type Value = Pasc;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a decimal number with at most four fractional digits")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                v.checked_mul(MOLINAS_PER_PASC)
                    .map(Pasc)
                    .ok_or_else(|| E::custom(format!("amount {v} out of range")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map_err(|_| E::custom(format!("amount {v} out of range")))
                    .and_then(|v| self.visit_i64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Pasc::from_f64(v).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PascVisitor)
    }
}
