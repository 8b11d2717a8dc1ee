//! Account state enum.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `state` field of an account object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccountState {
    #[default]
    Normal,
    /// Listed for sale; seller and price are set.
    Listed,
    CoinSwap,
    AccountSwap,
    /// A state string this client does not know yet.
    Other(String),
}

impl AccountState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Listed => "listed",
            Self::CoinSwap => "coin_swap",
            Self::AccountSwap => "account_swap",
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            "listed" => Self::Listed,
            "coin_swap" => Self::CoinSwap,
            "account_swap" => Self::AccountSwap,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Whether the account carries sale-listing data (seller, price, lock).
    pub fn is_for_sale(&self) -> bool {
        matches!(self, Self::Listed | Self::CoinSwap | Self::AccountSwap)
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccountState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings() {
        let s: AccountState = serde_json::from_str("\"listed\"").unwrap();
        assert_eq!(s, AccountState::Listed);
        assert!(s.is_for_sale());
        let s: AccountState = serde_json::from_str("\"coin_swap\"").unwrap();
        assert_eq!(s, AccountState::CoinSwap);
        assert_eq!(serde_json::to_string(&AccountState::Normal).unwrap(), "\"normal\"");
    }

    #[test]
    fn unknown_state_is_kept() {
        let s: AccountState = serde_json::from_str("\"frozen\"").unwrap();
        assert_eq!(s, AccountState::Other("frozen".into()));
        assert_eq!(s.as_str(), "frozen");
    }
}
