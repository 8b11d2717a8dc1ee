//! Parties of a multi-operation as the caller composes them.
//!
//! Payload text handed to the constructors is hex encoded once, here. A
//! party deserialised from a node snapshot keeps the node's hex untouched.

use pasc_types::{to_hex, KeyRef, Pasc, PayloadType};
use serde::{Deserialize, Serialize};

use crate::error::OperationError;

/// An account paying into a multi-operation.
///
/// In a composed request `amount` is the positive amount to debit. Node
/// snapshots report the same row with a negative amount.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub account: u32,
    pub amount: Pasc,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payload: String,
    #[serde(default)]
    pub payload_type: PayloadType,
    /// Left out so the node assigns the next value. Cold wallets must set it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_operation: Option<u32>,
}

impl Sender {
    pub fn new(account: u32, amount: Pasc) -> Self {
        Self {
            account,
            amount,
            ..Default::default()
        }
    }

    /// Attach a text payload; the text is hex encoded.
    pub fn with_payload(mut self, text: &str, payload_type: PayloadType) -> Self {
        self.payload = to_hex(text);
        self.payload_type = payload_type;
        self
    }

    pub fn with_n_operation(mut self, n_operation: u32) -> Self {
        self.n_operation = Some(n_operation);
        self
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        if !self.amount.is_positive() {
            return Err(OperationError::NonPositiveAmount {
                account: self.account,
                amount: self.amount,
            });
        }
        self.payload_type.validate()?;
        Ok(())
    }
}

/// An account credited by a multi-operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub account: u32,
    pub amount: Pasc,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payload: String,
    #[serde(default)]
    pub payload_type: PayloadType,
}

impl Receiver {
    pub fn new(account: u32, amount: Pasc) -> Self {
        Self {
            account,
            amount,
            ..Default::default()
        }
    }

    pub fn with_payload(mut self, text: &str, payload_type: PayloadType) -> Self {
        self.payload = to_hex(text);
        self.payload_type = payload_type;
        self
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        if !self.amount.is_positive() {
            return Err(OperationError::NonPositiveAmount {
                account: self.account,
                amount: self.amount,
            });
        }
        self.payload_type.validate()?;
        Ok(())
    }
}

/// An account whose key, name or type a multi-operation changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changer {
    pub account: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_operation: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_enc_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_b58_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_type: Option<u16>,
}

impl Changer {
    pub fn new(account: u32) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }

    pub fn with_new_key(mut self, key: KeyRef) -> Self {
        let (enc, b58) = key.as_params();
        self.new_enc_pubkey = enc.map(str::to_string);
        self.new_b58_pubkey = b58.map(str::to_string);
        self
    }

    pub fn with_new_name(mut self, name: impl Into<String>) -> Self {
        self.new_name = Some(name.into());
        self
    }

    pub fn with_new_type(mut self, account_type: u16) -> Self {
        self.new_type = Some(account_type);
        self
    }

    pub fn with_n_operation(mut self, n_operation: u32) -> Self {
        self.n_operation = Some(n_operation);
        self
    }

    pub fn validate(&self) -> Result<(), OperationError> {
        let changes_something = self.new_enc_pubkey.is_some()
            || self.new_b58_pubkey.is_some()
            || self.new_name.is_some()
            || self.new_type.is_some();
        if changes_something {
            Ok(())
        } else {
            Err(OperationError::EmptyChange {
                account: self.account,
            })
        }
    }
}

/// An `(account, public key)` pair handed to `multioperationsignoffline`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKeyPair {
    pub account: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b58_pubkey: Option<String>,
}

impl AccountKeyPair {
    pub fn new(account: u32, key: KeyRef) -> Self {
        let (enc, b58) = key.as_params();
        Self {
            account,
            enc_pubkey: enc.map(str::to_string),
            b58_pubkey: b58.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_payload_is_hexed_once() {
        let s = Sender::new(32320, Pasc::from_molinas(10_001))
            .with_payload("test1", PayloadType::PUBLIC | PayloadType::ASCII_FORMATTED)
            .with_n_operation(32);
        assert_eq!(s.payload, "7465737431");
        assert!(s.validate().is_ok());
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["payload"], "7465737431");
        assert_eq!(json["n_operation"], 32);
        assert_eq!(json["payload_type"], 17);
    }

    #[test]
    fn absent_fields_are_not_sent() {
        let s = Sender::new(1, Pasc::from_pasc(1));
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("n_operation").is_none());
        assert!(json.get("payload").is_none());
        let c = Changer::new(3).with_new_name("name3");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json, serde_json::json!({"account": 3, "new_name": "name3"}));
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(matches!(
            Sender::new(1, Pasc::ZERO).validate(),
            Err(OperationError::NonPositiveAmount { account: 1, .. })
        ));
        assert!(Receiver::new(2, Pasc::from_pasc(-1)).validate().is_err());
    }

    #[test]
    fn changer_must_change_something() {
        assert_eq!(
            Changer::new(7).validate(),
            Err(OperationError::EmptyChange { account: 7 })
        );
        assert!(Changer::new(7).with_new_type(2).validate().is_ok());
        let c = Changer::new(7).with_new_key(KeyRef::base58("3Ghh"));
        assert_eq!(c.new_b58_pubkey.as_deref(), Some("3Ghh"));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn key_pair_uses_one_key_form() {
        let pair = AccountKeyPair::new(32320, KeyRef::encoded("CA02"));
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, serde_json::json!({"account": 32320, "enc_pubkey": "CA02"}));
    }
}
