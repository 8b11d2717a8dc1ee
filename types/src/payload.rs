//! Payload type bitmask and payload values.
//!
//! A `payload_type` byte combines one encryption mode with at most one text
//! encoding and an optional "addressed by name" flag. The all-zero value is
//! special: it means the node did not specify how the payload was produced,
//! which is not the same thing as an explicit public payload (`0x01`).
//!
//! The wire accepts any byte. [`PayloadType`] keeps the raw byte so that
//! re-serialising a value read from the node is lossless; [`PayloadType::validate`]
//! is where the client applies its own stricter rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

use crate::error::TypesError;
use crate::hexa;

/// How the payload bytes were encrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncryptionMode {
    /// Not encrypted.
    Public,
    /// ECIES with the recipient account's public key.
    RecipientKey,
    /// ECIES with the sender account's public key.
    SenderKey,
    /// AES with a password.
    Password,
}

/// How the payload text was entered before conversion to bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    Ascii,
    Hex,
    Base58,
}

/// Decomposed view of a [`PayloadType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PayloadTypeParts {
    pub encryption: Option<EncryptionMode>,
    pub encoding: Option<EncodingMode>,
    pub addressed_by_name: bool,
}

/// The `payload_type` bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadType(u8);

impl PayloadType {
    /// Encryption and encoding not specified.
    pub const NON_DETERMINISTIC: Self = Self(0);
    pub const PUBLIC: Self = Self(0x01);
    pub const RECIPIENT_KEY_ENCRYPTED: Self = Self(0x02);
    pub const SENDER_KEY_ENCRYPTED: Self = Self(0x04);
    pub const PASSWORD_ENCRYPTED: Self = Self(0x08);
    pub const ASCII_FORMATTED: Self = Self(0x10);
    pub const HEX_FORMATTED: Self = Self(0x20);
    pub const BASE58_FORMATTED: Self = Self(0x40);
    pub const ADDRESSED_BY_NAME: Self = Self(0x80);

    const ENCRYPTION_MASK: u8 = 0x0F;
    const ENCODING_MASK: u8 = 0x70;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_non_deterministic(&self) -> bool {
        self.0 == 0
    }

    /// Split into encryption, encoding and addressing parts.
    ///
    /// Fails when more than one encryption or encoding flag is set.
    pub fn decompose(&self) -> Result<PayloadTypeParts, TypesError> {
        let encryption = match self.0 & Self::ENCRYPTION_MASK {
            0 => None,
            0x01 => Some(EncryptionMode::Public),
            0x02 => Some(EncryptionMode::RecipientKey),
            0x04 => Some(EncryptionMode::SenderKey),
            0x08 => Some(EncryptionMode::Password),
            _ => {
                return Err(TypesError::InvalidPayloadType(
                    self.0,
                    "more than one encryption flag set",
                ))
            }
        };
        let encoding = match self.0 & Self::ENCODING_MASK {
            0 => None,
            0x10 => Some(EncodingMode::Ascii),
            0x20 => Some(EncodingMode::Hex),
            0x40 => Some(EncodingMode::Base58),
            _ => {
                return Err(TypesError::InvalidPayloadType(
                    self.0,
                    "more than one encoding flag set",
                ))
            }
        };
        Ok(PayloadTypeParts {
            encryption,
            encoding,
            addressed_by_name: self.contains(Self::ADDRESSED_BY_NAME),
        })
    }

    /// Rebuild the bitmask from its parts. Inverse of [`PayloadType::decompose`].
    pub fn compose(parts: PayloadTypeParts) -> Self {
        let mut bits = match parts.encryption {
            None => 0,
            Some(EncryptionMode::Public) => 0x01,
            Some(EncryptionMode::RecipientKey) => 0x02,
            Some(EncryptionMode::SenderKey) => 0x04,
            Some(EncryptionMode::Password) => 0x08,
        };
        bits |= match parts.encoding {
            None => 0,
            Some(EncodingMode::Ascii) => 0x10,
            Some(EncodingMode::Hex) => 0x20,
            Some(EncodingMode::Base58) => 0x40,
        };
        if parts.addressed_by_name {
            bits |= 0x80;
        }
        Self(bits)
    }

    /// Client-side validity rule: exactly one encryption mode (or the
    /// non-deterministic zero value) and at most one encoding flag.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.is_non_deterministic() {
            return Ok(());
        }
        let parts = self.decompose()?;
        if parts.encryption.is_none() {
            return Err(TypesError::InvalidPayloadType(
                self.0,
                "no encryption mode set",
            ));
        }
        Ok(())
    }

    pub fn encryption(&self) -> Option<EncryptionMode> {
        self.decompose().ok().and_then(|p| p.encryption)
    }

    pub fn encoding(&self) -> Option<EncodingMode> {
        self.decompose().ok().and_then(|p| p.encoding)
    }

    /// True when the bytes can only be read after a node-side decrypt.
    pub fn is_encrypted(&self) -> bool {
        matches!(
            self.encryption(),
            Some(EncryptionMode::RecipientKey | EncryptionMode::SenderKey | EncryptionMode::Password)
        )
    }
}

impl BitOr for PayloadType {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<u8> for PayloadType {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_non_deterministic() {
            return write!(f, "non-deterministic");
        }
        let names = [
            (Self::PUBLIC, "public"),
            (Self::RECIPIENT_KEY_ENCRYPTED, "recipient-key"),
            (Self::SENDER_KEY_ENCRYPTED, "sender-key"),
            (Self::PASSWORD_ENCRYPTED, "password"),
            (Self::ASCII_FORMATTED, "ascii"),
            (Self::HEX_FORMATTED, "hex"),
            (Self::BASE58_FORMATTED, "base58"),
            (Self::ADDRESSED_BY_NAME, "by-name"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", parts.join("|"))
    }
}

/// Payload bytes (as a HEXASTRING) together with their type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payload {
    pub hex: String,
    pub payload_type: PayloadType,
}

impl Payload {
    pub fn new(hex: impl Into<String>, payload_type: PayloadType) -> Self {
        Self {
            hex: hex.into(),
            payload_type,
        }
    }

    /// Build a public ASCII payload from plain text.
    pub fn public_text(text: &str) -> Self {
        Self::new(
            hexa::to_hex(text),
            PayloadType::PUBLIC | PayloadType::ASCII_FORMATTED,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }

    /// UTF-8 text of an unencrypted payload.
    pub fn decode_unencrypted(&self) -> Result<String, TypesError> {
        if self.payload_type.is_encrypted() {
            return Err(TypesError::EncryptedPayload);
        }
        hexa::from_hex(&self.hex)
    }

    /// Render an unencrypted payload the way it was originally entered.
    ///
    /// Returns `None` for encrypted payloads.
    pub fn display_text(&self) -> Result<Option<String>, TypesError> {
        if self.payload_type.is_encrypted() {
            return Ok(None);
        }
        let text = match self.payload_type.encoding() {
            Some(EncodingMode::Hex) => self.hex.to_uppercase(),
            Some(EncodingMode::Base58) => {
                bs58::encode(hexa::decode_bytes(&self.hex)?).into_string()
            }
            Some(EncodingMode::Ascii) | None => hexa::from_hex(&self.hex)?,
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_public() {
        assert!(PayloadType::NON_DETERMINISTIC.is_non_deterministic());
        assert_ne!(PayloadType::NON_DETERMINISTIC, PayloadType::PUBLIC);
        assert_eq!(PayloadType::NON_DETERMINISTIC.encryption(), None);
        assert!(PayloadType::NON_DETERMINISTIC.validate().is_ok());
    }

    #[test]
    fn decomposes_public_ascii() {
        let pt = PayloadType::from_bits(17);
        let parts = pt.decompose().unwrap();
        assert_eq!(parts.encryption, Some(EncryptionMode::Public));
        assert_eq!(parts.encoding, Some(EncodingMode::Ascii));
        assert!(!parts.addressed_by_name);
        assert_eq!(PayloadType::compose(parts), pt);
    }

    #[test]
    fn rejects_two_encryption_flags() {
        let pt = PayloadType::RECIPIENT_KEY_ENCRYPTED | PayloadType::PASSWORD_ENCRYPTED;
        assert!(matches!(
            pt.decompose(),
            Err(TypesError::InvalidPayloadType(0x0A, _))
        ));
        assert!(pt.validate().is_err());
    }

    #[test]
    fn rejects_two_encoding_flags() {
        let pt = PayloadType::PUBLIC | PayloadType::ASCII_FORMATTED | PayloadType::HEX_FORMATTED;
        assert!(pt.validate().is_err());
    }

    #[test]
    fn encoding_without_encryption_is_invalid() {
        assert!(PayloadType::ASCII_FORMATTED.validate().is_err());
    }

    #[test]
    fn decodes_public_ascii_payload() {
        let payload = Payload::new("74657374", PayloadType::from_bits(17));
        assert_eq!(payload.decode_unencrypted().unwrap(), "test");
        assert_eq!(payload.display_text().unwrap().as_deref(), Some("test"));
    }

    #[test]
    fn encrypted_payload_needs_the_node() {
        let payload = Payload::new(
            "53616C7465645F5F",
            PayloadType::PASSWORD_ENCRYPTED | PayloadType::ASCII_FORMATTED,
        );
        assert_eq!(payload.decode_unencrypted(), Err(TypesError::EncryptedPayload));
        assert_eq!(payload.display_text().unwrap(), None);
    }

    #[test]
    fn display_text_follows_encoding() {
        let hex = Payload::new("0aff", PayloadType::PUBLIC | PayloadType::HEX_FORMATTED);
        assert_eq!(hex.display_text().unwrap().as_deref(), Some("0AFF"));
        let b58 = Payload::new("00", PayloadType::PUBLIC | PayloadType::BASE58_FORMATTED);
        assert_eq!(b58.display_text().unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn wire_form_is_plain_integer() {
        let pt: PayloadType = serde_json::from_str("145").unwrap();
        assert!(pt.contains(PayloadType::ADDRESSED_BY_NAME));
        assert_eq!(serde_json::to_string(&pt).unwrap(), "145");
        assert_eq!(pt.to_string(), "public|ascii|by-name");
    }
}
