//! Request-side enums: payload methods, payload encodings and data types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `payload_method` for operations: who can read the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PayloadMethod {
    #[default]
    None,
    /// Encrypted with the destination account's public key.
    Dest,
    /// Encrypted with the sender account's public key.
    Sender,
    /// Encrypted with a password.
    Aes,
}

impl PayloadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dest => "dest",
            Self::Sender => "sender",
            Self::Aes => "aes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "dest" => Some(Self::Dest),
            "sender" => Some(Self::Sender),
            "aes" => Some(Self::Aes),
            _ => None,
        }
    }
}

/// `payload_method` for the standalone `payloadencrypt` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PubKeyPayloadMethod {
    #[default]
    None,
    PubKey,
    Aes,
}

impl PubKeyPayloadMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PubKey => "pubkey",
            Self::Aes => "aes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "pubkey" => Some(Self::PubKey),
            "aes" => Some(Self::Aes),
            _ => None,
        }
    }
}

/// How an E-PASA payload is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PayloadEncode {
    #[default]
    String,
    Hexa,
    Base58,
}

impl PayloadEncode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Hexa => "hexa",
            Self::Base58 => "base58",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(Self::String),
            "hexa" => Some(Self::Hexa),
            "base58" => Some(Self::Base58),
            _ => None,
        }
    }
}

macro_rules! string_codec {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s.to_ascii_lowercase()).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown {}: {s}", $what))
                })
            }
        }
    };
}

string_codec!(PayloadMethod, "payload method");
string_codec!(PubKeyPayloadMethod, "payload method");
string_codec!(PayloadEncode, "payload encoding");

/// `data_type` of a data operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    #[default]
    ChatMessage,
    PrivateMessage,
    File,
    Other(u16),
}

impl DataType {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::ChatMessage,
            1 => Self::PrivateMessage,
            2 => Self::File,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::ChatMessage => 0,
            Self::PrivateMessage => 1,
            Self::File => 2,
            Self::Other(code) => *code,
        }
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u16::deserialize(deserializer).map(Self::from_code)
    }
}
