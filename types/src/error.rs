//! Error type for local decoding and parsing failures.

use thiserror::Error;

/// Failures raised while decoding client-side input.
///
/// These never come from the node: they mean the caller (or a field the
/// caller handed over) was malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("hex decode error: {0}")]
    Decode(String),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(String),

    #[error("invalid payload type 0x{0:02X}: {1}")]
    InvalidPayloadType(u8, &'static str),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("payload is encrypted; decrypt it through the node first")]
    EncryptedPayload,
}
