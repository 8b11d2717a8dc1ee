//! Error codes reported by the node, and local client errors.

use pasc_operations::OperationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Numeric error code of a JSON-RPC error object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Also used by the client for transport and decoding failures.
    InternalError,
    MethodNotFound,
    InvalidAccount,
    InvalidBlock,
    InvalidOperation,
    InvalidPublicKey,
    NotFound,
    WalletIsPasswordProtected,
    InvalidData,
    /// A code this client does not know, kept as sent.
    Unrecognized(i32),
}

impl ErrorCode {
    pub fn from_code(code: i32) -> Self {
        match code {
            100 => Self::InternalError,
            1001 => Self::MethodNotFound,
            1002 => Self::InvalidAccount,
            1003 => Self::InvalidBlock,
            1004 => Self::InvalidOperation,
            1005 => Self::InvalidPublicKey,
            1010 => Self::NotFound,
            1015 => Self::WalletIsPasswordProtected,
            1016 => Self::InvalidData,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::InternalError => 100,
            Self::MethodNotFound => 1001,
            Self::InvalidAccount => 1002,
            Self::InvalidBlock => 1003,
            Self::InvalidOperation => 1004,
            Self::InvalidPublicKey => 1005,
            Self::NotFound => 1010,
            Self::WalletIsPasswordProtected => 1015,
            Self::InvalidData => 1016,
            Self::Unrecognized(code) => *code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(code) => write!(f, "{code}"),
            known => write!(f, "{known:?}({})", known.code()),
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_code)
    }
}

/// The `error` member of a response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct RpcErrorObject {
    pub code: ErrorCode,
    #[serde(default)]
    pub message: String,
}

impl RpcErrorObject {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Failures detected by the client before or instead of a node call.
///
/// Kept apart from [`RpcErrorObject`] so callers can tell "my input was
/// wrong" from "the node said no".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("index {index} out of range: raw operations hold {count}")]
    IndexOutOfRange { index: u32, count: u32 },

    #[error("multi-operation already carries {signed} signature(s); appending would void them")]
    AppendAfterSign { signed: u32 },

    #[error("multi-operation is not executable: {not_signed} signature(s) missing")]
    NotExecutable { not_signed: u32 },

    #[error("no multi-operation composed yet")]
    NothingComposed,

    #[error("multi-operation was already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("http client error: {0}")]
    Http(String),

    #[error("config error: {0}")]
    Config(String),
}
