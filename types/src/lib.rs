//! Fundamental wire types for the PascalCoin JSON-RPC client.
//!
//! This crate defines the leaf types shared by every other crate in the
//! workspace: amounts, timestamps, the hex payload codec, the payload type
//! bitmask, the integer/string wire enums, and the transport seam.

pub mod amount;
pub mod error;
pub mod hexa;
pub mod keys;
pub mod methods;
pub mod optype;
pub mod payload;
pub mod state;
pub mod time;
pub mod transport;

pub use amount::Pasc;
pub use error::TypesError;
pub use hexa::{from_hex, to_hex};
pub use keys::{CurveId, KeyRef};
pub use methods::{DataType, PayloadEncode, PayloadMethod, PubKeyPayloadMethod};
pub use optype::{OperationSubType, OperationType};
pub use payload::{EncodingMode, EncryptionMode, Payload, PayloadType, PayloadTypeParts};
pub use state::AccountState;
pub use time::Timestamp;
pub use transport::{Transport, TransportError};
