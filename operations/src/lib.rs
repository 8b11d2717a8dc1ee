//! PascalCoin chain objects as the JSON-RPC client sees them.
//!
//! - [`account`]: accounts (with sale listings) and blocks
//! - [`operation`]: single operations, their party rows and cold-wallet results
//! - [`party`]: senders, receivers and changers composed by the caller
//! - [`multi`]: multi-operation snapshots and the signing state machine
//! - [`raw`]: raw operations containers
//! - [`keys`], [`node`], [`message`]: keys, node status and message signing objects

pub mod account;
pub mod error;
pub mod keys;
pub mod message;
pub mod multi;
pub mod node;
pub mod operation;
pub mod party;
pub mod raw;

pub use account::{Account, Block, SaleListing};
pub use error::OperationError;
pub use keys::{PublicKey, WalletPublicKey};
pub use message::{DecryptedPayload, EPasa, MessageSignature};
pub use multi::{MultiOperation, MultiOperationState};
pub use node::{ConnectionInfo, NetProtocol, NetStats, NodeServer, NodeStatus};
pub use operation::{
    ColdWalletOperation, DataInfo, Operation, OperationChanger, OperationReceiver,
    OperationSender, OperationStatus,
};
pub use party::{AccountKeyPair, Changer, Receiver, Sender};
pub use raw::{RawOperation, RawOperations};
