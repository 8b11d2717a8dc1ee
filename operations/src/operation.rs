//! Single chain operations and their party rows.

use pasc_types::{DataType, OperationSubType, OperationType, Pasc, Payload, PayloadType, Timestamp};
use serde::{Deserialize, Serialize};

/// Data-operation metadata attached to a sender row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataInfo {
    /// GUID in the node's `{...}` form.
    pub id: String,
    pub sequence: u32,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl DataInfo {
    /// The GUID without its surrounding braces.
    pub fn guid(&self) -> &str {
        self.id.trim_start_matches('{').trim_end_matches('}')
    }
}

/// A sender row of an operation read back from the node.
///
/// `amount` is negative: coins leave this account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSender {
    pub account: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_epasa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unenc_payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unenc_hexpayload: Option<String>,
    #[serde(default)]
    pub n_operation: u32,
    pub amount: Pasc,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub payload_type: PayloadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataInfo>,
}

impl OperationSender {
    pub fn payload(&self) -> Payload {
        Payload::new(self.payload.clone(), self.payload_type)
    }
}

/// A receiver row of an operation read back from the node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationReceiver {
    pub account: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_epasa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unenc_payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unenc_hexpayload: Option<String>,
    pub amount: Pasc,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub payload_type: PayloadType,
}

impl OperationReceiver {
    pub fn payload(&self) -> Payload {
        Payload::new(self.payload.clone(), self.payload_type)
    }
}

/// An account-changer row of an operation read back from the node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationChanger {
    pub account: u32,
    #[serde(default)]
    pub n_operation: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_enc_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_type: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_account: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_price: Option<Pasc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_until_block: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    /// Comma separated list of what changed, e.g. `account_name`.
    #[serde(default)]
    pub changes: String,
}

/// Where an operation is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationStatus {
    /// Submitted, not yet in a block.
    Pending,
    /// Included in `block` at position `index`; `maturation` counts the
    /// blocks mined since (0 = most recent).
    Confirmed {
        block: u32,
        index: u32,
        maturation: u32,
    },
}

/// A chain operation as reported by the node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub block: Option<u32>,
    #[serde(default)]
    pub time: Timestamp,
    /// Position inside the block, -1 while pending.
    #[serde(rename = "opblock", default = "pending_index")]
    pub index: i32,
    #[serde(default)]
    pub maturation: Option<u32>,
    pub optype: OperationType,
    #[serde(default = "unknown_subtype")]
    pub subtype: OperationSubType,
    pub account: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_account: Option<u32>,
    #[serde(default)]
    pub n_operation: u32,
    #[serde(default)]
    pub senders: Vec<OperationSender>,
    #[serde(default)]
    pub receivers: Vec<OperationReceiver>,
    #[serde(default)]
    pub changers: Vec<OperationChanger>,
    #[serde(default)]
    pub optxt: String,
    pub fee: Pasc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Pasc>,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub payload_type: PayloadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Pasc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_account: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_account: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc_pubkey: Option<String>,
    #[serde(default)]
    pub ophash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_ophash: Option<String>,
}

fn pending_index() -> i32 {
    -1
}

fn unknown_subtype() -> OperationSubType {
    OperationSubType::Unknown(0)
}

impl Operation {
    pub fn status(&self) -> OperationStatus {
        match (self.block, self.maturation) {
            (Some(block), Some(maturation)) if block > 0 => OperationStatus::Confirmed {
                block,
                index: u32::try_from(self.index).unwrap_or(0),
                maturation,
            },
            _ => OperationStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status() == OperationStatus::Pending
    }

    /// Whether `subtype` is one of the subtypes `optype` may carry.
    ///
    /// A mismatch is not an error: newer nodes add subtypes, so callers get
    /// the raw values back through [`Operation::kind`] and decide themselves.
    pub fn kind_is_consistent(&self) -> bool {
        self.optype.admits(self.subtype)
    }

    /// Raw `(optype, subtype)` codes.
    pub fn kind(&self) -> (u8, u16) {
        (self.optype.code(), self.subtype.code())
    }

    /// The account that paid the fee.
    pub fn signer(&self) -> u32 {
        self.signer_account.unwrap_or(self.account)
    }

    pub fn payload(&self) -> Payload {
        Payload::new(self.payload.clone(), self.payload_type)
    }
}

/// One entry of an `executeoperations` batch result.
///
/// Entries are independent: a batch may mix valid and invalid operations,
/// so every entry has to be inspected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColdWalletOperation {
    #[serde(default = "valid_by_default")]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    /// Absent when the node rejected the entry before describing it.
    #[serde(flatten)]
    pub operation: Option<Operation>,
}

fn valid_by_default() -> bool {
    true
}

impl ColdWalletOperation {
    pub fn ophash(&self) -> Option<&str> {
        self.operation
            .as_ref()
            .map(|op| op.ophash.as_str())
            .filter(|h| !h.is_empty())
    }
}
