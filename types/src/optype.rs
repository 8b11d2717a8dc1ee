//! Operation type and subtype codes.
//!
//! Both predate the node's lower-case string convention and travel as small
//! integers. Codes the client does not know are kept in `Unknown` variants:
//! protocol upgrades add subtypes, and the node remains the source of truth.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `optype` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    BlockchainReward,
    Transaction,
    ChangeKey,
    RecoverFunds,
    ListAccountForSale,
    DelistAccount,
    BuyAccount,
    ChangeKeySigned,
    ChangeAccountInfo,
    MultiOperation,
    DataOperation,
    Unknown(u8),
}

impl OperationType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::BlockchainReward,
            1 => Self::Transaction,
            2 => Self::ChangeKey,
            3 => Self::RecoverFunds,
            4 => Self::ListAccountForSale,
            5 => Self::DelistAccount,
            6 => Self::BuyAccount,
            7 => Self::ChangeKeySigned,
            8 => Self::ChangeAccountInfo,
            9 => Self::MultiOperation,
            10 => Self::DataOperation,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::BlockchainReward => 0,
            Self::Transaction => 1,
            Self::ChangeKey => 2,
            Self::RecoverFunds => 3,
            Self::ListAccountForSale => 4,
            Self::DelistAccount => 5,
            Self::BuyAccount => 6,
            Self::ChangeKeySigned => 7,
            Self::ChangeAccountInfo => 8,
            Self::MultiOperation => 9,
            Self::DataOperation => 10,
            Self::Unknown(code) => *code,
        }
    }

    /// Subtypes this operation type may legally carry.
    pub fn legal_subtypes(&self) -> &'static [OperationSubType] {
        use OperationSubType as S;
        match self {
            Self::BlockchainReward => &[S::RewardMiner, S::RewardDeveloper],
            Self::Transaction => &[S::TransactionSender, S::TransactionReceiver],
            Self::ChangeKey => &[S::ChangeKey],
            Self::RecoverFunds => &[S::Recover],
            Self::ListAccountForSale => {
                &[S::ListAccountForPublicSale, S::ListAccountForPrivateSale]
            }
            Self::DelistAccount => &[S::DelistAccount],
            Self::BuyAccount => &[
                S::BuyTransactionBuyer,
                S::BuyTransactionTarget,
                S::BuyTransactionSeller,
                S::BuyAccountBuyer,
                S::BuyAccountTarget,
                S::BuyAccountSeller,
            ],
            Self::ChangeKeySigned => &[S::ChangeKeySigned],
            Self::ChangeAccountInfo => &[S::ChangeAccountInfo],
            Self::MultiOperation => &[S::MultiOperationGlobal, S::MultiOperationAccountInfo],
            Self::DataOperation => &[
                S::DataGlobalInfo,
                S::DataSender,
                S::DataSigner,
                S::DataReceiver,
            ],
            Self::Unknown(_) => &[],
        }
    }

    pub fn admits(&self, subtype: OperationSubType) -> bool {
        self.legal_subtypes().contains(&subtype)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "unknown({code})"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl Serialize for OperationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for OperationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_code)
    }
}

/// The `subtype` field: the operation seen from one party's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationSubType {
    RewardMiner,
    RewardDeveloper,
    TransactionSender,
    TransactionReceiver,
    BuyTransactionBuyer,
    BuyTransactionTarget,
    BuyTransactionSeller,
    ChangeKey,
    Recover,
    ListAccountForPublicSale,
    ListAccountForPrivateSale,
    DelistAccount,
    BuyAccountBuyer,
    BuyAccountTarget,
    BuyAccountSeller,
    ChangeKeySigned,
    ChangeAccountInfo,
    MultiOperationGlobal,
    MultiOperationAccountInfo,
    DataGlobalInfo,
    DataSender,
    DataSigner,
    DataReceiver,
    Unknown(u16),
}

impl OperationSubType {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::RewardMiner,
            2 => Self::RewardDeveloper,
            11 => Self::TransactionSender,
            12 => Self::TransactionReceiver,
            13 => Self::BuyTransactionBuyer,
            14 => Self::BuyTransactionTarget,
            15 => Self::BuyTransactionSeller,
            21 => Self::ChangeKey,
            31 => Self::Recover,
            41 => Self::ListAccountForPublicSale,
            42 => Self::ListAccountForPrivateSale,
            51 => Self::DelistAccount,
            61 => Self::BuyAccountBuyer,
            62 => Self::BuyAccountTarget,
            63 => Self::BuyAccountSeller,
            71 => Self::ChangeKeySigned,
            81 => Self::ChangeAccountInfo,
            91 => Self::MultiOperationGlobal,
            92 => Self::MultiOperationAccountInfo,
            101 => Self::DataGlobalInfo,
            102 => Self::DataSender,
            103 => Self::DataSigner,
            104 => Self::DataReceiver,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::RewardMiner => 1,
            Self::RewardDeveloper => 2,
            Self::TransactionSender => 11,
            Self::TransactionReceiver => 12,
            Self::BuyTransactionBuyer => 13,
            Self::BuyTransactionTarget => 14,
            Self::BuyTransactionSeller => 15,
            Self::ChangeKey => 21,
            Self::Recover => 31,
            Self::ListAccountForPublicSale => 41,
            Self::ListAccountForPrivateSale => 42,
            Self::DelistAccount => 51,
            Self::BuyAccountBuyer => 61,
            Self::BuyAccountTarget => 62,
            Self::BuyAccountSeller => 63,
            Self::ChangeKeySigned => 71,
            Self::ChangeAccountInfo => 81,
            Self::MultiOperationGlobal => 91,
            Self::MultiOperationAccountInfo => 92,
            Self::DataGlobalInfo => 101,
            Self::DataSender => 102,
            Self::DataSigner => 103,
            Self::DataReceiver => 104,
            Self::Unknown(code) => *code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Serialize for OperationSubType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for OperationSubType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u16::deserialize(deserializer).map(Self::from_code)
    }
}
