use pasc_types::{Pasc, TypesError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("account {account}: amount must be positive, got {amount}")]
    NonPositiveAmount { account: u32, amount: Pasc },

    #[error("changer for account {account} changes nothing")]
    EmptyChange { account: u32 },

    #[error("fee must not be negative, got {0}")]
    NegativeFee(Pasc),

    #[error("receivers get {received} but senders only put in {sent}")]
    Conservation { sent: Pasc, received: Pasc },

    #[error("reported fee {reported} differs from senders minus receivers ({computed})")]
    FeeMismatch { reported: Pasc, computed: Pasc },

    #[error("reported amount {reported} differs from the receivers' total ({computed})")]
    AmountMismatch { reported: Pasc, computed: Pasc },

    #[error("{field} is {declared} but the snapshot lists {actual}")]
    CountMismatch {
        field: &'static str,
        declared: u32,
        actual: usize,
    },

    #[error("signed ({signed}) + not signed ({not_signed}) != required signatures ({required})")]
    SignatureTally {
        signed: u32,
        not_signed: u32,
        required: u32,
    },

    #[error("snapshot reports executable with {0} signatures missing")]
    ExecutableWhileUnsigned(u32),

    #[error("malformed raw operations: {0}")]
    MalformedRaw(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}
