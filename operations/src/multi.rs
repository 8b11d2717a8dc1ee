//! Multi-operation snapshots and the signing state machine.
//!
//! Every `multioperation*` call returns a fresh [`MultiOperation`] that
//! replaces the caller's previous view. The client never edits a snapshot;
//! it reads the counts the node reports and checks them against the party
//! lists it received alongside.

use pasc_types::Pasc;
use serde::{Deserialize, Serialize};

use crate::error::OperationError;
use crate::party::{Changer, Receiver, Sender};
use crate::raw::RawOperations;

/// Signing progress of a multi-operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiOperationState {
    /// No parties yet.
    Empty,
    /// Has parties and a digest; some signatures are missing.
    Composed,
    /// Every sender and changer has signed.
    FullySigned,
    /// Handed to `executeoperations`. Terminal: the container is spent.
    /// Only a session reports this; a snapshot alone cannot know it.
    Submitted,
}

/// A multi-operation as last reported by the node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiOperation {
    pub rawoperations: RawOperations,
    #[serde(default)]
    pub senders: Vec<Sender>,
    #[serde(default)]
    pub receivers: Vec<Receiver>,
    #[serde(default)]
    pub changers: Vec<Changer>,
    /// Total credited to receivers.
    pub amount: Pasc,
    pub fee: Pasc,
    /// Hash to sign. Changes whenever the party lists change.
    #[serde(default)]
    pub digest: String,
    pub senders_count: u32,
    pub receivers_count: u32,
    pub changesinfo_count: u32,
    pub signed_count: u32,
    pub not_signed_count: u32,
    pub signed_can_execute: bool,
}

impl MultiOperation {
    pub fn state(&self) -> MultiOperationState {
        if self.senders.is_empty() && self.receivers.is_empty() && self.changers.is_empty() {
            MultiOperationState::Empty
        } else if self.not_signed_count == 0 && self.signed_can_execute {
            MultiOperationState::FullySigned
        } else {
            MultiOperationState::Composed
        }
    }

    /// Parties that have to sign: every sender and every changer.
    /// Receivers never sign.
    pub fn required_signatures(&self) -> u32 {
        self.senders_count + self.changesinfo_count
    }

    pub fn has_signatures(&self) -> bool {
        self.signed_count > 0
    }

    /// Sum of sender amounts as positive magnitudes.
    pub fn total_sent(&self) -> Pasc {
        self.senders.iter().map(|s| s.amount.abs()).sum()
    }

    pub fn total_received(&self) -> Pasc {
        self.receivers.iter().map(|r| r.amount).sum()
    }

    /// What the senders put in minus what the receivers get.
    pub fn computed_fee(&self) -> Pasc {
        self.total_sent() - self.total_received()
    }

    /// Receivers must not get more than the senders put in.
    pub fn check_conservation(&self) -> Result<(), OperationError> {
        let sent = self.total_sent();
        let received = self.total_received();
        if sent < received {
            return Err(OperationError::Conservation { sent, received });
        }
        if self.fee.is_negative() {
            return Err(OperationError::NegativeFee(self.fee));
        }
        Ok(())
    }

    /// Check the node's counters against the party lists and each other,
    /// and the reported `amount` and `fee` against the party totals.
    pub fn validate(&self) -> Result<(), OperationError> {
        check_count("senders_count", self.senders_count, self.senders.len())?;
        check_count("receivers_count", self.receivers_count, self.receivers.len())?;
        check_count("changesinfo_count", self.changesinfo_count, self.changers.len())?;

        let required = self.required_signatures();
        if self.signed_count + self.not_signed_count != required {
            return Err(OperationError::SignatureTally {
                signed: self.signed_count,
                not_signed: self.not_signed_count,
                required,
            });
        }
        if self.signed_can_execute && self.not_signed_count != 0 {
            return Err(OperationError::ExecutableWhileUnsigned(self.not_signed_count));
        }
        self.check_conservation()?;

        let computed = self.computed_fee();
        if self.fee != computed {
            return Err(OperationError::FeeMismatch {
                reported: self.fee,
                computed,
            });
        }
        let received = self.total_received();
        if self.amount != received {
            return Err(OperationError::AmountMismatch {
                reported: self.amount,
                computed: received,
            });
        }
        Ok(())
    }

    /// Necessary for submission, not sufficient: the node validates again.
    pub fn can_execute(&self) -> bool {
        self.signed_can_execute && self.not_signed_count == 0
    }
}

fn check_count(field: &'static str, declared: u32, actual: usize) -> Result<(), OperationError> {
    if declared as usize == actual {
        Ok(())
    } else {
        Err(OperationError::CountMismatch {
            field,
            declared,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composed() -> MultiOperation {
        MultiOperation {
            rawoperations: RawOperations::new("01000000"),
            senders: vec![
                Sender::new(32320, Pasc::from_molinas(-10_001)),
                Sender::new(32321, Pasc::from_pasc(-1)),
            ],
            receivers: vec![Receiver::new(52, Pasc::from_pasc(2))],
            changers: vec![],
            amount: Pasc::from_pasc(2),
            fee: Pasc::from_molinas(1),
            digest: "9B289293F9D4912A9350B7921990E434529FDFE1B80827524830AD619330FEBF".into(),
            senders_count: 2,
            receivers_count: 1,
            changesinfo_count: 0,
            signed_count: 0,
            not_signed_count: 2,
            signed_can_execute: false,
        }
    }

    #[test]
    fn fee_is_sent_minus_received() {
        let m = composed();
        assert_eq!(m.total_sent(), Pasc::from_molinas(20_001));
        assert_eq!(m.computed_fee(), Pasc::from_molinas(1));
        assert_eq!(m.computed_fee(), m.fee);
        assert!(m.validate().is_ok());
        assert_eq!(m.state(), MultiOperationState::Composed);
        assert!(!m.can_execute());
    }

    #[test]
    fn fully_signed_can_execute() {
        let mut m = composed();
        m.signed_count = 2;
        m.not_signed_count = 0;
        m.signed_can_execute = true;
        assert!(m.validate().is_ok());
        assert_eq!(m.state(), MultiOperationState::FullySigned);
        assert!(m.can_execute());
        assert_eq!(m.signed_count, m.required_signatures());
    }

    #[test]
    fn empty_snapshot() {
        let m = MultiOperation::default();
        assert_eq!(m.state(), MultiOperationState::Empty);
        assert_eq!(m.required_signatures(), 0);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn detects_count_mismatch() {
        let mut m = composed();
        m.receivers_count = 2;
        assert_eq!(
            m.validate(),
            Err(OperationError::CountMismatch {
                field: "receivers_count",
                declared: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn detects_bad_signature_tally() {
        let mut m = composed();
        m.signed_count = 1;
        assert!(matches!(
            m.validate(),
            Err(OperationError::SignatureTally { required: 2, .. })
        ));
        let mut m = composed();
        m.signed_can_execute = true;
        assert_eq!(m.validate(), Err(OperationError::ExecutableWhileUnsigned(2)));
    }

    #[test]
    fn detects_misreported_fee_and_amount() {
        let mut m = composed();
        m.fee = Pasc::from_pasc(5);
        assert_eq!(
            m.validate(),
            Err(OperationError::FeeMismatch {
                reported: Pasc::from_pasc(5),
                computed: Pasc::from_molinas(1),
            })
        );

        let mut m = composed();
        m.amount = Pasc::from_pasc(3);
        assert_eq!(
            m.validate(),
            Err(OperationError::AmountMismatch {
                reported: Pasc::from_pasc(3),
                computed: Pasc::from_pasc(2),
            })
        );
    }

    #[test]
    fn detects_overspend() {
        let mut m = composed();
        m.receivers[0].amount = Pasc::from_pasc(3);
        assert!(matches!(
            m.check_conservation(),
            Err(OperationError::Conservation { .. })
        ));
    }

    #[test]
    fn changers_count_toward_signatures() {
        let mut m = composed();
        m.changers.push(Changer::new(32321).with_new_name("n"));
        m.changesinfo_count = 1;
        m.not_signed_count = 3;
        assert_eq!(m.required_signatures(), 3);
        assert!(m.validate().is_ok());
    }
}
