//! Property tests for multi-operation bookkeeping.

use pasc_operations::{MultiOperation, OperationError, Receiver, Sender};
use pasc_types::Pasc;
use proptest::prelude::*;

fn snapshot(sent: &[i64], received: &[i64]) -> MultiOperation {
    let senders: Vec<Sender> = sent
        .iter()
        .enumerate()
        .map(|(i, m)| Sender::new(i as u32, Pasc::from_molinas(-m)))
        .collect();
    let receivers: Vec<Receiver> = received
        .iter()
        .enumerate()
        .map(|(i, m)| Receiver::new(1000 + i as u32, Pasc::from_molinas(*m)))
        .collect();
    let mut m = MultiOperation {
        senders_count: senders.len() as u32,
        receivers_count: receivers.len() as u32,
        not_signed_count: senders.len() as u32,
        senders,
        receivers,
        ..Default::default()
    };
    m.amount = m.total_received();
    m.fee = m.computed_fee();
    m
}

proptest! {
    #[test]
    fn fee_never_negative_when_senders_cover_receivers(
        received in prop::collection::vec(1i64..1_000_000, 1..5),
        extra in 0i64..1_000,
    ) {
        let total: i64 = received.iter().sum();
        let sent = vec![total + extra];
        let m = snapshot(&sent, &received);
        prop_assert!(m.check_conservation().is_ok());
        prop_assert_eq!(m.computed_fee(), Pasc::from_molinas(extra));
        prop_assert!(m.validate().is_ok());
    }

    #[test]
    fn overspending_is_rejected(
        received in prop::collection::vec(1i64..1_000_000, 1..5),
        short in 1i64..1_000,
    ) {
        let total: i64 = received.iter().sum();
        let sent = vec![total - short.min(total)];
        let m = snapshot(&sent, &received);
        let is_conservation_error = matches!(
            m.check_conservation(),
            Err(OperationError::Conservation { .. })
        );
        prop_assert!(is_conservation_error);
    }

    #[test]
    fn signatures_tally_with_parties(senders in 0usize..6, signed in 0usize..6) {
        let signed = signed.min(senders);
        let amounts: Vec<i64> = (0..senders).map(|_| 10).collect();
        let mut m = snapshot(&amounts, &[]);
        m.signed_count = signed as u32;
        m.not_signed_count = (senders - signed) as u32;
        m.signed_can_execute = signed == senders;
        prop_assert!(m.validate().is_ok());
        prop_assert_eq!(m.can_execute(), signed == senders);
    }
}
