use proptest::prelude::*;

use pasc_types::{from_hex, to_hex, Pasc, PayloadType};

proptest! {
    /// Hex codec roundtrip: from_hex(to_hex(s)) == s for printable ASCII.
    #[test]
    fn hex_roundtrip_ascii(s in "[ -~]{0,64}") {
        prop_assert_eq!(from_hex(&to_hex(&s)).unwrap(), s);
    }

    /// Hex codec roundtrip holds for arbitrary UTF-8 too.
    #[test]
    fn hex_roundtrip_utf8(s in "\\PC{0,32}") {
        prop_assert_eq!(from_hex(&to_hex(&s)).unwrap(), s);
    }

    /// to_hex output is always uppercase and twice the byte length.
    #[test]
    fn hex_is_uppercase(s in "[ -~]{1,64}") {
        let hexa = to_hex(&s);
        prop_assert_eq!(hexa.len(), s.len() * 2);
        prop_assert_eq!(hexa.to_uppercase(), hexa);
    }

    /// Every payload type that decomposes recomposes to the same byte.
    #[test]
    fn payload_type_bitmask_roundtrip(bits in 0u8..=255) {
        let pt = PayloadType::from_bits(bits);
        if let Ok(parts) = pt.decompose() {
            prop_assert_eq!(PayloadType::compose(parts).bits(), bits);
        }
    }

    /// Valid payload types have exactly one encryption flag (or none at all for 0).
    #[test]
    fn valid_payload_type_has_single_encryption(bits in 0u8..=255) {
        let pt = PayloadType::from_bits(bits);
        if pt.validate().is_ok() && bits != 0 {
            prop_assert_eq!((bits & 0x0F).count_ones(), 1);
            prop_assert!((bits & 0x70).count_ones() <= 1);
        }
    }

    /// Display/FromStr roundtrip for amounts.
    #[test]
    fn pasc_display_parse_roundtrip(molinas in -1_000_000_000_000i64..1_000_000_000_000) {
        let p = Pasc::from_molinas(molinas);
        prop_assert_eq!(p.to_string().parse::<Pasc>().unwrap(), p);
    }

    /// JSON roundtrip for amounts within the f64-exact range.
    #[test]
    fn pasc_json_roundtrip(molinas in -100_000_000_000i64..100_000_000_000) {
        let p = Pasc::from_molinas(molinas);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pasc = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, p);
    }
}
