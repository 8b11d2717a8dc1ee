//! HEXASTRING codec.
//!
//! Every payload field on the wire is an uppercase hex string of raw bytes.
//! Text handed to the client is UTF-8 encoded before hexing.

use crate::error::TypesError;

/// Hex-encode the UTF-8 bytes of `text` in uppercase. Empty input stays empty.
pub fn to_hex(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    hex::encode_upper(text.as_bytes())
}

/// Same as [`to_hex`] but passes `None` through untouched.
pub fn to_hex_opt(text: Option<&str>) -> Option<String> {
    text.map(to_hex)
}

/// Decode a hex string into raw bytes. Accepts either letter case.
pub fn decode_bytes(hexa: &str) -> Result<Vec<u8>, TypesError> {
    hex::decode(hexa).map_err(|e| TypesError::Decode(e.to_string()))
}

/// Decode a hex string into UTF-8 text.
pub fn from_hex(hexa: &str) -> Result<String, TypesError> {
    let bytes = decode_bytes(hexa)?;
    String::from_utf8(bytes).map_err(|e| TypesError::Utf8(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_uppercase() {
        assert_eq!(to_hex("test"), "74657374");
        assert_eq!(to_hex("Message"), "4D657373616765");
    }

    #[test]
    fn empty_maps_to_itself() {
        assert_eq!(to_hex(""), "");
        assert_eq!(from_hex("").unwrap(), "");
        assert_eq!(to_hex_opt(None), None);
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(from_hex("ABC"), Err(TypesError::Decode(_))));
        assert!(matches!(from_hex("ZZ"), Err(TypesError::Decode(_))));
        assert!(matches!(from_hex("FF"), Err(TypesError::Utf8(_))));
    }

    #[test]
    fn lowercase_input_decodes() {
        assert_eq!(from_hex("4d657373616765").unwrap(), "Message");
    }
}
