//! Payload encryption, message signing and E-PASA objects.

use pasc_types::{from_hex, PayloadEncode, PayloadMethod, PayloadType, TypesError};
use serde::{Deserialize, Serialize};

/// Result of `payloaddecrypt`.
///
/// `result` is false when none of the wallet keys or passwords opened the
/// payload; the other fields are then absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptedPayload {
    pub result: bool,
    #[serde(default)]
    pub enc_payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unenc_payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unenc_hexpayload: Option<String>,
    /// `key` or `pwd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwd: Option<String>,
}

/// Result of `signmessage`, and the input of `verifysign`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSignature {
    /// The signed message, hex encoded.
    pub digest: String,
    pub enc_pubkey: String,
    pub signature: String,
}

impl MessageSignature {
    pub fn message(&self) -> Result<String, TypesError> {
        from_hex(&self.digest)
    }
}

/// An extended PASA: account number with an attached payload description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EPasa {
    pub account_epasa: String,
    pub account: u32,
    #[serde(default)]
    pub payload_method: PayloadMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwd: Option<String>,
    #[serde(default)]
    pub payload_encode: PayloadEncode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_epasa_classic: Option<String>,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub payload_type: PayloadType,
    #[serde(default)]
    pub is_pay_to_key: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_message_digest_is_hex_text() {
        let sig = MessageSignature {
            digest: "4D657373616765".into(),
            enc_pubkey: "CA02".into(),
            signature: "2000".into(),
        };
        assert_eq!(sig.message().unwrap(), "Message");
    }

    #[test]
    fn parses_decrypt_result() {
        let json = r#"{"unenc_payload":"DODO","unenc_hexpayload":"444F444F","payload_method":"pwd","pwd":"mypassword","result":true,"enc_payload":"53616C7465645F5F8312C92E9BFFD6068ADA9F2F7CEA90505B50CE2CAE995C28"}"#;
        let d: DecryptedPayload = serde_json::from_str(json).unwrap();
        assert!(d.result);
        assert_eq!(d.unenc_payload.as_deref(), Some("DODO"));
        assert_eq!(d.pwd.as_deref(), Some("mypassword"));
    }

    #[test]
    fn parses_epasa() {
        let json = r#"{"account_epasa":"52-11[\"test\"]","account":52,"payload_method":"none","payload_encode":"string","account_epasa_classic":"52-11[\"test\"]","payload":"74657374","payload_type":17,"is_pay_to_key":false}"#;
        let e: EPasa = serde_json::from_str(json).unwrap();
        assert_eq!(e.account, 52);
        assert_eq!(e.payload_encode, PayloadEncode::String);
        assert_eq!(e.payload_type.bits(), 17);
    }
}
