use pasc_types::{CurveId, KeyRef};
use serde::{Deserialize, Serialize};

/// A public key in both its textual forms plus its curve coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(default)]
    pub enc_pubkey: String,
    #[serde(default)]
    pub b58_pubkey: String,
    pub ec_nid: CurveId,
    pub x: String,
    pub y: String,
}

impl PublicKey {
    /// Same curve point, ignoring the textual forms.
    pub fn same_point(&self, other: &PublicKey) -> bool {
        self.ec_nid == other.ec_nid
            && self.x.eq_ignore_ascii_case(&other.x)
            && self.y.eq_ignore_ascii_case(&other.y)
    }

    pub fn as_key_ref(&self) -> KeyRef {
        if self.enc_pubkey.is_empty() {
            KeyRef::base58(self.b58_pubkey.clone())
        } else {
            KeyRef::encoded(self.enc_pubkey.clone())
        }
    }
}

/// A key held by the node's wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletPublicKey {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub can_use: bool,
    #[serde(flatten)]
    pub key: PublicKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decoded_key() {
        let json = r#"{"ec_nid":714,"x":"0E60B6F76778CFE8678E30369BA7B2C38D0EC93FC3F39E61468E29FEC39F13BF","y":"572EDE3C44CF00FF86AFF651474D53CCBDF86B953F1ECE5FB8FC7BB6FA16F114","enc_pubkey":"CA0220000E60B6F76778CFE8678E30369BA7B2C38D0EC93FC3F39E61468E29FEC39F13BF2000572EDE3C44CF00FF86AFF651474D53CCBDF86B953F1ECE5FB8FC7BB6FA16F114","b58_pubkey":"3GhhbokGhwwor3R9umFLq4DhoSuLkJAoWfizpj7adrBuFDmfx6QBToBXJS4W7PyQ2k6HkhurMpQhBBSsKP4ub9v3mFHNvs4V2eeE54"}"#;
        let key: PublicKey = serde_json::from_str(json).unwrap();
        assert_eq!(key.ec_nid, CurveId::Secp256k1);
        assert!(matches!(key.as_key_ref(), KeyRef::Encoded(_)));
        let mut lower = key.clone();
        lower.x = lower.x.to_lowercase();
        lower.enc_pubkey.clear();
        assert!(key.same_point(&lower));
    }

    #[test]
    fn parses_wallet_key() {
        let json = r#"{"name":"main","can_use":true,"enc_pubkey":"CA02","b58_pubkey":"3Ghh","ec_nid":715,"x":"01","y":"02"}"#;
        let key: WalletPublicKey = serde_json::from_str(json).unwrap();
        assert!(key.can_use);
        assert_eq!(key.key.ec_nid, CurveId::Secp384r1);
    }
}
