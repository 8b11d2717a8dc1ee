//! Public key references and elliptic curve identifiers.
//!
//! The client never holds private key material. A key is always referenced
//! either by its node encoding (`enc_pubkey`, hex) or by its Base58 form
//! (`b58_pubkey`); the node resolves the reference against its wallet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// OpenSSL NID of the curve a key lives on (`ec_nid`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    Secp256k1,
    Secp384r1,
    Secp521r1,
    Sect283k1,
    Other(u16),
}

impl CurveId {
    pub fn from_nid(nid: u16) -> Self {
        match nid {
            714 => Self::Secp256k1,
            715 => Self::Secp384r1,
            716 => Self::Secp521r1,
            729 => Self::Sect283k1,
            other => Self::Other(other),
        }
    }

    pub fn nid(&self) -> u16 {
        match self {
            Self::Secp256k1 => 714,
            Self::Secp384r1 => 715,
            Self::Secp521r1 => 716,
            Self::Sect283k1 => 729,
            Self::Other(nid) => *nid,
        }
    }
}

impl Serialize for CurveId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.nid())
    }
}

impl<'de> Deserialize<'de> for CurveId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u16::deserialize(deserializer).map(Self::from_nid)
    }
}

/// A reference to a public key in one of its two textual forms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyRef {
    /// Node encoding, e.g. `CA0220...`.
    Encoded(String),
    /// Base58 form, e.g. `3Ghhbop8...`.
    Base58(String),
}

impl KeyRef {
    pub fn encoded(key: impl Into<String>) -> Self {
        Self::Encoded(key.into())
    }

    pub fn base58(key: impl Into<String>) -> Self {
        Self::Base58(key.into())
    }

    /// Split into the `(enc_pubkey, b58_pubkey)` parameter pair.
    pub fn as_params(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Self::Encoded(k) => (Some(k.as_str()), None),
            Self::Base58(k) => (None, Some(k.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_nids() {
        let c: CurveId = serde_json::from_str("714").unwrap();
        assert_eq!(c, CurveId::Secp256k1);
        assert_eq!(CurveId::from_nid(716), CurveId::Secp521r1);
        assert_eq!(CurveId::from_nid(1).nid(), 1);
        assert_eq!(serde_json::to_string(&CurveId::Sect283k1).unwrap(), "729");
    }

    #[test]
    fn key_ref_params() {
        assert_eq!(KeyRef::encoded("CA02").as_params(), (Some("CA02"), None));
        assert_eq!(KeyRef::base58("3Ghh").as_params(), (None, Some("3Ghh")));
    }
}
