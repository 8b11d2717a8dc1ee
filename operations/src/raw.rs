//! Raw operations containers.
//!
//! The body is opaque and only the node builds or parses it. The client
//! reads exactly one thing out of it: the leading little-endian `u32`
//! holding the number of operations in the container.

use pasc_types::Pasc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::OperationError;

const COUNT_HEADER_HEX_LEN: usize = 8;

/// A hex encoded raw operations container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawOperations(String);

impl RawOperations {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of operations declared by the container header.
    pub fn operations_count(&self) -> Result<u32, OperationError> {
        let header = self
            .0
            .get(..COUNT_HEADER_HEX_LEN)
            .ok_or_else(|| OperationError::MalformedRaw("shorter than the count header".into()))?;
        let bytes = hex::decode(header).map_err(|e| OperationError::MalformedRaw(e.to_string()))?;
        let mut le = [0u8; 4];
        le.copy_from_slice(&bytes);
        Ok(u32::from_le_bytes(le))
    }
}

impl fmt::Display for RawOperations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawOperations {
    fn from(hex: String) -> Self {
        Self(hex)
    }
}

impl From<&str> for RawOperations {
    fn from(hex: &str) -> Self {
        Self(hex.to_string())
    }
}

/// The container object exchanged between signing, deleting and executing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOperation {
    pub operations: u32,
    pub amount: Pasc,
    pub fee: Pasc,
    pub rawoperations: RawOperations,
}

impl RawOperation {
    /// True when the object's count agrees with the container header.
    pub fn header_matches(&self) -> bool {
        self.rawoperations.operations_count().ok() == Some(self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_count_header() {
        let raw = RawOperations::new("0100000001000500407E0000");
        assert_eq!(raw.operations_count().unwrap(), 1);
        assert_eq!(RawOperations::new("00000000").operations_count().unwrap(), 0);
        assert_eq!(RawOperations::new("03010000AB").operations_count().unwrap(), 259);
    }

    #[test]
    fn short_or_bad_header_is_malformed() {
        assert!(matches!(
            RawOperations::new("0100").operations_count(),
            Err(OperationError::MalformedRaw(_))
        ));
        assert!(matches!(
            RawOperations::new("zz000000").operations_count(),
            Err(OperationError::MalformedRaw(_))
        ));
        assert!(RawOperations::default().operations_count().is_err());
    }

    #[test]
    fn parses_delete_result() {
        let json = r#"{"operations":0,"amount":0.0000,"amount_s":"0.0000","fee":0.0000,"fee_s":"0.0000","rawoperations":"00000000"}"#;
        let raw: RawOperation = serde_json::from_str(json).unwrap();
        assert_eq!(raw.operations, 0);
        assert_eq!(raw.amount, Pasc::ZERO);
        assert!(raw.header_matches());
    }
}
