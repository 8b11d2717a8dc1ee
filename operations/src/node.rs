//! Node status and peer connection objects.

use pasc_types::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetProtocol {
    pub ver: u16,
    pub ver_a: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetStats {
    pub active: u32,
    pub connectors: u32,
    pub servers: u32,
    pub servers_t: u32,
    pub total: u32,
    pub tconnectors: u32,
    pub tservers: u32,
    pub breceived: u64,
    pub bsend: u64,
    #[serde(default)]
    pub ips: u32,
}

/// A known node server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeServer {
    pub ip: String,
    pub port: u16,
    pub lastcon: Timestamp,
    pub attempts: u32,
}

/// Result of `nodestatus`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub ready: bool,
    #[serde(default)]
    pub ready_s: String,
    #[serde(default)]
    pub status_s: String,
    pub port: u16,
    pub locked: bool,
    pub timestamp: Timestamp,
    pub version: String,
    pub netprotocol: NetProtocol,
    pub blocks: u32,
    #[serde(default)]
    pub sbh: String,
    #[serde(default)]
    pub pow: String,
    pub netstats: NetStats,
    #[serde(default)]
    pub openssl: String,
    #[serde(default)]
    pub nodeservers: Vec<NodeServer>,
    #[serde(default)]
    pub datafolder: String,
}

/// One entry of `getconnections`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// True when the peer connected to us.
    pub server: bool,
    pub ip: String,
    pub port: u16,
    /// Seconds connected.
    pub secs: u64,
    pub sent: u64,
    pub recv: u64,
    pub appver: String,
    pub netver: u16,
    pub netver_a: u16,
    /// Peer clock minus ours, in seconds.
    pub timediff: i64,
}
