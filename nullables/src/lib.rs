//! Nullable infrastructure for deterministic testing.
//!
//! The client's only external dependency is the transport. [`NullTransport`]
//! stands in for it: it records every request body, answers from canned
//! replies and never touches the network.

pub mod transport;

pub use transport::NullTransport;
