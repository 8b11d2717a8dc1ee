//! Shared utilities for the PascalCoin client crates.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
