//! JSON-RPC client for PascalCoin nodes.
//!
//! [`PascClient`] turns each node method into one typed async call that
//! always yields a [`Response`]. Failures below JSON-RPC (connection,
//! timeout, undecodable body) are folded into an `InternalError` response so
//! callers handle one shape.
//!
//! - [`client`]: call ids and the invocation path
//! - [`api`]: one method per node endpoint
//! - [`params`]: request parameter objects
//! - [`session`]: multi-operation signing cycle
//! - [`envelope`], [`error`]: response envelope and error codes
//! - [`config`], [`http`]: HTTP transport and its configuration

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod params;
pub mod session;

pub use client::PascClient;
pub use config::ClientConfig;
pub use envelope::{Response, JSONRPC_VERSION};
pub use error::{ClientError, ErrorCode, RpcErrorObject};
pub use http::HttpTransport;
pub use params::{
    AccountOperationsQuery, BuyAccount, ChangeAccountInfo, ChangeKey, ChangeKeys, ColdKeys,
    ColdSign, DelistAccountForSale, FindAccounts, FindDataOperations, KeyParams,
    ListAccountForSale, Page, PayloadParams, SendData, SendTo, WalletAccountsFilter,
};
pub use session::MultiOperationSession;
