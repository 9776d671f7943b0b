//! # chains-rpc — HTTP JSON-RPC Transport for Endpoint Probing
//!
//! Implements the `chains-core` [`RpcConnector`] / [`EthereumRpc`] contract
//! over HTTP with a blocking `reqwest` client. Requests are sent one at a
//! time; there are no retries and the transport's default timeout applies.
//!
//! ```no_run
//! use chains_core::RecordValidator;
//! use chains_rpc::HttpConnector;
//!
//! # fn main() -> Result<(), chains_rpc::RpcError> {
//! let validator = RecordValidator::new(HttpConnector::new()?);
//! # Ok(())
//! # }
//! ```
//!
//! [`RpcConnector`]: chains_core::RpcConnector
//! [`EthereumRpc`]: chains_core::EthereumRpc

pub mod client;
pub mod error;
pub mod jsonrpc;

pub use client::{HttpConnector, HttpEthereumRpc};
pub use error::RpcError;
