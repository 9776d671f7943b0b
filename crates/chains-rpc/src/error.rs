//! RPC transport errors.

use thiserror::Error;

/// Why an RPC request produced no usable result.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The endpoint string is not an absolute http(s) URL.
    #[error("invalid endpoint URL {endpoint}: {reason}")]
    InvalidUrl {
        /// The endpoint as written in the record.
        endpoint: String,
        /// Parser or scheme complaint.
        reason: String,
    },

    /// Connection, TLS, timeout, or body-decoding failure.
    #[error("{method} request to {endpoint} failed: {source}")]
    Transport {
        /// JSON-RPC method being called.
        method: &'static str,
        /// Target endpoint.
        endpoint: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("{method} request to {endpoint} returned HTTP {status}")]
    Status {
        /// JSON-RPC method being called.
        method: &'static str,
        /// Target endpoint.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The endpoint answered with a JSON-RPC error object.
    #[error("{method} returned JSON-RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC method being called.
        method: &'static str,
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
    },

    /// The response carried no `result` field, or a non-string one.
    #[error("{method} returned no string result")]
    MissingResult {
        /// JSON-RPC method being called.
        method: &'static str,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),
}
