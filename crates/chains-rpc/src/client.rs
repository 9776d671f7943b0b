//! # Blocking HTTP JSON-RPC Client
//!
//! [`HttpConnector`] owns one `reqwest::blocking::Client` and hands out
//! [`HttpEthereumRpc`] handles bound to a single endpoint URL. Each call is
//! one POST round-trip; the `result` must be a JSON string.

use std::sync::atomic::{AtomicU64, Ordering};

use chains_core::{EthereumRpc, RpcConnector};
use reqwest::blocking::Client;
use url::Url;

use crate::error::RpcError;
use crate::jsonrpc::{self, Request, Response};

/// Opens [`HttpEthereumRpc`] clients over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    http: Client,
}

impl HttpConnector {
    /// Build a connector with the transport's default settings.
    ///
    /// # Errors
    ///
    /// [`RpcError::ClientInit`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, RpcError> {
        let http = Client::builder()
            .user_agent(concat!("chains/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RpcError::ClientInit)?;
        Ok(Self { http })
    }
}

impl RpcConnector for HttpConnector {
    type Client = HttpEthereumRpc;
    type Error = RpcError;

    fn connect(&self, endpoint: &str) -> Result<Self::Client, Self::Error> {
        let url = parse_endpoint(endpoint)?;
        Ok(HttpEthereumRpc {
            http: self.http.clone(),
            url,
            next_id: AtomicU64::new(1),
        })
    }
}

/// JSON-RPC client bound to one endpoint.
#[derive(Debug)]
pub struct HttpEthereumRpc {
    http: Client,
    url: Url,
    next_id: AtomicU64,
}

impl HttpEthereumRpc {
    /// Call a parameterless method and return its string result.
    pub fn call(&self, method: &'static str) -> Result<String, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let endpoint = self.url.to_string();

        tracing::debug!(method, endpoint = %endpoint, id, "sending rpc request");

        let resp = self
            .http
            .post(self.url.clone())
            .json(&Request::new(method, id))
            .send()
            .map_err(|source| RpcError::Transport {
                method,
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                method,
                endpoint,
                status: status.as_u16(),
            });
        }

        let body: Response = resp.json().map_err(|source| RpcError::Transport {
            method,
            endpoint,
            source,
        })?;

        if let Some(error) = body.error {
            return Err(RpcError::Rpc {
                method,
                code: error.code,
                message: error.message,
            });
        }

        match body.result {
            Some(serde_json::Value::String(result)) => Ok(result),
            _ => Err(RpcError::MissingResult { method }),
        }
    }
}

impl EthereumRpc for HttpEthereumRpc {
    type Error = RpcError;

    fn client_version(&self) -> Result<String, Self::Error> {
        self.call(jsonrpc::CLIENT_VERSION)
    }

    fn block_number(&self) -> Result<String, Self::Error> {
        self.call(jsonrpc::BLOCK_NUMBER)
    }

    fn gas_price(&self) -> Result<String, Self::Error> {
        self.call(jsonrpc::GAS_PRICE)
    }
}

/// Endpoints must be absolute `http` or `https` URLs.
fn parse_endpoint(endpoint: &str) -> Result<Url, RpcError> {
    let url = Url::parse(endpoint).map_err(|e| RpcError::InvalidUrl {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RpcError::InvalidUrl {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}
