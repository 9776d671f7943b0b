//! # Network Prober
//!
//! Contacts each RPC endpoint of a record, in listed order, and asks for
//! the client version, the current block number and the current gas price.
//!
//! Probing is diagnostic only. Every failure (bad URL, refused connection,
//! HTTP error, JSON-RPC error, malformed quantity) lands in the returned
//! [`EndpointProbe`] and is logged; nothing here can fail a validation.
//!
//! The transport is abstracted by [`RpcConnector`] / [`EthereumRpc`] so the
//! core carries no HTTP stack. `chains-rpc` provides the HTTP implementation.

use std::fmt;

use num_bigint::BigUint;

/// A JSON-RPC client bound to one endpoint.
pub trait EthereumRpc {
    /// Transport or protocol failure.
    type Error: fmt::Display;

    /// `web3_clientVersion`.
    fn client_version(&self) -> Result<String, Self::Error>;

    /// `eth_blockNumber`, as returned (hex quantity).
    fn block_number(&self) -> Result<String, Self::Error>;

    /// `eth_gasPrice`, as returned (hex quantity).
    fn gas_price(&self) -> Result<String, Self::Error>;
}

/// Opens [`EthereumRpc`] clients for endpoint URLs.
pub trait RpcConnector {
    /// The client type produced.
    type Client: EthereumRpc;
    /// Why a client could not be opened.
    type Error: fmt::Display;

    /// Open a client for `endpoint`.
    fn connect(&self, endpoint: &str) -> Result<Self::Client, Self::Error>;
}

/// Connector for runs without network access. Every connection fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNetwork;

/// Client type of [`NoNetwork`]. Never constructed.
#[derive(Debug)]
pub enum Unreachable {}

impl EthereumRpc for Unreachable {
    type Error = &'static str;

    fn client_version(&self) -> Result<String, Self::Error> {
        match *self {}
    }

    fn block_number(&self) -> Result<String, Self::Error> {
        match *self {}
    }

    fn gas_price(&self) -> Result<String, Self::Error> {
        match *self {}
    }
}

impl RpcConnector for NoNetwork {
    type Client = Unreachable;
    type Error = &'static str;

    fn connect(&self, _endpoint: &str) -> Result<Self::Client, Self::Error> {
        Err("network access disabled")
    }
}

/// What one endpoint reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointProbe {
    /// The endpoint URL as written in the record.
    pub endpoint: String,
    /// `web3_clientVersion` result.
    pub client_version: Option<String>,
    /// Decoded `eth_blockNumber`.
    pub block_number: Option<BigUint>,
    /// Decoded `eth_gasPrice`.
    pub gas_price: Option<BigUint>,
    /// Failures met while probing, in order.
    pub diagnostics: Vec<String>,
}

impl EndpointProbe {
    /// Whether every request answered with a usable value.
    pub fn is_healthy(&self) -> bool {
        self.diagnostics.is_empty()
            && self.client_version.is_some()
            && self.block_number.is_some()
            && self.gas_price.is_some()
    }
}

/// Probes endpoints through a connector.
#[derive(Debug, Clone, Default)]
pub struct NetworkProber<C> {
    connector: C,
}

impl<C: RpcConnector> NetworkProber<C> {
    /// Wrap a connector.
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Probe every endpoint sequentially, in order.
    pub fn probe_all(&self, endpoints: &[String]) -> Vec<EndpointProbe> {
        endpoints.iter().map(|e| self.probe(e)).collect()
    }

    /// Probe a single endpoint.
    pub fn probe(&self, endpoint: &str) -> EndpointProbe {
        let mut report = EndpointProbe {
            endpoint: endpoint.to_string(),
            ..Default::default()
        };

        tracing::info!(endpoint, "connecting to endpoint");
        let client = match self.connector.connect(endpoint) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "failed to connect");
                report.diagnostics.push(format!("connect: {e}"));
                return report;
            }
        };

        let diagnostics = &mut report.diagnostics;
        report.client_version =
            capture(diagnostics, "web3_clientVersion", client.client_version());
        report.block_number = capture(diagnostics, "eth_blockNumber", client.block_number())
            .and_then(|raw| decode_or_note(diagnostics, "eth_blockNumber", &raw));
        report.gas_price = capture(diagnostics, "eth_gasPrice", client.gas_price())
            .and_then(|raw| decode_or_note(diagnostics, "eth_gasPrice", &raw));

        tracing::info!(
            endpoint,
            client = report.client_version.as_deref().unwrap_or("unavailable"),
            block_number = %display_quantity(report.block_number.as_ref()),
            gas_price = %display_quantity(report.gas_price.as_ref()),
            "probe finished"
        );

        report
    }
}

fn capture<E: fmt::Display>(
    diagnostics: &mut Vec<String>,
    method: &str,
    result: Result<String, E>,
) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(method, error = %e, "rpc request failed");
            diagnostics.push(format!("{method}: {e}"));
            None
        }
    }
}

fn decode_or_note(diagnostics: &mut Vec<String>, method: &str, raw: &str) -> Option<BigUint> {
    let decoded = decode_quantity(raw);
    if decoded.is_none() {
        tracing::debug!(method, raw, "result is not a hex quantity");
        diagnostics.push(format!("{method}: not a hex quantity: {raw:?}"));
    }
    decoded
}

/// Decode a `0x`-prefixed hex quantity of any width.
///
/// Anything without the prefix or with an empty or non-hex body yields
/// `None`.
pub fn decode_quantity(raw: &str) -> Option<BigUint> {
    let hex = raw.strip_prefix("0x")?;
    // parse_bytes also takes `+` and `_` separators.
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    BigUint::parse_bytes(hex.as_bytes(), 16)
}

/// Render a decoded quantity, or `unavailable`.
pub fn display_quantity(value: Option<&BigUint>) -> String {
    value.map_or_else(|| "unavailable".to_string(), BigUint::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Scripted responses per endpoint; `None` means the connection fails.
    struct Scripted(HashMap<&'static str, Option<[Result<&'static str, &'static str>; 3]>>);

    struct ScriptedClient([Result<&'static str, &'static str>; 3]);

    impl EthereumRpc for ScriptedClient {
        type Error = &'static str;

        fn client_version(&self) -> Result<String, Self::Error> {
            self.0[0].map(str::to_string)
        }

        fn block_number(&self) -> Result<String, Self::Error> {
            self.0[1].map(str::to_string)
        }

        fn gas_price(&self) -> Result<String, Self::Error> {
            self.0[2].map(str::to_string)
        }
    }

    impl RpcConnector for Scripted {
        type Client = ScriptedClient;
        type Error = &'static str;

        fn connect(&self, endpoint: &str) -> Result<Self::Client, Self::Error> {
            match self.0.get(endpoint) {
                Some(Some(answers)) => Ok(ScriptedClient(*answers)),
                _ => Err("connection refused"),
            }
        }
    }

    #[test]
    fn decode_quantity_hex() {
        assert_eq!(decode_quantity("0x0"), Some(BigUint::from(0u32)));
        assert_eq!(decode_quantity("0x10"), Some(BigUint::from(16u32)));
        assert_eq!(decode_quantity("0xDeadBeef"), Some(BigUint::from(0xdead_beef_u32)));
    }

    #[test]
    fn decode_quantity_requires_prefix() {
        assert_eq!(decode_quantity("10"), None);
        assert_eq!(decode_quantity("0X10"), None);
    }

    #[test]
    fn decode_quantity_rejects_malformed() {
        assert_eq!(decode_quantity("0x"), None);
        assert_eq!(decode_quantity("0xzz"), None);
        assert_eq!(decode_quantity("0x-1"), None);
        assert_eq!(decode_quantity("0x+1"), None);
        assert_eq!(decode_quantity("0x1_0"), None);
    }

    #[test]
    fn decode_quantity_beyond_256_bits() {
        let two_pow_256 = BigUint::from(1u32) << 256usize;
        assert_eq!(decode_quantity(&format!("0x1{}", "0".repeat(64))), Some(two_pow_256));

        let wide = decode_quantity(&format!("0x{}", "f".repeat(80))).unwrap();
        assert_eq!(wide.bits(), 320);
        assert_eq!(
            display_quantity(decode_quantity(&format!("0x1{}", "0".repeat(64))).as_ref()),
            "115792089237316195423570985008687907853269984665640564039457584007913129639936"
        );
    }

    #[test]
    fn display_quantity_decimal() {
        assert_eq!(display_quantity(Some(&BigUint::from(255u32))), "255");
        assert_eq!(display_quantity(None), "unavailable");
    }

    #[test]
    fn probe_healthy_endpoint() {
        let connector = Scripted(HashMap::from([(
            "https://rpc.example",
            Some([Ok("Geth/v1.13.0"), Ok("0x12a05f200"), Ok("0x3b9aca00")]),
        )]));
        let report = NetworkProber::new(connector).probe("https://rpc.example");
        assert!(report.is_healthy());
        assert_eq!(report.client_version.as_deref(), Some("Geth/v1.13.0"));
        assert_eq!(report.block_number, Some(BigUint::from(5_000_000_000u64)));
        assert_eq!(report.gas_price, Some(BigUint::from(1_000_000_000u64)));
    }

    #[test]
    fn probe_connection_failure_is_a_diagnostic() {
        let report = NetworkProber::new(Scripted(HashMap::new())).probe("https://down.example");
        assert!(!report.is_healthy());
        assert_eq!(report.client_version, None);
        assert_eq!(report.diagnostics, ["connect: connection refused"]);
    }

    #[test]
    fn probe_partial_failures_keep_other_fields() {
        let connector = Scripted(HashMap::from([(
            "https://flaky.example",
            Some([Err("method not found"), Ok("1234"), Ok("0x1")]),
        )]));
        let report = NetworkProber::new(connector).probe("https://flaky.example");
        assert_eq!(report.client_version, None);
        assert_eq!(report.block_number, None);
        assert_eq!(report.gas_price, Some(BigUint::from(1u64)));
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report.diagnostics[0].starts_with("web3_clientVersion"));
        assert!(report.diagnostics[1].starts_with("eth_blockNumber"));
    }

    #[test]
    fn probe_all_preserves_order() {
        let connector = Scripted(HashMap::from([(
            "https://b.example",
            Some([Ok("b"), Ok("0x2"), Ok("0x2")]),
        )]));
        let endpoints = vec!["https://a.example".to_string(), "https://b.example".to_string()];
        let reports = NetworkProber::new(connector).probe_all(&endpoints);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].endpoint, "https://a.example");
        assert!(!reports[0].is_healthy());
        assert_eq!(reports[1].endpoint, "https://b.example");
        assert!(reports[1].is_healthy());
    }

    #[test]
    fn no_network_never_connects() {
        let report = NetworkProber::new(NoNetwork).probe("https://rpc.example");
        assert_eq!(report.diagnostics, ["connect: network access disabled"]);
    }
}
