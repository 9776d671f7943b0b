//! # Record Validation Pipeline
//!
//! [`check_record`] runs the static checks in a fixed order and stops at the
//! first violation:
//!
//! 1. `chainId` is an integer
//! 2. `chainId` equals the file name
//! 3. the extension is `json`
//! 4. `networkId` is an integer
//! 5. no extraneous fields
//! 6. no missing mandatory fields
//! 7. `ens`, when present, is `{"registry": <address>}`
//! 8. `rpc` is a list of strings (only when probing)
//!
//! Step 1 runs before the missing-field check, so a record without
//! `chainId` reports `InvalidFieldType("chainId")` rather than
//! `MissingFields`. Likewise `rpc` content is never inspected unless the
//! network is probed.
//!
//! [`RecordValidator`] adds the network probe on top, after every static
//! check has passed.

use serde_json::Value;

use crate::address::parse_address;
use crate::error::ValidationError;
use crate::fields::{extraneous_fields, missing_fields};
use crate::location::RecordLocation;
use crate::probe::{EndpointProbe, NetworkProber, NoNetwork, RpcConnector};
use crate::record::{ChainId, NetworkId, Record};

/// Successful validation of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// The record's chain ID.
    pub chain_id: ChainId,
    /// One entry per RPC endpoint, empty unless the network was probed.
    pub probes: Vec<EndpointProbe>,
}

/// Validates records and, on request, probes their RPC endpoints.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator<C = NoNetwork> {
    prober: NetworkProber<C>,
}

impl RecordValidator<NoNetwork> {
    /// A validator with no network access. Probing reports every endpoint
    /// as unreachable.
    pub fn offline() -> Self {
        Self::new(NoNetwork)
    }
}

impl<C: RpcConnector> RecordValidator<C> {
    /// A validator probing through `connector`.
    pub fn new(connector: C) -> Self {
        Self {
            prober: NetworkProber::new(connector),
        }
    }

    /// Validate one record.
    ///
    /// Static checks run first. When `probe_network` is set and they all
    /// pass, each RPC endpoint is probed; probe failures only show up in
    /// [`ValidationReport::probes`].
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] met, in pipeline order.
    pub fn validate(
        &self,
        location: &str,
        record: &Record,
        probe_network: bool,
    ) -> Result<ValidationReport, ValidationError> {
        tracing::info!(location, "processing record");

        let checked = check_record(location, record, probe_network).inspect_err(|e| {
            tracing::debug!(location, kind = e.kind(), error = %e, "record rejected");
        })?;

        let probes = if probe_network {
            self.prober.probe_all(&checked.rpc_endpoints)
        } else {
            Vec::new()
        };

        Ok(ValidationReport {
            chain_id: checked.chain_id,
            probes,
        })
    }
}

/// Output of the static checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRecord {
    /// The record's chain ID.
    pub chain_id: ChainId,
    /// The record's network ID.
    pub network_id: NetworkId,
    /// RPC endpoints, in order. Empty unless `probe_network` was set.
    pub rpc_endpoints: Vec<String>,
}

/// Run the static checks on one record.
///
/// # Errors
///
/// The first [`ValidationError`] met, in pipeline order.
pub fn check_record(
    location: &str,
    record: &Record,
    probe_network: bool,
) -> Result<CheckedRecord, ValidationError> {
    let chain_id = ChainId::from_record(record)?;

    let location = RecordLocation::parse(location);
    if chain_id.as_str() != location.identifier() {
        return Err(ValidationError::IdentifierMismatch {
            chain_id: chain_id.to_string(),
            identifier: location.identifier().to_string(),
        });
    }

    if location.extension() != "json" {
        return Err(ValidationError::InvalidExtension(
            location.extension().to_string(),
        ));
    }

    let network_id = NetworkId::from_record(record)?;

    let extra = extraneous_fields(record.field_names());
    if !extra.is_empty() {
        return Err(ValidationError::ExtraneousFields(extra));
    }

    let missing = missing_fields(record.field_names());
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if let Some(ens) = record.get("ens") {
        check_ens(ens)?;
    }

    let rpc_endpoints = if probe_network {
        rpc_endpoints(record.get("rpc"))?
    } else {
        Vec::new()
    };

    Ok(CheckedRecord {
        chain_id,
        network_id,
        rpc_endpoints,
    })
}

/// `ens` must be an object holding exactly a valid `registry` address.
fn check_ens(ens: &Value) -> Result<(), ValidationError> {
    let Value::Object(ens) = ens else {
        return Err(ValidationError::EnsMustBeObject);
    };

    if ens.len() != 1 || !ens.contains_key("registry") {
        return Err(ValidationError::EnsInvalidKeys);
    }

    match ens.get("registry") {
        Some(Value::String(registry)) => parse_address(registry)
            .map(|_| ())
            .map_err(|e| {
                tracing::debug!(error = %e, "ens registry rejected");
                ValidationError::EnsInvalidAddress
            }),
        _ => Err(ValidationError::EnsInvalidAddress),
    }
}

fn rpc_endpoints(rpc: Option<&Value>) -> Result<Vec<String>, ValidationError> {
    let Some(Value::Array(items)) = rpc else {
        return Err(ValidationError::RpcNotAList);
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(url) => Ok(url.clone()),
            _ => Err(ValidationError::RpcElementNotString),
        })
        .collect()
}
