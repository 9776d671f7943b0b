#![deny(missing_docs)]

//! # chains-core — Validation Engine for Chain Records
//!
//! A chain record is one JSON file describing an EVM network (name, chain ID,
//! RPC endpoints, native currency, ...). The file name must be the chain ID,
//! so `_data/chains/1.json` describes chain `1`.
//!
//! This crate owns everything needed to judge a single record:
//!
//! - [`fields`] — the fixed mandatory/optional field-name sets.
//! - [`location`] — identifier and extension tokens derived from a path.
//! - [`record`] — the parsed [`Record`] and its integer-typed ID fields.
//! - [`address`] — account address parsing with EIP-55 checksum validity.
//! - [`validate`] — the ordered, fail-fast check pipeline.
//! - [`probe`] — diagnostic-only RPC probing behind the [`RpcConnector`] seam.
//! - [`loader`] — reading and parsing record files.
//!
//! ## Design Principles
//!
//! 1. **First violation wins.** [`validate::check_record`] runs its checks in
//!    a fixed order and returns the first [`ValidationError`]. There is no
//!    aggregation inside the core.
//!
//! 2. **Probing never gates.** Network failures are captured in
//!    [`EndpointProbe`] diagnostics and never become a [`ValidationError`].
//!
//! 3. **No transport here.** The HTTP client lives in `chains-rpc`; the core
//!    only sees the [`RpcConnector`] and [`EthereumRpc`] traits.

pub mod address;
pub mod error;
pub mod fields;
pub mod loader;
pub mod location;
pub mod probe;
pub mod record;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use address::{parse_address, AddressError};
pub use error::{LoadError, ValidationError};
pub use fields::{FieldClass, MANDATORY_FIELDS, OPTIONAL_FIELDS};
pub use loader::{load_record, parse_record};
pub use location::RecordLocation;
pub use probe::{
    decode_quantity, display_quantity, EndpointProbe, EthereumRpc, NetworkProber, NoNetwork,
    RpcConnector,
};
pub use record::{ChainId, NetworkId, Record};
pub use validate::{check_record, CheckedRecord, RecordValidator, ValidationReport};
