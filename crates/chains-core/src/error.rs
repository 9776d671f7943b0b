//! # Error Hierarchy
//!
//! [`ValidationError`] is the closed set of record violations. Each variant
//! is terminal for the record it was raised on: callers match on the kind
//! and report it, nothing is retried.
//!
//! [`LoadError`] belongs to the loader and fires before a [`Record`] exists.
//!
//! [`Record`]: crate::Record

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

/// A violation of the chain record rules.
///
/// Messages match the wording contributors already know from the CI output
/// of the record repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The named field is absent or is not an integer-valued number.
    #[error("{0} must be a number")]
    InvalidFieldType(String),

    /// The decimal `chainId` differs from the file name.
    #[error("chainId must match the filename (chainId {chain_id}, filename {identifier})")]
    IdentifierMismatch {
        /// Decimal form of the record's `chainId`.
        chain_id: String,
        /// File name without its extension.
        identifier: String,
    },

    /// The file extension is not `json`.
    #[error("filename extension must be json (found \"{0}\")")]
    InvalidExtension(String),

    /// The record carries fields outside the mandatory and optional sets.
    #[error("should have no extra field {0:?}")]
    ExtraneousFields(BTreeSet<String>),

    /// Mandatory fields are absent.
    #[error("missing field(s) {0:?}")]
    MissingFields(BTreeSet<String>),

    /// `ens` is present but is not an object.
    #[error("ens must be an object")]
    EnsMustBeObject,

    /// `ens` has a key set other than exactly `{registry}`.
    #[error("ens can only have a registry currently")]
    EnsInvalidKeys,

    /// `ens.registry` is not a string holding a valid account address.
    #[error("ens registry must have valid address")]
    EnsInvalidAddress,

    /// `rpc` is not a list (checked only when probing).
    #[error("rpc must be a list")]
    RpcNotAList,

    /// An `rpc` element is not a string (checked only when probing).
    #[error("rpc must be a list of strings")]
    RpcElementNotString,
}

impl ValidationError {
    /// Stable kind name, independent of the variant payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFieldType(_) => "InvalidFieldType",
            Self::IdentifierMismatch { .. } => "IdentifierMismatch",
            Self::InvalidExtension(_) => "InvalidExtension",
            Self::ExtraneousFields(_) => "ExtraneousFields",
            Self::MissingFields(_) => "MissingFields",
            Self::EnsMustBeObject => "ENSMustBeObject",
            Self::EnsInvalidKeys => "ENSInvalidKeys",
            Self::EnsInvalidAddress => "ENSInvalidAddress",
            Self::RpcNotAList => "RPCNotAList",
            Self::RpcElementNotString => "RPCElementNotString",
        }
    }
}

/// Errors raised while turning a file into a [`Record`](crate::Record).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not UTF-8 JSON whose top level is an object.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// `IoError` or `ParseError`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IoError",
            Self::Parse { .. } => "ParseError",
        }
    }
}
