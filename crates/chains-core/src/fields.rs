//! # Field Classification
//!
//! The record schema is nothing more than two fixed name lists. Every key
//! in a record is mandatory, optional, or extraneous.

use std::collections::BTreeSet;

/// Fields every record must carry.
pub const MANDATORY_FIELDS: [&str; 10] = [
    "name",
    "shortName",
    "chain",
    "network",
    "chainId",
    "networkId",
    "rpc",
    "faucets",
    "infoURL",
    "nativeCurrency",
];

/// Fields a record may carry.
pub const OPTIONAL_FIELDS: [&str; 2] = ["slip44", "ens"];

/// The class a field name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Listed in [`MANDATORY_FIELDS`].
    Mandatory,
    /// Listed in [`OPTIONAL_FIELDS`].
    Optional,
    /// Anything else.
    Extraneous,
}

impl FieldClass {
    /// Classify a field name.
    pub fn of(name: &str) -> Self {
        if MANDATORY_FIELDS.contains(&name) {
            Self::Mandatory
        } else if OPTIONAL_FIELDS.contains(&name) {
            Self::Optional
        } else {
            Self::Extraneous
        }
    }
}

/// Field names present in `keys` that are neither mandatory nor optional.
pub fn extraneous_fields<'a>(keys: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    keys.into_iter()
        .filter(|k| FieldClass::of(k) == FieldClass::Extraneous)
        .map(str::to_string)
        .collect()
}

/// Mandatory field names absent from `keys`.
pub fn missing_fields<'a>(keys: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    let present: BTreeSet<&str> = keys.into_iter().collect();
    MANDATORY_FIELDS
        .iter()
        .filter(|f| !present.contains(*f))
        .map(|f| f.to_string())
        .collect()
}
