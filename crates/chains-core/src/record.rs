//! # Chain Record
//!
//! A [`Record`] is the parsed top-level JSON object of one chain file. It is
//! immutable once built; the validator only reads it.
//!
//! `chainId` and `networkId` must be integer-valued numbers. Any integer
//! literal is accepted, including values that do not fit in 64 bits, since
//! `serde_json` keeps the literal digits (`arbitrary_precision`). Floats
//! (`1.0`, `1e3`) and strings (`"1"`) are rejected.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::ValidationError;

/// One chain record: field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Build a record from a JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Look up a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the field is present, whatever its value.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// All field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// The record's `chainId`, kept in its decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId(String);

impl ChainId {
    /// Read `chainId` from a record.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidFieldType`] when the field is absent or not
    /// an integer-valued number.
    pub fn from_record(record: &Record) -> Result<Self, ValidationError> {
        integer_field(record, "chainId").map(Self)
    }

    /// Decimal string form, compared against the file name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The record's `networkId`, kept in its decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkId(String);

impl NetworkId {
    /// Read `networkId` from a record.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidFieldType`] when the field is absent or not
    /// an integer-valued number.
    pub fn from_record(record: &Record) -> Result<Self, ValidationError> {
        integer_field(record, "networkId").map(Self)
    }

    /// Decimal string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn integer_field(record: &Record, field: &str) -> Result<String, ValidationError> {
    match record.get(field) {
        Some(Value::Number(n)) => {
            integer_literal(n).ok_or_else(|| ValidationError::InvalidFieldType(field.to_string()))
        }
        _ => Err(ValidationError::InvalidFieldType(field.to_string())),
    }
}

/// Decimal form of an integer-valued number, `None` for anything fractional
/// or written with an exponent.
fn integer_literal(n: &Number) -> Option<String> {
    if let Some(v) = n.as_u64() {
        return Some(v.to_string());
    }
    if let Some(v) = n.as_i64() {
        return Some(v.to_string());
    }
    let text = n.to_string();
    let digits = text.strip_prefix('-').unwrap_or(&text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(text)
    } else {
        None
    }
}
