//! # Record Location Tokens
//!
//! A record is identified by its storage path. Two tokens are derived from
//! the final path component:
//!
//! - the **identifier**: the file name up to its last `.`
//! - the **extension**: the text after the last `.`, empty when there is none
//!
//! `std::path::Path::file_stem` treats a leading dot as part of the stem
//! (`.json` has no extension there), so the split is done on the file name
//! text directly.

use std::path::Path;

/// Identifier and extension tokens of a record's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLocation {
    identifier: String,
    extension: String,
}

impl RecordLocation {
    /// Derive the tokens from a location string.
    pub fn parse(location: &str) -> Self {
        let file_name = Path::new(location)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match file_name.rsplit_once('.') {
            Some((identifier, extension)) => Self {
                identifier: identifier.to_string(),
                extension: extension.to_string(),
            },
            None => Self {
                identifier: file_name,
                extension: String::new(),
            },
        }
    }

    /// File name without its extension. Must equal the decimal `chainId`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Text after the last `.` of the file name.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}
