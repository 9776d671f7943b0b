//! # Account Addresses
//!
//! An account address is 20 bytes written as 40 hex digits, with or without
//! a `0x` prefix. All-lowercase and all-uppercase spellings carry no
//! checksum. A mixed-case spelling is an EIP-55 checksum and must match the
//! keccak-derived casing exactly.

use std::str::FromStr;

use alloy_primitives::Address;
use thiserror::Error;

/// Why a string is not a valid account address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Not 40 hex digits after the optional prefix.
    #[error("invalid address format: \"{0}\" (expected 40 hex digits)")]
    InvalidFormat(String),

    /// Mixed-case spelling that does not match its EIP-55 checksum.
    #[error("invalid EIP-55 checksum: \"{given}\" (expected {expected})")]
    BadChecksum {
        /// The address as written.
        given: String,
        /// The correctly checksummed spelling.
        expected: String,
    },
}

/// Parse an account address, enforcing EIP-55 on mixed-case input.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidFormat(input.to_string()));
    }

    let address =
        Address::from_str(digits).map_err(|_| AddressError::InvalidFormat(input.to_string()))?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        let expected = address.to_checksum(None);
        if expected[2..] != *digits {
            return Err(AddressError::BadChecksum {
                given: input.to_string(),
                expected,
            });
        }
    }

    Ok(address)
}
