//! # chains-cli — Chain Record Checker CLI
//!
//! Provides the `chains` command-line interface used in CI for chain record
//! repositories:
//!
//! ```bash
//! chains check                      # every record under _data/chains
//! chains check _data/chains/1.json  # a single record
//! chains check --rpc-connect        # also probe RPC endpoints
//! ```
//!
//! Handlers only do traversal, loading and reporting. All record rules live
//! in `chains-core`.

pub mod check;
pub mod config;

pub use config::{CheckerConfig, ConfigError};
