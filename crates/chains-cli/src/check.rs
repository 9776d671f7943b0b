//! # Check Subcommand
//!
//! Walks a data directory (or takes a single file), loads every record and
//! runs it through the validator. Output is one line per record plus a
//! summary, or a JSON document with `--json`.
//!
//! Records are independent: a failing record is reported and the walk goes
//! on, unless `--fail-fast` is set. Probe diagnostics never count as
//! failures.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use chains_core::{
    display_quantity, load_record, EndpointProbe, NoNetwork, RecordValidator, RpcConnector,
};
use chains_rpc::HttpConnector;

use crate::config::CheckerConfig;

/// Arguments for the `chains check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Record file or directory to check (default: the configured data directory).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Connect to every RPC endpoint of each valid record and report
    /// client version, block number and gas price.
    #[arg(long)]
    pub rpc_connect: bool,

    /// Stop at the first failing record.
    #[arg(long)]
    pub fail_fast: bool,

    /// Print a JSON summary instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of one record file.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    /// The record file.
    pub path: PathBuf,
    /// Chain ID of a valid record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    /// Violation kind of an invalid record (`IoError`/`ParseError` for load failures).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Violation message of an invalid record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Probe results, in endpoint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub probes: Vec<ProbeOutcome>,
}

impl RecordOutcome {
    /// Whether the record passed.
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Printable form of an [`EndpointProbe`].
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    /// Endpoint URL.
    pub endpoint: String,
    /// `web3_clientVersion`, or `unavailable`.
    pub client: String,
    /// Decimal block number, or `unavailable`.
    pub block_number: String,
    /// Decimal gas price, or `unavailable`.
    pub gas_price: String,
    /// Failures met while probing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl From<&EndpointProbe> for ProbeOutcome {
    fn from(probe: &EndpointProbe) -> Self {
        Self {
            endpoint: probe.endpoint.clone(),
            client: probe
                .client_version
                .clone()
                .unwrap_or_else(|| "unavailable".to_string()),
            block_number: display_quantity(probe.block_number.as_ref()),
            gas_price: display_quantity(probe.gas_price.as_ref()),
            diagnostics: probe.diagnostics.clone(),
        }
    }
}

/// Totals of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    /// Records checked.
    pub total: usize,
    /// Records that passed.
    pub passed: usize,
    /// Records that failed.
    pub failed: usize,
    /// Per-record outcomes, in processing order.
    pub records: Vec<RecordOutcome>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every record passes, 1 when any record fails,
/// 2 when the target path does not exist.
pub fn run_check(args: &CheckArgs, config: &CheckerConfig) -> Result<u8> {
    let target = args.path.clone().unwrap_or_else(|| config.data_dir.clone());
    let rpc_connect = args.rpc_connect || config.rpc_connect;

    if !target.exists() {
        eprintln!("ERROR: path does not exist: {}", target.display());
        return Ok(2);
    }

    let files = if target.is_dir() {
        find_record_files(&target)
    } else {
        vec![target.clone()]
    };

    tracing::info!(
        target = %target.display(),
        files = files.len(),
        rpc_connect,
        "checking chain records"
    );

    let summary = if rpc_connect {
        let connector = HttpConnector::new().context("failed to set up RPC client")?;
        check_files(&RecordValidator::new(connector), &files, true, args)
    } else {
        check_files(&RecordValidator::new(NoNetwork), &files, false, args)
    };

    if args.json {
        let out = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{out}");
    } else {
        println!("Chains: {}/{} passed", summary.passed, summary.total);
        if summary.failed > 0 {
            println!(
                "\n{} record(s) failed validation out of {} total.",
                summary.failed, summary.total
            );
        }
    }

    Ok(if summary.failed > 0 { 1 } else { 0 })
}

/// Check each file in order and collect the outcomes.
pub fn check_files<C: RpcConnector>(
    validator: &RecordValidator<C>,
    files: &[PathBuf],
    rpc_connect: bool,
    args: &CheckArgs,
) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for path in files {
        let outcome = check_file(validator, path, rpc_connect);
        if !args.json {
            print_outcome(&outcome);
        }

        summary.total += 1;
        let passed = outcome.passed();
        if passed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
        summary.records.push(outcome);

        if !passed && args.fail_fast {
            tracing::warn!(path = %path.display(), "stopping at first failure");
            break;
        }
    }

    summary
}

/// Load and validate a single record file.
pub fn check_file<C: RpcConnector>(
    validator: &RecordValidator<C>,
    path: &Path,
    rpc_connect: bool,
) -> RecordOutcome {
    let mut outcome = RecordOutcome {
        path: path.to_path_buf(),
        chain_id: None,
        kind: None,
        error: None,
        probes: Vec::new(),
    };

    let record = match load_record(path) {
        Ok(record) => record,
        Err(e) => {
            outcome.kind = Some(e.kind());
            outcome.error = Some(e.to_string());
            return outcome;
        }
    };

    match validator.validate(&path.display().to_string(), &record, rpc_connect) {
        Ok(report) => {
            outcome.chain_id = Some(report.chain_id.to_string());
            outcome.probes = report.probes.iter().map(ProbeOutcome::from).collect();
        }
        Err(e) => {
            outcome.kind = Some(e.kind());
            outcome.error = Some(e.to_string());
        }
    }

    outcome
}

fn print_outcome(outcome: &RecordOutcome) {
    match &outcome.error {
        None => println!("OK: {}", outcome.path.display()),
        Some(err) => println!("FAIL: {} — {}", outcome.path.display(), err),
    }

    for probe in &outcome.probes {
        println!("  connecting to {}", probe.endpoint);
        println!("  Client: {}", probe.client);
        println!("  BlockNumber: {}", probe.block_number);
        println!("  GasPrice: {}", probe.gas_price);
        for diagnostic in &probe.diagnostics {
            println!("  WARN: {diagnostic}");
        }
    }
}

/// Recursively collect every regular file under `dir`, sorted.
///
/// Files of any extension are returned so that misnamed records are
/// reported rather than skipped.
pub fn find_record_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    walk_for_files(dir, &mut results);
    results.sort();
    results
}

fn walk_for_files(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during file walk"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk_for_files(&path, acc);
        } else if path.is_file() {
            acc.push(path);
        }
    }
}
