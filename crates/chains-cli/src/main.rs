//! `chains` binary. Logs go to stderr so stdout carries only the report.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chains_cli::check::{run_check, CheckArgs};
use chains_cli::CheckerConfig;

/// Chain record checker.
///
/// Validates chain record files (one JSON file per chain, named after its
/// chain ID) and optionally probes their RPC endpoints.
#[derive(Parser, Debug)]
#[command(name = "chains", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate chain records, optionally probing their RPC endpoints.
    Check(CheckArgs),
}

/// Exit status for a run that could not check anything.
const EXIT_OPERATIONAL: u8 = 2;

fn log_filter(verbose: u8) -> EnvFilter {
    // -v shows per-record progress, -vv rejected-record detail and RPC traffic.
    EnvFilter::new(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CheckerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "bad checker environment");
            return ExitCode::from(EXIT_OPERATIONAL);
        }
    };

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        rpc_connect = config.rpc_connect,
        "checker configured"
    );

    let Commands::Check(args) = cli.command;
    match run_check(&args, &config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("check aborted: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_check_defaults() {
        let cli = Cli::try_parse_from(["chains", "check"]).unwrap();
        let Commands::Check(args) = cli.command;
        assert!(args.path.is_none());
        assert!(!args.rpc_connect);
        assert!(!args.fail_fast);
        assert!(!args.json);
    }

    #[test]
    fn cli_parse_check_with_path() {
        let cli = Cli::try_parse_from(["chains", "check", "_data/chains/1.json"]).unwrap();
        let Commands::Check(args) = cli.command;
        assert_eq!(args.path, Some(PathBuf::from("_data/chains/1.json")));
    }

    #[test]
    fn cli_parse_check_all_flags() {
        let cli = Cli::try_parse_from([
            "chains",
            "check",
            "--rpc-connect",
            "--fail-fast",
            "--json",
            "data",
        ])
        .unwrap();
        let Commands::Check(args) = cli.command;
        assert!(args.rpc_connect);
        assert!(args.fail_fast);
        assert!(args.json);
        assert_eq!(args.path, Some(PathBuf::from("data")));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["chains", "check"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["chains", "-vv", "check"]).unwrap();
        assert_eq!(cli2.verbose, 2);

        let cli3 = Cli::try_parse_from(["chains", "check", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["chains"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["chains", "nonexistent"]).is_err());
    }
}
