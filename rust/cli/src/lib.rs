//! # Pokersum CLI Library
//!
//! Command-line front end for the `pokersum-engine` crate: classify and
//! compare five-card hands, count and list the value sequences that sum to a
//! number, and build the strongest hand from a deck for a given sum.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokersum", "classify", "10H", "JH", "QH", "KH", "AH"];
//! let code = pokersum_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `classify`: Name the category of five cards
//! - `compare`: Decide which of two hands wins
//! - `count`: Count ordered value sequences summing to a target
//! - `enumerate`: List those sequences
//! - `build`: Best hand from the deck for a target sum
//! - `targets`: Sums the deck can still reach
//! - `deal`: Deal and classify a seeded hand
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, PokersumCli};
use commands::enumerate::Length;
use commands::{
    handle_build_command, handle_cfg_command, handle_classify_command, handle_compare_command,
    handle_count_command, handle_deal_command, handle_enumerate_command, handle_targets_command,
};
use formatters::SuitStyle;

pub use error::CliError;

const COMMANDS: &[&str] = &[
    "classify",
    "compare",
    "count",
    "enumerate",
    "build",
    "targets",
    "deal",
    "cfg",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokersum", "count", "--target", "14", "--slots", "2"];
/// let code = pokersum_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokersumCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    // cfg reports its own configuration errors
    if let Commands::Cfg = cli.cmd {
        return finish(handle_cfg_command(out, err), err);
    }

    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    let style = SuitStyle::detect(cfg.ascii);
    tracing::debug!(command = ?cli.cmd, ?style, "dispatching");

    let result = match cli.cmd {
        Commands::Classify { cards } => handle_classify_command(&cards, style, out),
        Commands::Compare { a, b } => handle_compare_command(&a, &b, style, out),
        Commands::Count { target, slots } => {
            handle_count_command(target, slots.unwrap_or(cfg.slots), out)
        }
        Commands::Enumerate {
            target,
            slots,
            any_length,
            limit,
        } => {
            let length = if any_length {
                Length::Any
            } else {
                Length::Slots(slots.unwrap_or(cfg.slots))
            };
            handle_enumerate_command(target, length, limit.unwrap_or(cfg.limit), out, err)
        }
        Commands::Build { target, removed } => {
            handle_build_command(target, &removed, style, out, err)
        }
        Commands::Targets { removed } => handle_targets_command(&removed, out, err),
        Commands::Deal { seed } => handle_deal_command(seed.or(cfg.seed), style, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };
    finish(result, err)
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        // cfg already wrote its message
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = write_usage(&e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Pokersum CLI")?;
    writeln!(err, "Usage: pokersum <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: pokersum --help")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_command_list_matches_subcommands() {
        use clap::CommandFactory;
        let cmd = PokersumCli::command();
        let mut names: Vec<&str> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        let mut listed = COMMANDS.to_vec();
        names.sort_unstable();
        listed.sort_unstable();
        assert_eq!(names, listed);
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run_args(&["pokersum", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let (code, out, err) = run_args(&["pokersum", "shuffle"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Commands:"));
        assert!(err.contains("  enumerate"));
    }

    #[test]
    #[serial]
    fn test_engine_error_exit_code() {
        let (code, _, err) = run_args(&["pokersum", "classify", "AH", "2S"]);
        assert_eq!(code, 2);
        assert!(err.starts_with("Error: Engine error: A hand needs exactly 5 cards, got 2"));
    }

    #[test]
    #[serial]
    fn test_slots_default_from_config() {
        unsafe { std::env::set_var("POKERSUM_SLOTS", "2") };
        let (code, out, _) = run_args(&["pokersum", "count", "--target", "14"]);
        unsafe { std::env::remove_var("POKERSUM_SLOTS") };
        assert_eq!(code, 0);
        assert_eq!(out, "Sequences of 2 values summing to 14: 13\n");
    }

    #[test]
    #[serial]
    fn test_invalid_config_fails_before_dispatch() {
        unsafe { std::env::set_var("POKERSUM_LIMIT", "zero") };
        let (code, out, err) = run_args(&["pokersum", "count", "--target", "14"]);
        unsafe { std::env::remove_var("POKERSUM_LIMIT") };
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Invalid configuration"));
    }
}
