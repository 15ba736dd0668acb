//! # Referee CLI Library
//!
//! Command-line driver for the referee rules engine. It runs matches between
//! action providers, evaluates hands from notation and shows configuration.
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
//! let args = vec!["referee", "sim", "--hands", "10", "--seed", "7"];
//! let code = referee_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play a match between providers and record hand histories
//! - `eval`: Evaluate 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, RefereeCli};
use commands::{handle_cfg_command, handle_eval_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "eval", "cfg"];

/// Parses `args` and runs the chosen subcommand.
///
/// Normal output goes to `out`, diagnostics to `err`. Returns the process
/// exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["referee", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
/// let mut out = Vec::new();
/// let code = referee_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "Royal Flush: Ah Kh Qh Jh Th\n");
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RefereeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Sim {
            hands,
            seed,
            output,
            players,
        } => handle_sim_command(hands, seed, output, players, out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "\nUsage: referee <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: referee --help");
    exit_code::ERROR
}
