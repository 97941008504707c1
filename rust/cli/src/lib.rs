//! # holdem-cli
//!
//! Terminal front end for the holdem engine: play heads-up against an
//! automated seat, pit two policies against each other, or inspect the
//! resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand;
//! [`run_with_input`] does the same with an explicit input stream for `play`.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "sim", "--hands", "100", "--seed", "7"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against an automated opponent
//! - `sim`: Run two automated seats against each other
//! - `cfg`: Display the resolved configuration

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod pacing;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};
use config::Overrides;

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Parses `args` and runs the subcommand, reading `play` input from stdin.
///
/// Returns the process exit code: `0` on success, `2` on errors and `130`
/// when a session is interrupted.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with `play` actions read from `input`.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("q\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = holdem_cli::run_with_input(
///     ["holdem", "play", "--seed", "1", "--delay-ms", "0"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: holdem <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: holdem --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            hands,
            seed,
            bot,
            delay_ms,
            stack,
            name,
        } => {
            let overrides = Overrides {
                seed,
                starting_stack: stack,
                bot,
                bot_delay_ms: delay_ms,
            };
            handle_play_command(hands, &name, &overrides, input, out, err)
        }
        Commands::Sim {
            hands,
            seed,
            bot_a,
            bot_b,
            stack,
        } => {
            let overrides = Overrides {
                seed,
                starting_stack: stack,
                ..Overrides::default()
            };
            handle_sim_command(hands, bot_a, bot_b, &overrides, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            e.exit_code()
        }
    }
}
