//! CLI argument definitions for `wallet-inspect`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wallet-inspect",
    version,
    about = "Inspect a wallet extension state snapshot",
    long_about = "Load a JSON snapshot of the wallet extension state and print the \
                  derived views the popup renders: ordered accounts, network \
                  descriptors, notifications, swaps defaults and more."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the settings file).
    #[arg(long = "output", value_enum, global = true)]
    pub output: Option<OutputFormatArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Accounts in keyring order with their balances.
    Accounts(StateArgs),

    /// Current chain and what it supports.
    Network(StateArgs),

    /// Notifications waiting to be shown.
    Notifications(StateArgs),

    /// Default "from" token of the swaps form.
    SwapsToken(StateArgs),

    /// Address-book name and keyring of an address.
    Lookup(LookupArgs),

    /// Selected account, pending requests and reminders.
    Summary(StateArgs),
}

#[derive(Args)]
pub struct StateArgs {
    /// JSON state snapshot.
    #[arg(value_name = "STATE_FILE")]
    pub state_file: PathBuf,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Address to look up, with or without `0x`.
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
