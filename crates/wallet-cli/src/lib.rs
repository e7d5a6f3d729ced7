//! Library components of the `wallet-inspect` command line tool.

pub mod config;
pub mod logging;
pub mod report;
